//! WebSocket 推送通道
//!
//! 每个观察者一条持久连接；只有服务器 → 客户端的消息，
//! 客户端发来的帧一律忽略 (纯监听通道)。
//!
//! 通道层不做认证 (HTTP 升级之前如有认证已在上层完成)，
//! 也不做过滤：每个订阅者收到每个订单的事件。
//! 连接时的状态补齐走 `GET /api/orders` (本通道无回放)。

use axum::{
    Router,
    extract::{
        State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
    routing::get,
};
use futures::{SinkExt, StreamExt};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/ws", get(upgrade))
}

async fn upgrade(State(state): State<ServerState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// 单连接转发循环
///
/// 注册订阅者 → 把邮箱里的快照序列化成 JSON 文本帧发出 →
/// 断开/出错/关机时注销。注销是幂等的，与进行中的广播并发安全。
async fn handle_socket(socket: WebSocket, state: ServerState) {
    let bus = state.bus.clone();
    let (id, mut mailbox) = bus.subscribe();
    let shutdown = bus.shutdown_token().clone();

    let (mut sink, mut stream) = socket.split();

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,

            msg = mailbox.recv() => {
                let Some(msg) = msg else { break };
                let text = match serde_json::to_string(&msg) {
                    Ok(t) => t,
                    Err(e) => {
                        tracing::error!(subscriber = id, error = %e, "Failed to serialize broadcast");
                        continue;
                    }
                };
                if sink.send(Message::Text(text.into())).await.is_err() {
                    // 对端已断开；交给清理逻辑
                    break;
                }
            }

            incoming = stream.next() => {
                match incoming {
                    // 客户端是纯监听者，忽略其发来的一切帧 (含 ping/pong 由 axum 处理)
                    Some(Ok(_)) => {}
                    Some(Err(_)) | None => break,
                }
            }
        }
    }

    bus.unsubscribe(id);
    tracing::debug!(subscriber = id, "WebSocket connection closed");
}

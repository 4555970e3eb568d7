//! 订单广播总线
//!
//! # 架构
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                      OrderBus                         │
//! │  ┌────────────────────────────────────────────────┐  │
//! │  │  DashMap<SubscriberId, mpsc::Sender<BusMessage>>│  │
//! │  └────────────────────────────────────────────────┘  │
//! └───────────────────────┬──────────────────────────────┘
//!                        │ publish() — try_send 逐个投递
//!         ┌──────────────┼──────────────┐
//!         ▼              ▼              ▼
//!    mailbox (64)   mailbox (64)   mailbox (64)
//!    WS 连接任务     WS 连接任务     WS 连接任务
//! ```
//!
//! # 投递语义
//!
//! - At-most-once，尽力而为：发布时不在线的订阅者什么都收不到，
//!   没有回放日志，重连后走查询接口补齐状态。
//! - 不做过滤：每条消息发给每个订阅者，客户端自行丢弃无关订单。
//! - 单个订阅者的邮箱满时丢弃本条新消息 (drop-new)，不影响其他
//!   订阅者，也绝不阻塞提交方。
//! - 对单个订阅者，消息到达顺序 = publish 调用顺序。

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use shared::message::BusMessage;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio_util::sync::CancellationToken;

/// 订阅者句柄 - 连接期间有效，无持久身份
pub type SubscriberId = u64;

/// 每个订阅者的有界邮箱容量默认值
pub const DEFAULT_MAILBOX_CAPACITY: usize = 64;

/// 订单广播总线 - 负责订阅者管理和快照分发
///
/// 注册表由总线显式持有 (非进程级单例)，
/// 多个总线实例可以在测试中独立构造。
#[derive(Debug)]
pub struct OrderBus {
    /// 已注册的订阅者 (SubscriberId -> 邮箱发送端)
    subscribers: DashMap<SubscriberId, mpsc::Sender<BusMessage>>,
    /// 单调递增的订阅者 ID 分配器
    next_id: AtomicU64,
    /// 每个订阅者的邮箱容量
    mailbox_capacity: usize,
    /// 关闭信号令牌
    shutdown_token: CancellationToken,
}

impl OrderBus {
    /// 创建默认容量的广播总线
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAILBOX_CAPACITY)
    }

    /// 创建指定邮箱容量的广播总线
    pub fn with_capacity(mailbox_capacity: usize) -> Self {
        Self {
            subscribers: DashMap::new(),
            next_id: AtomicU64::new(1),
            mailbox_capacity: mailbox_capacity.max(1),
            shutdown_token: CancellationToken::new(),
        }
    }

    /// 注册订阅者 - 无条件准入，无容量上限
    ///
    /// 返回句柄和接收端；接收端被 drop 后，
    /// 下一次 publish 会静默清除该订阅者。
    pub fn subscribe(&self) -> (SubscriberId, mpsc::Receiver<BusMessage>) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::channel(self.mailbox_capacity);
        self.subscribers.insert(id, tx);
        tracing::debug!(subscriber = id, total = self.subscribers.len(), "Subscriber registered");
        (id, rx)
    }

    /// 注销订阅者 - 幂等，可与进行中的 publish 并发调用
    pub fn unsubscribe(&self, id: SubscriberId) {
        if self.subscribers.remove(&id).is_some() {
            tracing::debug!(subscriber = id, total = self.subscribers.len(), "Subscriber removed");
        }
    }

    /// 当前订阅者数量
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// 广播一条快照到所有订阅者
    ///
    /// Fire-and-forget：逐个 try_send，绝不等待慢订阅者。
    /// 邮箱满 → 丢弃本条 (drop-new)；邮箱已关闭 → 清除该订阅者。
    pub fn publish(&self, msg: BusMessage) {
        let mut stale: Vec<SubscriberId> = Vec::new();

        for entry in self.subscribers.iter() {
            match entry.value().try_send(msg.clone()) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    tracing::debug!(
                        subscriber = entry.key(),
                        kind = msg.kind(),
                        "Mailbox full, dropping broadcast for this subscriber"
                    );
                }
                Err(TrySendError::Closed(_)) => {
                    stale.push(*entry.key());
                }
            }
        }

        // 迭代中不能 remove (DashMap 分片锁)，收集后统一清除
        for id in stale {
            self.subscribers.remove(&id);
            tracing::debug!(subscriber = id, "Dropped closed subscriber");
        }
    }

    /// 获取关闭令牌 (连接任务监听此信号退出)
    pub fn shutdown_token(&self) -> &CancellationToken {
        &self.shutdown_token
    }

    /// 优雅关闭总线 - 取消所有连接任务
    pub fn shutdown(&self) {
        tracing::info!("Shutting down order bus");
        self.shutdown_token.cancel();
    }
}

impl Default for OrderBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Order, OrderStatus};

    fn snapshot(id: i64) -> Order {
        Order {
            id,
            table_code: "TABLE01".into(),
            status: OrderStatus::Received,
            queue_number: None,
            wait_time: None,
            notification: None,
            created_at: 0,
            updated_at: 0,
            items: vec![],
        }
    }

    fn new_order(id: i64) -> BusMessage {
        BusMessage::NewOrder { order: snapshot(id) }
    }

    #[tokio::test]
    async fn publish_reaches_every_registered_subscriber() {
        let bus = OrderBus::new();
        let (_a, mut rx_a) = bus.subscribe();
        let (_b, mut rx_b) = bus.subscribe();

        bus.publish(new_order(1));

        assert_eq!(rx_a.try_recv().unwrap().order().id, 1);
        assert_eq!(rx_b.try_recv().unwrap().order().id, 1);
        assert!(rx_a.try_recv().is_err());
        assert!(rx_b.try_recv().is_err());
    }

    #[tokio::test]
    async fn late_subscriber_sees_nothing() {
        let bus = OrderBus::new();
        bus.publish(new_order(1));

        let (_id, mut rx) = bus.subscribe();
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn unsubscribe_is_idempotent() {
        let bus = OrderBus::new();
        let (id, _rx) = bus.subscribe();
        bus.unsubscribe(id);
        bus.unsubscribe(id);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn full_mailbox_drops_new_message_only_for_that_subscriber() {
        let bus = OrderBus::with_capacity(2);
        let (_slow, mut rx_slow) = bus.subscribe();
        let (_fast, mut rx_fast) = bus.subscribe();

        bus.publish(new_order(1));
        bus.publish(new_order(2));
        // slow 的邮箱已满，第三条对它 drop-new
        bus.publish(new_order(3));

        assert_eq!(rx_slow.try_recv().unwrap().order().id, 1);
        assert_eq!(rx_slow.try_recv().unwrap().order().id, 2);
        assert!(rx_slow.try_recv().is_err());

        // 其他订阅者不受影响
        assert_eq!(rx_fast.try_recv().unwrap().order().id, 1);
        assert_eq!(rx_fast.try_recv().unwrap().order().id, 2);
        assert_eq!(rx_fast.try_recv().unwrap().order().id, 3);
    }

    #[tokio::test]
    async fn dropped_receiver_is_evicted_silently() {
        let bus = OrderBus::new();
        let (_gone, rx_gone) = bus.subscribe();
        let (_live, mut rx_live) = bus.subscribe();
        drop(rx_gone);

        // 不应 panic，也不影响存活的订阅者
        bus.publish(new_order(1));

        assert_eq!(rx_live.try_recv().unwrap().order().id, 1);
        assert_eq!(bus.subscriber_count(), 1);
    }

    #[tokio::test]
    async fn per_subscriber_delivery_order_matches_publish_order() {
        let bus = OrderBus::new();
        let (_id, mut rx) = bus.subscribe();

        for i in 1..=5 {
            bus.publish(new_order(i));
        }
        for i in 1..=5 {
            assert_eq!(rx.recv().await.unwrap().order().id, i);
        }
    }
}

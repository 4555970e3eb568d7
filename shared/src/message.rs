//! 推送通道消息类型定义
//!
//! 这些类型在 tabletalk-server 和前端客户端之间共享。
//! 生命周期引擎每次提交后，将完整订单快照封装成 [`BusMessage`]
//! 通过 WebSocket 推送给所有订阅者。
//!
//! # 线上格式
//!
//! ```json
//! { "type": "new_order",     "order": { ... } }
//! { "type": "order_updated", "order": { ... } }
//! ```

use serde::{Deserialize, Serialize};

use crate::models::Order;

/// 推送通道消息 - 服务器 → 客户端单向
///
/// 订阅者不做任何过滤：每条消息发给每个连接，
/// 客户端自行丢弃与己无关的订单。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BusMessage {
    /// 订单创建广播
    NewOrder { order: Order },
    /// 订单更新广播 (包括空 PATCH)
    OrderUpdated { order: Order },
}

impl BusMessage {
    /// 消息携带的订单快照
    pub fn order(&self) -> &Order {
        match self {
            BusMessage::NewOrder { order } => order,
            BusMessage::OrderUpdated { order } => order,
        }
    }

    /// 事件类型名 (线上 `type` 字段)
    pub fn kind(&self) -> &'static str {
        match self {
            BusMessage::NewOrder { .. } => "new_order",
            BusMessage::OrderUpdated { .. } => "order_updated",
        }
    }
}

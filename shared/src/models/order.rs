//! Order models - 订单及其明细
//!
//! [`Order`] 是广播和查询接口使用的完整快照 (hydrated)：
//! 明细中的 name/price 在每次读取时按当前菜单解析，不在下单时冻结。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 订单状态
///
/// 展示用流水线：`received → queued → preparing → ready → completed`。
/// 枚举声明顺序即流水线顺序 (derive Ord)，但状态机本身不强制方向，
/// 是否允许回退由服务端的 TransitionPolicy 决定。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// 已接收 (创建时的初始状态)
    #[default]
    Received,
    /// 已排队
    Queued,
    /// 制作中
    Preparing,
    /// 可取餐
    Ready,
    /// 已完成
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Received => "received",
            OrderStatus::Queued => "queued",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 未知状态字符串错误
#[derive(Debug, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for OrderStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "received" => Ok(OrderStatus::Received),
            "queued" => Ok(OrderStatus::Queued),
            "preparing" => Ok(OrderStatus::Preparing),
            "ready" => Ok(OrderStatus::Ready),
            "completed" => Ok(OrderStatus::Completed),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// 订单明细 - 属于且仅属于一个订单
///
/// `name` / `price` 不落库，hydrate 时按 `menu_item_id` 实时解析。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub menu_item_id: i64,
    pub quantity: i64,
    pub notes: Option<String>,
    /// 菜单名称 (读取时解析)
    pub name: String,
    /// 当前菜单价格 (读取时解析，不冻结)
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// 订单快照 (hydrated)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// 创建时单调分配，之后不变
    pub id: i64,
    /// 来源桌码 (上游已校验，核心视为不透明字符串)
    pub table_code: String,
    pub status: OrderStatus,
    /// 展示用排队号，仅员工可设置，不保证唯一
    pub queue_number: Option<i64>,
    /// 预计等待分钟数，仅员工可设置
    pub wait_time: Option<i64>,
    /// 自由文本通知，整体覆盖写入，不保留历史
    pub notification: Option<String>,
    /// Unix millis，创建时写入一次
    pub created_at: i64,
    /// Unix millis，每次变更刷新
    pub updated_at: i64,
    /// 明细集合，创建后不可增删
    pub items: Vec<OrderItem>,
}

/// 创建订单明细 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    pub menu_item_id: i64,
    pub quantity: i64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// 创建订单 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub table_code: String,
    pub items: Vec<OrderItemCreate>,
}

/// 区分 "字段缺席" 与 "显式 null"：
/// 缺席 → `None` (保持原值)，null → `Some(None)` (清空)，值 → `Some(Some(v))`
fn clear_on_null<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// 稀疏更新 DTO - 缺席字段保持原值
///
/// 三个可空字段用双层 Option：外层表示字段是否出现在 PATCH 里，
/// 内层承载新值。显式 `null` 会把列清空 (Some(None))。
/// `status` 列非空，null 视同缺席。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderPatch {
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default, deserialize_with = "clear_on_null")]
    pub queue_number: Option<Option<i64>>,
    #[serde(default, deserialize_with = "clear_on_null")]
    pub wait_time: Option<Option<i64>>,
    #[serde(default, deserialize_with = "clear_on_null")]
    pub notification: Option<Option<String>>,
}

impl OrderPatch {
    /// 是否没有任何字段 (空 PATCH 仍会刷新 updated_at 并广播)
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.queue_number.is_none()
            && self.wait_time.is_none()
            && self.notification.is_none()
    }
}

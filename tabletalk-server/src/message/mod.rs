//! 消息模块 - 订单广播总线
//!
//! # 模块结构
//!
//! - [`OrderBus`] - 广播通道 + 订阅者注册表
//! - [`SubscriberId`] - 订阅者句柄

pub mod bus;

pub use bus::{OrderBus, SubscriberId};

//! TableTalk Shared - 服务器与客户端共享的数据类型
//!
//! # 内容
//!
//! - [`models`] - 菜单、订单、访问码等数据模型
//! - [`message`] - 推送通道消息封装 ([`BusMessage`])
//! - [`util`] - 时间工具

pub mod message;
pub mod models;
pub mod util;

// Re-export 公共类型
pub use message::BusMessage;
pub use models::{MenuItem, Order, OrderCreate, OrderItem, OrderPatch, OrderStatus};

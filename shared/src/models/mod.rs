//! 数据模型定义
//!
//! 这些类型在 tabletalk-server 和前端客户端之间共享：
//!
//! - [`MenuItem`] - 菜单条目 (种子数据，核心只读)
//! - [`Order`] / [`OrderItem`] - 订单及其明细 (hydrated 快照)
//! - [`OrderStatus`] - 订单状态枚举
//! - [`OrderCreate`] / [`OrderPatch`] - 创建/更新 DTO
//! - [`TableCode`] / [`StaffCode`] - 静态访问码

pub mod auth;
pub mod menu;
pub mod order;

pub use auth::{StaffCode, TableCode};
pub use menu::MenuItem;
pub use order::{Order, OrderCreate, OrderItem, OrderItemCreate, OrderPatch, OrderStatus};

//! 订单模块 - 生命周期引擎、状态策略、快照解析与查询
//!
//! # 模块结构
//!
//! - [`OrderEngine`] - 生命周期引擎 (创建/更新 + 广播)
//! - [`OrderQueries`] - 查询门面 (列表/单查，连接和补齐时使用)
//! - [`TransitionPolicy`] - 状态转移策略对象
//! - [`MenuReader`] - hydrate 时的菜单只读能力

pub mod engine;
pub mod hydrate;
pub mod query;
pub mod status;

pub use engine::OrderEngine;
pub use hydrate::{MenuReader, SqlMenuReader};
pub use query::OrderQueries;
pub use status::{ForwardOnly, Permissive, TransitionPolicy};

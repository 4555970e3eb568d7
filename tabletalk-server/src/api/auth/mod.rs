//! Auth API 模块
//!
//! 静态访问码校验：桌码给顾客，员工码给后台。
//! 这里只做门槛校验，之后的请求把桌码当作不透明字符串信任。

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/auth/validate", post(handler::validate_table_code))
        .route("/api/auth/staff", post(handler::validate_staff_code))
}

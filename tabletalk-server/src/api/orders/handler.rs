//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use shared::models::{Order, OrderCreate, OrderPatch};

use crate::core::ServerState;
use crate::utils::AppResult;

/// List all orders, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let orders = state.queries.list_orders().await?;
    Ok(Json(orders))
}

/// Get order by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Order>> {
    let order = state.queries.get_order(id).await?;
    Ok(Json(order))
}

/// Create an order and broadcast `new_order`
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let order = state.engine.create(payload).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Sparse update and broadcast `order_updated`
///
/// 空请求体也是合法的 PATCH：仍会刷新 updated_at 并广播。
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(patch): Json<OrderPatch>,
) -> AppResult<Json<Order>> {
    let order = state.engine.update(id, patch).await?;
    Ok(Json(order))
}

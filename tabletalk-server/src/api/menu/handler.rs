//! Menu API Handlers

use std::collections::BTreeMap;

use axum::{Json, extract::State};

use shared::models::MenuItem;

use crate::core::ServerState;
use crate::db::repository;
use crate::utils::{AppError, AppResult};

/// Available menu items grouped by category
///
/// 分组键按字母序返回 (BTreeMap)；前端按分类名寻址，不依赖键序。
pub async fn grouped(
    State(state): State<ServerState>,
) -> AppResult<Json<BTreeMap<String, Vec<MenuItem>>>> {
    let items = repository::menu::find_available(state.pool())
        .await
        .map_err(AppError::from)?;

    let mut grouped: BTreeMap<String, Vec<MenuItem>> = BTreeMap::new();
    for item in items {
        grouped.entry(item.category.clone()).or_default().push(item);
    }
    Ok(Json(grouped))
}

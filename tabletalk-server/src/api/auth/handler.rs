//! Auth API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct CodeRequest {
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TableCodeResponse {
    pub valid: bool,
    pub table_number: Option<String>,
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct StaffCodeResponse {
    pub valid: bool,
    pub name: Option<String>,
    pub code: String,
}

/// Validate a customer table code
///
/// 码不区分大小写 (入库为大写，这里统一转大写匹配)。
pub async fn validate_table_code(
    State(state): State<ServerState>,
    Json(req): Json<CodeRequest>,
) -> AppResult<Json<TableCodeResponse>> {
    let code = req
        .code
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| AppError::validation("Code required"))?
        .to_uppercase();

    let table = repository::access_code::find_table_code(state.pool(), &code)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::unauthorized("Invalid access code"))?;

    Ok(Json(TableCodeResponse {
        valid: true,
        table_number: table.table_number,
        code: table.code,
    }))
}

/// Validate a staff code
pub async fn validate_staff_code(
    State(state): State<ServerState>,
    Json(req): Json<CodeRequest>,
) -> AppResult<Json<StaffCodeResponse>> {
    let code = req
        .code
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| AppError::validation("Code required"))?
        .to_uppercase();

    let staff = repository::access_code::find_staff_code(state.pool(), &code)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::unauthorized("Invalid staff code"))?;

    Ok(Json(StaffCodeResponse {
        valid: true,
        name: staff.name,
        code: staff.code,
    }))
}

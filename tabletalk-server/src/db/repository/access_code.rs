//! Access Code Repository

use shared::models::{StaffCode, TableCode};
use sqlx::SqlitePool;

use super::RepoResult;

#[derive(Debug, sqlx::FromRow)]
struct TableCodeRow {
    id: i64,
    code: String,
    table_number: Option<String>,
    active: bool,
}

#[derive(Debug, sqlx::FromRow)]
struct StaffCodeRow {
    id: i64,
    code: String,
    name: Option<String>,
    active: bool,
}

/// Look up an active table code (codes are matched case-sensitively after uppercasing at the API layer)
pub async fn find_table_code(pool: &SqlitePool, code: &str) -> RepoResult<Option<TableCode>> {
    let row = sqlx::query_as::<_, TableCodeRow>(
        "SELECT id, code, table_number, active FROM table_codes WHERE code = ? AND active = 1",
    )
    .bind(code)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(|r| TableCode {
        id: r.id,
        code: r.code,
        table_number: r.table_number,
        active: r.active,
    }))
}

/// Look up an active staff code
pub async fn find_staff_code(pool: &SqlitePool, code: &str) -> RepoResult<Option<StaffCode>> {
    let row = sqlx::query_as::<_, StaffCodeRow>(
        "SELECT id, code, name, active FROM staff_codes WHERE code = ? AND active = 1",
    )
    .bind(code)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(|r| StaffCode {
        id: r.id,
        code: r.code,
        name: r.name,
        active: r.active,
    }))
}

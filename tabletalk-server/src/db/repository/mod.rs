//! Repository Module
//!
//! Free async functions over `&SqlitePool`, one file per table.
//! Repository 层只接收/返回 `i64` Unix millis 和分 (cents)，
//! 不做任何广播或价格解析 — 那是 orders 层的职责。

pub mod access_code;
pub mod menu;
pub mod order;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

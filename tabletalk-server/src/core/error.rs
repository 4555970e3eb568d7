//! 服务器级错误定义

use crate::utils::AppError;

/// 服务器启动/运行错误
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    App(#[from] AppError),
}

/// Server-level Result type
pub type Result<T> = std::result::Result<T, ServerError>;

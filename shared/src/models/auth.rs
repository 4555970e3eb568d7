//! Access code models
//!
//! 静态共享密钥：桌码给顾客会话，员工码给后台。
//! 不是按用户的凭证体系，只做开台/开后台的门槛校验。

use serde::{Deserialize, Serialize};

/// 桌台访问码
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCode {
    pub id: i64,
    pub code: String,
    pub table_number: Option<String>,
    pub active: bool,
}

/// 员工访问码
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffCode {
    pub id: i64,
    pub code: String,
    pub name: Option<String>,
    pub active: bool,
}

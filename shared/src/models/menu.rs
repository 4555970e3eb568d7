//! Menu item model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 菜单条目 - 种子化后不可变，核心只读
///
/// 价格在数据库中以分 (cents) 存储，线上表示为两位小数的 Decimal。
/// 订单不会快照价格：hydrate 时总是按当前菜单价格解析。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// 当前价格 (两位小数)
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: String,
    /// 是否可售 (下架条目不出现在菜单接口中)
    pub available: bool,
}

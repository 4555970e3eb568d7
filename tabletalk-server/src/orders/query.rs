//! 查询门面
//!
//! 纯读接口：连接/重连时的全量补齐走这里 (广播通道没有回放)。
//! 无缓存层，每次调用都重新解析明细和菜单价格。

use std::sync::Arc;

use sqlx::SqlitePool;

use shared::models::Order;

use crate::db::repository;
use crate::orders::hydrate::{MenuReader, hydrate_order};
use crate::utils::{AppError, AppResult};

/// 订单查询门面
pub struct OrderQueries {
    pool: SqlitePool,
    menu: Arc<dyn MenuReader>,
}

impl OrderQueries {
    pub fn new(pool: SqlitePool, menu: Arc<dyn MenuReader>) -> Self {
        Self { pool, menu }
    }

    /// 全部订单，按创建时间从新到旧
    pub async fn list_orders(&self) -> AppResult<Vec<Order>> {
        let rows = repository::order::find_all(&self.pool)
            .await
            .map_err(AppError::from)?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in rows {
            orders.push(
                hydrate_order(&self.pool, self.menu.as_ref(), row)
                    .await
                    .map_err(AppError::from)?,
            );
        }
        Ok(orders)
    }

    /// 单个订单，不存在返回 NotFound
    pub async fn get_order(&self, id: i64) -> AppResult<Order> {
        let row = repository::order::find_by_id(&self.pool, id)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;
        hydrate_order(&self.pool, self.menu.as_ref(), row)
            .await
            .map_err(AppError::from)
    }
}

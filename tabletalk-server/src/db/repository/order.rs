//! Order Repository
//!
//! 订单行与明细行的持久化。并发正确性完全依赖存储层：
//! 创建是单事务，更新是单条原子 UPDATE，SET 列表只含 PATCH 里
//! 出现的字段，并发的不相交 PATCH 不会互相覆盖。

use shared::models::{OrderItemCreate, OrderPatch};
use sqlx::SqlitePool;

use super::RepoResult;

/// Raw order row — status kept as TEXT, parsed at hydrate time
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrderRow {
    pub id: i64,
    pub table_code: String,
    pub status: String,
    pub queue_number: Option<i64>,
    pub wait_time: Option<i64>,
    pub notification: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Raw order item row — name/price live in menu_items, not here
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrderItemRow {
    pub id: i64,
    pub order_id: i64,
    pub menu_item_id: i64,
    pub quantity: i64,
    pub notes: Option<String>,
}

const ORDER_COLUMNS: &str =
    "id, table_code, status, queue_number, wait_time, notification, created_at, updated_at";

/// Insert an order and all of its line items in one transaction
///
/// 要么整单落库，要么什么都不留：中途失败 (如 menu_item_id 外键违规)
/// 回滚整个事务，不会出现半创建的订单。
pub async fn insert(
    pool: &SqlitePool,
    table_code: &str,
    items: &[OrderItemCreate],
    now: i64,
) -> RepoResult<i64> {
    let mut tx = pool.begin().await?;

    let order_id: i64 = sqlx::query_scalar(
        "INSERT INTO orders (table_code, status, created_at, updated_at) VALUES (?1, 'received', ?2, ?2) RETURNING id",
    )
    .bind(table_code)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    for item in items {
        sqlx::query(
            "INSERT INTO order_items (order_id, menu_item_id, quantity, notes) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(order_id)
        .bind(item.menu_item_id)
        .bind(item.quantity)
        .bind(&item.notes)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(order_id)
}

/// Fetch one order row by id
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<OrderRow>> {
    let row = sqlx::query_as::<_, OrderRow>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Fetch all order rows, newest first (id as a stable tiebreak within one millisecond)
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<OrderRow>> {
    let rows = sqlx::query_as::<_, OrderRow>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC, id DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Fetch the line items of one order
pub async fn find_items(pool: &SqlitePool, order_id: i64) -> RepoResult<Vec<OrderItemRow>> {
    let rows = sqlx::query_as::<_, OrderItemRow>(
        "SELECT id, order_id, menu_item_id, quantity, notes FROM order_items WHERE order_id = ? ORDER BY id",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Apply a sparse patch as one atomic UPDATE
///
/// 只有出现在 PATCH 里的字段进入 SET 列表；显式 null 把列清空；
/// `updated_at` 无条件刷新，空 PATCH 也会刷新。
///
/// `expected_status` 为 Some 时追加状态守卫 (check-and-set)：
/// 当前状态与守卫不符则不落库。返回是否命中了行，守卫未命中
/// 与订单不存在都表现为 false，由调用方重读区分。
pub async fn apply_patch(
    pool: &SqlitePool,
    id: i64,
    patch: &OrderPatch,
    now: i64,
    expected_status: Option<&str>,
) -> RepoResult<bool> {
    let mut qb = sqlx::QueryBuilder::<sqlx::Sqlite>::new("UPDATE orders SET updated_at = ");
    qb.push_bind(now);
    if let Some(status) = patch.status {
        qb.push(", status = ").push_bind(status.as_str());
    }
    if let Some(queue_number) = &patch.queue_number {
        qb.push(", queue_number = ").push_bind(*queue_number);
    }
    if let Some(wait_time) = &patch.wait_time {
        qb.push(", wait_time = ").push_bind(*wait_time);
    }
    if let Some(notification) = &patch.notification {
        qb.push(", notification = ").push_bind(notification.clone());
    }
    qb.push(" WHERE id = ").push_bind(id);
    if let Some(expected) = expected_status {
        qb.push(" AND status = ").push_bind(expected);
    }

    let result = qb.build().execute(pool).await?;
    Ok(result.rows_affected() > 0)
}

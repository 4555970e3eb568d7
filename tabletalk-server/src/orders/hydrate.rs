//! 订单快照解析 (hydration)
//!
//! 把存储的订单行解析成完整快照：每个明细的 name/price 在读取时
//! 通过注入的 [`MenuReader`] 按当前菜单解析，从不冻结到订单行上。
//! 这是一个刻意保留的不变量：菜单改价后，历史订单按新价重现。

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::SqlitePool;

use shared::models::{Order, OrderItem, OrderStatus};

use crate::db::repository::order::{OrderItemRow, OrderRow};
use crate::db::repository::{self, RepoError, RepoResult};

/// hydrate 时解析出的菜单条目
#[derive(Debug, Clone)]
pub struct ResolvedMenuItem {
    pub name: String,
    pub price: Decimal,
}

/// 菜单只读能力 - 引擎和查询门面在 hydrate 时调用
///
/// 做成注入接口而非直接 JOIN，保证价格解析点只有一个，
/// 测试可以替换成内存实现。
#[async_trait]
pub trait MenuReader: Send + Sync {
    /// 按 id 解析菜单名称和当前价格；不存在返回 None
    async fn resolve(&self, menu_item_id: i64) -> RepoResult<Option<ResolvedMenuItem>>;
}

/// SQLite 实现 - 每次调用都查库，无缓存
#[derive(Clone, Debug)]
pub struct SqlMenuReader {
    pool: SqlitePool,
}

impl SqlMenuReader {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuReader for SqlMenuReader {
    async fn resolve(&self, menu_item_id: i64) -> RepoResult<Option<ResolvedMenuItem>> {
        let row = repository::menu::find_by_id(&self.pool, menu_item_id).await?;
        Ok(row.map(|r| ResolvedMenuItem {
            name: r.name,
            price: Decimal::new(r.price_cents, 2),
        }))
    }
}

/// 把订单行 + 明细行解析成完整快照
///
/// 菜单条目已消失的明细被静默省略 (原始实现 INNER JOIN 的语义)；
/// 外键约束下这在正常运行中不会发生。
pub async fn hydrate_order(
    pool: &SqlitePool,
    menu: &dyn MenuReader,
    row: OrderRow,
) -> RepoResult<Order> {
    let item_rows = repository::order::find_items(pool, row.id).await?;

    let mut items = Vec::with_capacity(item_rows.len());
    for item in item_rows {
        match menu.resolve(item.menu_item_id).await? {
            Some(resolved) => items.push(to_order_item(item, resolved)),
            None => {
                tracing::warn!(
                    order_id = row.id,
                    menu_item_id = item.menu_item_id,
                    "Menu item missing at hydrate time, omitting line item"
                );
            }
        }
    }

    let status: OrderStatus = row
        .status
        .parse()
        .map_err(|e| RepoError::Database(format!("Corrupt status in store: {e}")))?;

    Ok(Order {
        id: row.id,
        table_code: row.table_code,
        status,
        queue_number: row.queue_number,
        wait_time: row.wait_time,
        notification: row.notification,
        created_at: row.created_at,
        updated_at: row.updated_at,
        items,
    })
}

fn to_order_item(row: OrderItemRow, resolved: ResolvedMenuItem) -> OrderItem {
    OrderItem {
        id: row.id,
        order_id: row.order_id,
        menu_item_id: row.menu_item_id,
        quantity: row.quantity,
        notes: row.notes,
        name: resolved.name,
        price: resolved.price,
    }
}

//! Menu Repository

use rust_decimal::Decimal;
use shared::models::MenuItem;
use sqlx::SqlitePool;

use super::RepoResult;

/// Raw menu row — price stored as integer cents
#[derive(Debug, sqlx::FromRow)]
pub struct MenuItemRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub category: String,
    pub available: bool,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            id: row.id,
            name: row.name,
            description: row.description,
            price: Decimal::new(row.price_cents, 2),
            category: row.category,
            available: row.available,
        }
    }
}

/// List all available menu items
pub async fn find_available(pool: &SqlitePool) -> RepoResult<Vec<MenuItem>> {
    let rows = sqlx::query_as::<_, MenuItemRow>(
        "SELECT id, name, description, price_cents, category, available FROM menu_items WHERE available = 1 ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(MenuItem::from).collect())
}

/// Fetch one menu row by id (available or not — hydration resolves delisted items too)
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MenuItemRow>> {
    let row = sqlx::query_as::<_, MenuItemRow>(
        "SELECT id, name, description, price_cents, category, available FROM menu_items WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

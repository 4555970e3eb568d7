//! Demo data seeding
//!
//! 菜单、桌码、员工码的种子数据。每张表只在为空时写入，
//! 重启不会重复插入。价格以分 (cents) 存储。

use sqlx::SqlitePool;

use super::repository::RepoResult;

/// Seed menu items, table codes and staff codes if the tables are empty
pub async fn seed_demo_data(pool: &SqlitePool) -> RepoResult<()> {
    seed_menu(pool).await?;
    seed_table_codes(pool).await?;
    seed_staff_codes(pool).await?;
    Ok(())
}

async fn seed_menu(pool: &SqlitePool) -> RepoResult<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menu_items")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let items: &[(&str, &str, i64, &str)] = &[
        (
            "Hot Burger",
            "Grilled burger with chicken, lettuce, tomato and special sauce",
            1050,
            "Burgers",
        ),
        (
            "Crunch Burger",
            "Crispy fried patty with special crunchy coating and cheese",
            850,
            "Burgers",
        ),
        (
            "Beef Burger",
            "Premium beef patty with sesame bun and fresh vegetables",
            950,
            "Burgers",
        ),
        (
            "Deluxe Burger",
            "Premium burger with cheese, bacon, lettuce and special sauce",
            1200,
            "Burgers",
        ),
        ("Classic Shake", "Creamy vanilla milkshake blend", 450, "Shakes & Drinks"),
        ("Berry Shake", "Mixed berry and cream shake", 450, "Shakes & Drinks"),
        ("Dash Coffee", "Espresso with steamed milk", 250, "Shakes & Drinks"),
        ("Coconut Tea", "Refreshing coconut iced tea", 350, "Shakes & Drinks"),
        ("Cake Bites", "Mini cake pastries", 350, "Sides"),
        ("Cheesy Cup", "Melted cheese dip cup", 350, "Sides"),
        ("Chicken Strips", "Crispy chicken tenders", 250, "Sides"),
        ("Cheesy Soup", "Creamy cheese soup", 350, "Sides"),
        ("Crispy Salads", "Fresh garden salad", 350, "Sides"),
        ("Egg Shakes", "Protein-rich egg shake", 500, "Sides"),
        ("Fruit & Ice", "Fresh fruits with ice cream", 795, "Desserts"),
        ("Mango Sundae", "Mango ice cream sundae", 695, "Desserts"),
    ];

    for (name, description, price_cents, category) in items {
        sqlx::query(
            "INSERT INTO menu_items (name, description, price_cents, category) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(name)
        .bind(description)
        .bind(price_cents)
        .bind(category)
        .execute(pool)
        .await?;
    }

    tracing::info!(count = items.len(), "Menu seeded");
    Ok(())
}

async fn seed_table_codes(pool: &SqlitePool) -> RepoResult<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM table_codes")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let codes = [
        ("TABLE01", "Table 1"),
        ("TABLE02", "Table 2"),
        ("TABLE03", "Table 3"),
        ("TABLE04", "Table 4"),
        ("TABLE05", "Table 5"),
        ("DEMO123", "Demo Table"),
    ];
    for (code, table) in codes {
        sqlx::query("INSERT INTO table_codes (code, table_number) VALUES (?1, ?2)")
            .bind(code)
            .bind(table)
            .execute(pool)
            .await?;
    }

    tracing::info!(count = codes.len(), "Table codes seeded");
    Ok(())
}

async fn seed_staff_codes(pool: &SqlitePool) -> RepoResult<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM staff_codes")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let codes = [
        ("STAFF001", "Staff 1"),
        ("STAFF002", "Staff 2"),
        ("ADMIN123", "Admin"),
    ];
    for (code, name) in codes {
        sqlx::query("INSERT INTO staff_codes (code, name) VALUES (?1, ?2)")
            .bind(code)
            .bind(name)
            .execute(pool)
            .await?;
    }

    tracing::info!(count = codes.len(), "Staff codes seeded");
    Ok(())
}

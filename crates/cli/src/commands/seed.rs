//! Seed a starter snapshot with sample catalog data.
//!
//! Writes a small menu (categories plus a handful of items) so the
//! storefront services have something to serve on a fresh install. The
//! user directory starts empty; users are created on first sign-in.

use chrono::Utc;
use tracing::info;

use tiffin_core::{CategoryId, MenuItemId, Price};
use tiffin_store::{CategoryRecord, MenuItemRecord, StoreSnapshot};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Write the starter snapshot to the configured path.
///
/// Refuses to overwrite an existing file unless `force` is set.
///
/// # Errors
///
/// Returns an error if the target exists without `force` or on I/O
/// failure.
pub async fn starter_snapshot(force: bool) -> CliResult<()> {
    let path = super::store_path();

    if !force && tokio::fs::try_exists(&path).await.unwrap_or(false) {
        return Err(format!(
            "snapshot already exists at {} (use --force to overwrite)",
            path.display()
        )
        .into());
    }

    let mut snapshot = StoreSnapshot::default();

    let starters = category("Starters", 1);
    let mains = category("Mains", 2);
    let drinks = category("Drinks", 3);

    snapshot.menu_items = vec![
        item(starters.id, "Samosa", "Crisp pastry with spiced potato", "3.50", Some(10))?,
        item(starters.id, "Paneer Tikka", "Char-grilled cottage cheese", "6.00", Some(15))?,
        item(mains.id, "Vegetable Biryani", "Fragrant rice with seasonal vegetables", "9.50", Some(25))?,
        item(mains.id, "Butter Chicken", "Tomato and cream curry", "11.00", Some(20))?,
        item(mains.id, "Dal Tadka", "Yellow lentils, tempered", "7.50", Some(15))?,
        item(drinks.id, "Mango Lassi", "Yogurt and mango", "3.00", None)?,
        item(drinks.id, "Masala Chai", "Spiced tea", "2.50", Some(5))?,
    ];
    snapshot.categories = vec![starters, mains, drinks];

    snapshot.save(&path).await?;
    info!(
        path = %path.display(),
        categories = snapshot.categories.len(),
        menu_items = snapshot.menu_items.len(),
        "starter snapshot written"
    );
    Ok(())
}

fn category(name: &str, display_order: i32) -> CategoryRecord {
    CategoryRecord {
        id: CategoryId::generate(),
        name: name.to_owned(),
        description: None,
        image: None,
        display_order,
        is_active: true,
    }
}

fn item(
    category_id: CategoryId,
    name: &str,
    description: &str,
    price: &str,
    preparation_minutes: Option<u32>,
) -> CliResult<MenuItemRecord> {
    Ok(MenuItemRecord {
        id: MenuItemId::generate(),
        name: name.to_owned(),
        description: description.to_owned(),
        price: Price::new(price.parse()?)?,
        category_id,
        image: None,
        is_available: true,
        is_featured: false,
        preparation_minutes,
        created_at: Utc::now(),
    })
}

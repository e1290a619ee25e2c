//! Integration tests for Tiffin.
//!
//! Tests run the storefront and admin services against an in-memory
//! store, so they need no external processes.
//!
//! ```bash
//! cargo test -p tiffin-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `checkout` - Cart to placed order
//! - `order_lifecycle` - Status administration and cancellation
//! - `admin_console` - Catalog administration, dashboard, grants
//!
//! [`TestContext`] seeds an admin, a customer, and a small menu.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used)]

use chrono::Utc;

use tiffin_core::{CategoryId, MenuItemId, Price, UserId, VerifiedIdentity};
use tiffin_store::{CategoryRecord, MemoryStore, MenuItemRecord, Store, UserRecord};

/// A seeded store plus the identities the tests act as.
pub struct TestContext {
    /// The backing store.
    pub store: MemoryStore,
    /// An identity whose directory record has the admin flag.
    pub admin: VerifiedIdentity,
    /// An identity with a plain customer record.
    pub customer: VerifiedIdentity,
    /// The seeded customer's record ID.
    pub customer_id: UserId,
    /// The seeded category.
    pub category_id: CategoryId,
    /// Samosa, 3.50, available.
    pub samosa: MenuItemId,
    /// Chai, 2.50, available.
    pub chai: MenuItemId,
    /// Seasonal special, 7.00, not available.
    pub off_menu: MenuItemId,
}

impl TestContext {
    /// Seed a store with an admin, a customer, and a three-item menu.
    ///
    /// # Panics
    ///
    /// Panics if seeding fails; the in-memory store does not fail.
    pub async fn new() -> Self {
        let store = MemoryStore::new();

        put_user(&store, "admin-1", "Boss", true).await;
        let customer_id = put_user(&store, "customer-1", "Asha", false).await;

        let category_id = CategoryId::generate();
        store
            .put_category(CategoryRecord {
                id: category_id,
                name: "Mains".to_owned(),
                description: None,
                image: None,
                display_order: 1,
                is_active: true,
            })
            .await
            .unwrap();

        let samosa = put_item(&store, category_id, "Samosa", "3.50", true).await;
        let chai = put_item(&store, category_id, "Chai", "2.50", true).await;
        let off_menu = put_item(&store, category_id, "Seasonal Special", "7.00", false).await;

        Self {
            store,
            admin: VerifiedIdentity::new("admin-1").with_name("Boss"),
            customer: VerifiedIdentity::new("customer-1").with_name("Asha"),
            customer_id,
            category_id,
            samosa,
            chai,
            off_menu,
        }
    }
}

async fn put_user(store: &MemoryStore, subject: &str, name: &str, is_admin: bool) -> UserId {
    let user = UserRecord {
        id: UserId::generate(),
        subject: subject.to_owned(),
        email: None,
        name: name.to_owned(),
        phone: None,
        address: None,
        is_admin,
        created_at: Utc::now(),
    };
    let id = user.id;
    store.put_user(user).await.unwrap();
    id
}

async fn put_item(
    store: &MemoryStore,
    category_id: CategoryId,
    name: &str,
    price: &str,
    is_available: bool,
) -> MenuItemId {
    let item = MenuItemRecord {
        id: MenuItemId::generate(),
        name: name.to_owned(),
        description: String::new(),
        price: Price::new(price.parse().unwrap()).unwrap(),
        category_id,
        image: None,
        is_available,
        is_featured: false,
        preparation_minutes: None,
        created_at: Utc::now(),
    };
    let id = item.id;
    store.put_menu_item(item).await.unwrap();
    id
}

//! The five record kinds held by the managed store.
//!
//! These are the persisted shapes, not API views. Order items carry the
//! unit price and item name captured at order time, so later catalog edits
//! never retroactively alter historical orders.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tiffin_core::{
    CategoryId, Email, MenuItemId, OrderId, OrderItemId, OrderStatus, Price, UserId,
};

/// A customer (or administrator) known to the user directory.
///
/// Created on first sign-in; never deleted in observed flows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Store-assigned ID.
    pub id: UserId,
    /// The identity provider's opaque subject (unique).
    pub subject: String,
    /// Email claim from the provider, when supplied.
    pub email: Option<Email>,
    /// Display name.
    pub name: String,
    /// Contact phone, filled in at checkout or via profile update.
    pub phone: Option<String>,
    /// Delivery address, filled in at checkout or via profile update.
    pub address: Option<String>,
    /// Whether this user may administer the store.
    pub is_admin: bool,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// A named grouping of menu items with a display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Store-assigned ID.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// Optional description shown on the menu page.
    pub description: Option<String>,
    /// Optional image URL.
    pub image: Option<String>,
    /// Position in menu listings (ascending).
    pub display_order: i32,
    /// Inactive categories are hidden from the storefront.
    pub is_active: bool,
}

/// A purchasable dish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemRecord {
    /// Store-assigned ID.
    pub id: MenuItemId,
    /// Dish name.
    pub name: String,
    /// Dish description.
    pub description: String,
    /// Current price; snapshotted onto order items at checkout.
    pub price: Price,
    /// Owning category.
    pub category_id: CategoryId,
    /// Optional image URL.
    pub image: Option<String>,
    /// Unavailable items cannot be ordered.
    pub is_available: bool,
    /// Featured items are highlighted on the home page.
    pub is_featured: bool,
    /// Optional preparation time in minutes.
    pub preparation_minutes: Option<u32>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// A checked-out cart, snapshotted at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Store-assigned ID.
    pub id: OrderId,
    /// Owning customer.
    pub user_id: UserId,
    /// Human-readable token derived from the creation instant.
    pub order_number: String,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Sum of `quantity × unit price` over the order's items at creation.
    pub total: Decimal,
    /// Delivery address supplied at checkout.
    pub delivery_address: String,
    /// Contact phone supplied at checkout.
    pub phone: String,
    /// Optional order-level note.
    pub notes: Option<String>,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every status change.
    pub updated_at: DateTime<Utc>,
}

/// One line of an order, with price and name snapshotted at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemRecord {
    /// Store-assigned ID.
    pub id: OrderItemId,
    /// Owning order.
    pub order_id: OrderId,
    /// The menu item this line was created from.
    pub menu_item_id: MenuItemId,
    /// Units ordered (positive).
    pub quantity: u32,
    /// Unit price captured at order time.
    pub unit_price: Price,
    /// Item name captured at order time.
    pub item_name: String,
    /// Optional per-line note ("no onions").
    pub note: Option<String>,
}

impl OrderItemRecord {
    /// The line total at the snapshotted price.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.line_total(self.quantity)
    }
}

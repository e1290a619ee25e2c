//! The managed store port.
//!
//! The production system runs against an externally managed reactive
//! document database. The domain only relies on the primitives below:
//! keyed lookup, the indexed scans the original schema declares, upserts,
//! and one compound insert so order creation is all-or-nothing. Mutations
//! are expected to be atomic per call; that property is the backend's to
//! provide.

use async_trait::async_trait;

use tiffin_core::{CategoryId, MenuItemId, OrderId, OrderStatus, UserId};

use crate::error::StoreResult;
use crate::records::{CategoryRecord, MenuItemRecord, OrderItemRecord, OrderRecord, UserRecord};

/// Lookup and scan primitives over the five record kinds.
///
/// `put_*` methods upsert by record ID. Scans return records in no
/// particular order; callers sort where presentation requires it.
#[async_trait]
pub trait Store: Send + Sync {
    // =========================================================================
    // Users
    // =========================================================================

    /// Keyed lookup of a user.
    async fn user(&self, id: UserId) -> StoreResult<Option<UserRecord>>;

    /// Indexed lookup by the identity provider's subject.
    async fn user_by_subject(&self, subject: &str) -> StoreResult<Option<UserRecord>>;

    /// Indexed lookup by email address.
    async fn user_by_email(&self, email: &str) -> StoreResult<Option<UserRecord>>;

    /// Scan all users.
    async fn scan_users(&self) -> StoreResult<Vec<UserRecord>>;

    /// Insert or replace a user.
    async fn put_user(&self, user: UserRecord) -> StoreResult<()>;

    // =========================================================================
    // Categories
    // =========================================================================

    /// Keyed lookup of a category.
    async fn category(&self, id: CategoryId) -> StoreResult<Option<CategoryRecord>>;

    /// Scan all categories.
    async fn scan_categories(&self) -> StoreResult<Vec<CategoryRecord>>;

    /// Insert or replace a category.
    async fn put_category(&self, category: CategoryRecord) -> StoreResult<()>;

    /// Delete a category. Referential checks belong to the caller.
    async fn delete_category(&self, id: CategoryId) -> StoreResult<()>;

    // =========================================================================
    // Menu items
    // =========================================================================

    /// Keyed lookup of a menu item.
    async fn menu_item(&self, id: MenuItemId) -> StoreResult<Option<MenuItemRecord>>;

    /// Scan all menu items.
    async fn scan_menu_items(&self) -> StoreResult<Vec<MenuItemRecord>>;

    /// Indexed scan of a category's menu items.
    async fn menu_items_by_category(&self, id: CategoryId) -> StoreResult<Vec<MenuItemRecord>>;

    /// Insert or replace a menu item.
    async fn put_menu_item(&self, item: MenuItemRecord) -> StoreResult<()>;

    /// Delete a menu item.
    async fn delete_menu_item(&self, id: MenuItemId) -> StoreResult<()>;

    // =========================================================================
    // Orders
    // =========================================================================

    /// Keyed lookup of an order.
    async fn order(&self, id: OrderId) -> StoreResult<Option<OrderRecord>>;

    /// Scan all orders.
    async fn scan_orders(&self) -> StoreResult<Vec<OrderRecord>>;

    /// Indexed scan of a user's orders.
    async fn orders_by_user(&self, id: UserId) -> StoreResult<Vec<OrderRecord>>;

    /// Indexed scan of orders in a given status.
    async fn orders_by_status(&self, status: OrderStatus) -> StoreResult<Vec<OrderRecord>>;

    /// Insert or replace an order.
    async fn put_order(&self, order: OrderRecord) -> StoreResult<()>;

    /// Atomically insert an order together with its line items.
    ///
    /// Either everything is persisted or nothing is; no partial order is
    /// ever observable.
    async fn insert_order_with_items(
        &self,
        order: OrderRecord,
        items: Vec<OrderItemRecord>,
    ) -> StoreResult<()>;

    // =========================================================================
    // Order items
    // =========================================================================

    /// Indexed scan of an order's line items.
    async fn order_items_by_order(&self, id: OrderId) -> StoreResult<Vec<OrderItemRecord>>;
}

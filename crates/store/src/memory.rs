//! In-memory reference backend.
//!
//! Backs tests, the CLI's snapshot workflow, and local development. A
//! single `RwLock` over all five collections gives every port call the
//! same atomicity the managed backend provides per transaction.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use tiffin_core::{CategoryId, MenuItemId, OrderId, OrderStatus, UserId};

use crate::error::StoreResult;
use crate::port::Store;
use crate::records::{CategoryRecord, MenuItemRecord, OrderItemRecord, OrderRecord, UserRecord};
use crate::snapshot::StoreSnapshot;

#[derive(Debug, Default)]
struct Collections {
    users: HashMap<UserId, UserRecord>,
    categories: HashMap<CategoryId, CategoryRecord>,
    menu_items: HashMap<MenuItemId, MenuItemRecord>,
    orders: HashMap<OrderId, OrderRecord>,
    order_items: HashMap<OrderId, Vec<OrderItemRecord>>,
}

/// An in-memory [`Store`] implementation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        let mut collections = Collections::default();
        for user in snapshot.users {
            collections.users.insert(user.id, user);
        }
        for category in snapshot.categories {
            collections.categories.insert(category.id, category);
        }
        for item in snapshot.menu_items {
            collections.menu_items.insert(item.id, item);
        }
        for order in snapshot.orders {
            collections.orders.insert(order.id, order);
        }
        for item in snapshot.order_items {
            collections
                .order_items
                .entry(item.order_id)
                .or_default()
                .push(item);
        }
        Self {
            inner: RwLock::new(collections),
        }
    }

    /// Capture the current contents as a snapshot.
    pub async fn snapshot(&self) -> StoreSnapshot {
        let inner = self.inner.read().await;

        let mut snapshot = StoreSnapshot {
            users: inner.users.values().cloned().collect(),
            categories: inner.categories.values().cloned().collect(),
            menu_items: inner.menu_items.values().cloned().collect(),
            orders: inner.orders.values().cloned().collect(),
            order_items: inner.order_items.values().flatten().cloned().collect(),
        };

        // Stable file diffs regardless of map iteration order.
        snapshot.users.sort_by_key(|u| u.id);
        snapshot.categories.sort_by_key(|c| c.id);
        snapshot.menu_items.sort_by_key(|m| m.id);
        snapshot.orders.sort_by_key(|o| o.id);
        snapshot.order_items.sort_by_key(|i| i.id);
        snapshot
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn user(&self, id: UserId) -> StoreResult<Option<UserRecord>> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn user_by_subject(&self, subject: &str) -> StoreResult<Option<UserRecord>> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.subject == subject).cloned())
    }

    async fn user_by_email(&self, email: &str) -> StoreResult<Option<UserRecord>> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .values()
            .find(|u| u.email.as_ref().is_some_and(|e| e.as_str() == email))
            .cloned())
    }

    async fn scan_users(&self) -> StoreResult<Vec<UserRecord>> {
        Ok(self.inner.read().await.users.values().cloned().collect())
    }

    async fn put_user(&self, user: UserRecord) -> StoreResult<()> {
        self.inner.write().await.users.insert(user.id, user);
        Ok(())
    }

    async fn category(&self, id: CategoryId) -> StoreResult<Option<CategoryRecord>> {
        Ok(self.inner.read().await.categories.get(&id).cloned())
    }

    async fn scan_categories(&self) -> StoreResult<Vec<CategoryRecord>> {
        Ok(self
            .inner
            .read()
            .await
            .categories
            .values()
            .cloned()
            .collect())
    }

    async fn put_category(&self, category: CategoryRecord) -> StoreResult<()> {
        self.inner
            .write()
            .await
            .categories
            .insert(category.id, category);
        Ok(())
    }

    async fn delete_category(&self, id: CategoryId) -> StoreResult<()> {
        self.inner.write().await.categories.remove(&id);
        Ok(())
    }

    async fn menu_item(&self, id: MenuItemId) -> StoreResult<Option<MenuItemRecord>> {
        Ok(self.inner.read().await.menu_items.get(&id).cloned())
    }

    async fn scan_menu_items(&self) -> StoreResult<Vec<MenuItemRecord>> {
        Ok(self
            .inner
            .read()
            .await
            .menu_items
            .values()
            .cloned()
            .collect())
    }

    async fn menu_items_by_category(&self, id: CategoryId) -> StoreResult<Vec<MenuItemRecord>> {
        let inner = self.inner.read().await;
        Ok(inner
            .menu_items
            .values()
            .filter(|m| m.category_id == id)
            .cloned()
            .collect())
    }

    async fn put_menu_item(&self, item: MenuItemRecord) -> StoreResult<()> {
        self.inner.write().await.menu_items.insert(item.id, item);
        Ok(())
    }

    async fn delete_menu_item(&self, id: MenuItemId) -> StoreResult<()> {
        self.inner.write().await.menu_items.remove(&id);
        Ok(())
    }

    async fn order(&self, id: OrderId) -> StoreResult<Option<OrderRecord>> {
        Ok(self.inner.read().await.orders.get(&id).cloned())
    }

    async fn scan_orders(&self) -> StoreResult<Vec<OrderRecord>> {
        Ok(self.inner.read().await.orders.values().cloned().collect())
    }

    async fn orders_by_user(&self, id: UserId) -> StoreResult<Vec<OrderRecord>> {
        let inner = self.inner.read().await;
        Ok(inner
            .orders
            .values()
            .filter(|o| o.user_id == id)
            .cloned()
            .collect())
    }

    async fn orders_by_status(&self, status: OrderStatus) -> StoreResult<Vec<OrderRecord>> {
        let inner = self.inner.read().await;
        Ok(inner
            .orders
            .values()
            .filter(|o| o.status == status)
            .cloned()
            .collect())
    }

    async fn put_order(&self, order: OrderRecord) -> StoreResult<()> {
        self.inner.write().await.orders.insert(order.id, order);
        Ok(())
    }

    async fn insert_order_with_items(
        &self,
        order: OrderRecord,
        items: Vec<OrderItemRecord>,
    ) -> StoreResult<()> {
        // One write guard covers the order and all of its lines.
        let mut inner = self.inner.write().await;
        inner.order_items.insert(order.id, items);
        inner.orders.insert(order.id, order);
        Ok(())
    }

    async fn order_items_by_order(&self, id: OrderId) -> StoreResult<Vec<OrderItemRecord>> {
        let inner = self.inner.read().await;
        Ok(inner.order_items.get(&id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use tiffin_core::Price;

    use super::*;

    fn sample_user() -> UserRecord {
        UserRecord {
            id: UserId::generate(),
            subject: "subject-1".to_owned(),
            email: None,
            name: "Asha".to_owned(),
            phone: None,
            address: None,
            is_admin: false,
            created_at: Utc::now(),
        }
    }

    fn sample_order(user_id: UserId) -> OrderRecord {
        OrderRecord {
            id: OrderId::generate(),
            user_id,
            order_number: "ORD-TEST".to_owned(),
            status: OrderStatus::Pending,
            total: "13.50".parse().unwrap(),
            delivery_address: "1 Curry Lane".to_owned(),
            phone: "555-0100".to_owned(),
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_user_subject_index() {
        let store = MemoryStore::new();
        let user = sample_user();
        store.put_user(user.clone()).await.unwrap();

        let found = store.user_by_subject("subject-1").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert!(store.user_by_subject("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_is_upsert() {
        let store = MemoryStore::new();
        let mut user = sample_user();
        store.put_user(user.clone()).await.unwrap();

        user.is_admin = true;
        store.put_user(user.clone()).await.unwrap();

        let found = store.user(user.id).await.unwrap().unwrap();
        assert!(found.is_admin);
        assert_eq!(store.scan_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_order_with_items_is_visible_together() {
        let store = MemoryStore::new();
        let user = sample_user();
        store.put_user(user.clone()).await.unwrap();

        let order = sample_order(user.id);
        let item = OrderItemRecord {
            id: tiffin_core::OrderItemId::generate(),
            order_id: order.id,
            menu_item_id: MenuItemId::generate(),
            quantity: 2,
            unit_price: Price::new("5.00".parse().unwrap()).unwrap(),
            item_name: "Samosa".to_owned(),
            note: None,
        };
        store
            .insert_order_with_items(order.clone(), vec![item])
            .await
            .unwrap();

        assert_eq!(store.orders_by_user(user.id).await.unwrap().len(), 1);
        let items = store.order_items_by_order(order.id).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items.first().unwrap().line_total(), "10.00".parse().unwrap());
    }

    #[tokio::test]
    async fn test_snapshot_roundtrip() {
        let store = MemoryStore::new();
        let user = sample_user();
        store.put_user(user.clone()).await.unwrap();
        store
            .insert_order_with_items(sample_order(user.id), Vec::new())
            .await
            .unwrap();

        let snapshot = store.snapshot().await;
        let restored = MemoryStore::from_snapshot(snapshot);
        assert_eq!(restored.scan_users().await.unwrap().len(), 1);
        assert_eq!(restored.scan_orders().await.unwrap().len(), 1);
    }
}

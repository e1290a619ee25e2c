//! Catalog reads: categories and menu items.
//!
//! Pure queries over the store; no caller identity required. Items are
//! joined with their category name so menu pages render from a single
//! call.

use tiffin_core::{CategoryId, MenuItemId, Result};
use tiffin_store::{CategoryRecord, MenuItemRecord, Store};

/// Category name shown when an item's category record is missing.
const UNKNOWN_CATEGORY: &str = "Unknown";

/// Filters for [`Catalog::menu_items`]. All default to "no filter".
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuFilter {
    /// Restrict to one category.
    pub category: Option<CategoryId>,
    /// Only currently available items.
    pub available_only: bool,
    /// Only featured items.
    pub featured_only: bool,
}

/// A menu item joined with its category name.
#[derive(Debug, Clone)]
pub struct MenuItemView {
    /// The item record.
    pub item: MenuItemRecord,
    /// Name of the owning category, or `"Unknown"` if it is gone.
    pub category_name: String,
}

/// Full single-item detail, including the category record when present.
#[derive(Debug, Clone)]
pub struct MenuItemDetail {
    /// The item record.
    pub item: MenuItemRecord,
    /// The owning category, if it still exists.
    pub category: Option<CategoryRecord>,
}

/// Catalog read service.
pub struct Catalog<'a, S> {
    store: &'a S,
}

impl<'a, S: Store> Catalog<'a, S> {
    /// Create a new catalog over the given store.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Categories sorted by display order.
    ///
    /// # Errors
    ///
    /// Returns [`tiffin_core::Error::Store`] on backend failure.
    pub async fn categories(&self, active_only: bool) -> Result<Vec<CategoryRecord>> {
        let mut categories = self.store.scan_categories().await?;
        if active_only {
            categories.retain(|c| c.is_active);
        }
        categories.sort_by_key(|c| c.display_order);
        Ok(categories)
    }

    /// Menu items matching the filter, each with its category name.
    ///
    /// # Errors
    ///
    /// Returns [`tiffin_core::Error::Store`] on backend failure.
    pub async fn menu_items(&self, filter: MenuFilter) -> Result<Vec<MenuItemView>> {
        let mut items = match filter.category {
            Some(category_id) => self.store.menu_items_by_category(category_id).await?,
            None => self.store.scan_menu_items().await?,
        };
        if filter.available_only {
            items.retain(|i| i.is_available);
        }
        if filter.featured_only {
            items.retain(|i| i.is_featured);
        }

        let mut views = Vec::with_capacity(items.len());
        for item in items {
            let category_name = self
                .store
                .category(item.category_id)
                .await?
                .map_or_else(|| UNKNOWN_CATEGORY.to_owned(), |c| c.name);
            views.push(MenuItemView {
                item,
                category_name,
            });
        }
        Ok(views)
    }

    /// A single menu item with its category, or `None` if it is missing.
    ///
    /// # Errors
    ///
    /// Returns [`tiffin_core::Error::Store`] on backend failure.
    pub async fn menu_item(&self, id: MenuItemId) -> Result<Option<MenuItemDetail>> {
        let Some(item) = self.store.menu_item(id).await? else {
            return Ok(None);
        };
        let category = self.store.category(item.category_id).await?;
        Ok(Some(MenuItemDetail { item, category }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use tiffin_core::Price;
    use tiffin_store::MemoryStore;

    use super::*;

    async fn seed_category(store: &MemoryStore, name: &str, order: i32, active: bool) -> CategoryId {
        let category = CategoryRecord {
            id: CategoryId::generate(),
            name: name.to_owned(),
            description: None,
            image: None,
            display_order: order,
            is_active: active,
        };
        let id = category.id;
        store.put_category(category).await.unwrap();
        id
    }

    async fn seed_item(
        store: &MemoryStore,
        category_id: CategoryId,
        name: &str,
        available: bool,
        featured: bool,
    ) -> MenuItemId {
        let item = MenuItemRecord {
            id: MenuItemId::generate(),
            name: name.to_owned(),
            description: String::new(),
            price: Price::new("5.00".parse().unwrap()).unwrap(),
            category_id,
            image: None,
            is_available: available,
            is_featured: featured,
            preparation_minutes: None,
            created_at: Utc::now(),
        };
        let id = item.id;
        store.put_menu_item(item).await.unwrap();
        id
    }

    #[tokio::test]
    async fn test_categories_sorted_and_filtered() {
        let store = MemoryStore::new();
        seed_category(&store, "Desserts", 3, true).await;
        seed_category(&store, "Starters", 1, true).await;
        seed_category(&store, "Secret", 2, false).await;

        let catalog = Catalog::new(&store);
        let all = catalog.categories(false).await.unwrap();
        let names: Vec<_> = all.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Starters", "Secret", "Desserts"]);

        let active = catalog.categories(true).await.unwrap();
        let names: Vec<_> = active.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Starters", "Desserts"]);
    }

    #[tokio::test]
    async fn test_menu_items_filters() {
        let store = MemoryStore::new();
        let mains = seed_category(&store, "Mains", 1, true).await;
        let sides = seed_category(&store, "Sides", 2, true).await;
        seed_item(&store, mains, "Biryani", true, true).await;
        seed_item(&store, mains, "Off-menu", false, false).await;
        seed_item(&store, sides, "Raita", true, false).await;

        let catalog = Catalog::new(&store);

        let in_mains = catalog
            .menu_items(MenuFilter {
                category: Some(mains),
                ..MenuFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(in_mains.len(), 2);
        assert!(in_mains.iter().all(|v| v.category_name == "Mains"));

        let available = catalog
            .menu_items(MenuFilter {
                available_only: true,
                ..MenuFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(available.len(), 2);

        let featured = catalog
            .menu_items(MenuFilter {
                featured_only: true,
                ..MenuFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured.first().unwrap().item.name, "Biryani");
    }

    #[tokio::test]
    async fn test_menu_item_with_missing_category() {
        let store = MemoryStore::new();
        let category = seed_category(&store, "Mains", 1, true).await;
        let item_id = seed_item(&store, category, "Biryani", true, false).await;
        store.delete_category(category).await.unwrap();

        let catalog = Catalog::new(&store);

        let detail = catalog.menu_item(item_id).await.unwrap().unwrap();
        assert!(detail.category.is_none());

        let views = catalog.menu_items(MenuFilter::default()).await.unwrap();
        assert_eq!(views.first().unwrap().category_name, "Unknown");

        assert!(catalog
            .menu_item(MenuItemId::generate())
            .await
            .unwrap()
            .is_none());
    }
}

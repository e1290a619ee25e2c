//! Catalog administration: category and menu-item mutations.
//!
//! All operations require an administrator. Category deletion is blocked
//! while menu items still reference the category.

use chrono::Utc;
use tracing::info;

use tiffin_core::{CategoryId, Error, MenuItemId, Price, Result, VerifiedIdentity};
use tiffin_store::{CategoryRecord, MenuItemRecord, Store};

use tiffin_storefront::auth::require_admin;

/// Input for creating or updating a category.
#[derive(Debug, Clone)]
pub struct CategoryInput {
    /// Category name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional image URL.
    pub image: Option<String>,
    /// Position in menu listings.
    pub display_order: i32,
    /// Whether the storefront shows this category.
    pub is_active: bool,
}

/// Input for creating or updating a menu item.
#[derive(Debug, Clone)]
pub struct MenuItemInput {
    /// Dish name.
    pub name: String,
    /// Dish description.
    pub description: String,
    /// Current price.
    pub price: Price,
    /// Owning category.
    pub category_id: CategoryId,
    /// Optional image URL.
    pub image: Option<String>,
    /// Whether the item can be ordered.
    pub is_available: bool,
    /// Whether the item is highlighted.
    pub is_featured: bool,
    /// Optional preparation time in minutes.
    pub preparation_minutes: Option<u32>,
}

/// Catalog administration service.
pub struct AdminCatalog<'a, S> {
    store: &'a S,
}

impl<'a, S: Store> AdminCatalog<'a, S> {
    /// Create a new catalog administration service.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Forbidden`] for non-admin callers and
    /// [`Error::Store`] on backend failure.
    pub async fn create_category(
        &self,
        identity: &VerifiedIdentity,
        input: CategoryInput,
    ) -> Result<CategoryId> {
        require_admin(self.store, identity).await?;

        let category = CategoryRecord {
            id: CategoryId::generate(),
            name: input.name,
            description: input.description,
            image: input.image,
            display_order: input.display_order,
            is_active: input.is_active,
        };
        let id = category.id;
        self.store.put_category(category).await?;
        info!(category_id = %id, "category created");
        Ok(id)
    }

    /// Replace a category's fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Forbidden`] for non-admin callers,
    /// [`Error::NotFound`] for a missing category, and [`Error::Store`]
    /// on backend failure.
    pub async fn update_category(
        &self,
        identity: &VerifiedIdentity,
        id: CategoryId,
        input: CategoryInput,
    ) -> Result<()> {
        require_admin(self.store, identity).await?;

        if self.store.category(id).await?.is_none() {
            return Err(Error::not_found("category", id));
        }
        self.store
            .put_category(CategoryRecord {
                id,
                name: input.name,
                description: input.description,
                image: input.image,
                display_order: input.display_order,
                is_active: input.is_active,
            })
            .await?;
        Ok(())
    }

    /// Delete a category with no remaining menu items.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] while menu items still reference the
    /// category (everything is left intact), [`Error::Forbidden`] for
    /// non-admin callers, [`Error::NotFound`] for a missing category, and
    /// [`Error::Store`] on backend failure.
    pub async fn delete_category(
        &self,
        identity: &VerifiedIdentity,
        id: CategoryId,
    ) -> Result<()> {
        require_admin(self.store, identity).await?;

        if self.store.category(id).await?.is_none() {
            return Err(Error::not_found("category", id));
        }
        let items = self.store.menu_items_by_category(id).await?;
        if !items.is_empty() {
            return Err(Error::validation("cannot delete category with menu items"));
        }

        self.store.delete_category(id).await?;
        info!(category_id = %id, "category deleted");
        Ok(())
    }

    /// Create a menu item in an existing category.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for a missing category,
    /// [`Error::Forbidden`] for non-admin callers, and [`Error::Store`]
    /// on backend failure.
    pub async fn create_menu_item(
        &self,
        identity: &VerifiedIdentity,
        input: MenuItemInput,
    ) -> Result<MenuItemId> {
        require_admin(self.store, identity).await?;

        if self.store.category(input.category_id).await?.is_none() {
            return Err(Error::not_found("category", input.category_id));
        }

        let item = MenuItemRecord {
            id: MenuItemId::generate(),
            name: input.name,
            description: input.description,
            price: input.price,
            category_id: input.category_id,
            image: input.image,
            is_available: input.is_available,
            is_featured: input.is_featured,
            preparation_minutes: input.preparation_minutes,
            created_at: Utc::now(),
        };
        let id = item.id;
        self.store.put_menu_item(item).await?;
        info!(menu_item_id = %id, "menu item created");
        Ok(id)
    }

    /// Replace a menu item's fields, keeping its creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for a missing item or category,
    /// [`Error::Forbidden`] for non-admin callers, and [`Error::Store`]
    /// on backend failure.
    pub async fn update_menu_item(
        &self,
        identity: &VerifiedIdentity,
        id: MenuItemId,
        input: MenuItemInput,
    ) -> Result<()> {
        require_admin(self.store, identity).await?;

        let existing = self
            .store
            .menu_item(id)
            .await?
            .ok_or_else(|| Error::not_found("menu item", id))?;
        if self.store.category(input.category_id).await?.is_none() {
            return Err(Error::not_found("category", input.category_id));
        }

        self.store
            .put_menu_item(MenuItemRecord {
                id,
                name: input.name,
                description: input.description,
                price: input.price,
                category_id: input.category_id,
                image: input.image,
                is_available: input.is_available,
                is_featured: input.is_featured,
                preparation_minutes: input.preparation_minutes,
                created_at: existing.created_at,
            })
            .await?;
        Ok(())
    }

    /// Delete a menu item. Historical orders keep their snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for a missing item,
    /// [`Error::Forbidden`] for non-admin callers, and [`Error::Store`]
    /// on backend failure.
    pub async fn delete_menu_item(
        &self,
        identity: &VerifiedIdentity,
        id: MenuItemId,
    ) -> Result<()> {
        require_admin(self.store, identity).await?;

        if self.store.menu_item(id).await?.is_none() {
            return Err(Error::not_found("menu item", id));
        }
        self.store.delete_menu_item(id).await?;
        info!(menu_item_id = %id, "menu item deleted");
        Ok(())
    }
}

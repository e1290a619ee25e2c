//! Read-only rollups for the dashboard and customer list.
//!
//! Pure reductions over full collection scans, recomputed on every read.
//! No derived state is persisted and nothing is cached; acceptable at the
//! assumed data volumes.

use chrono::{DateTime, Local, Utc};
use rust_decimal::Decimal;

use tiffin_core::{OrderStatus, Result, VerifiedIdentity};
use tiffin_store::{Store, UserRecord};

use tiffin_storefront::auth::require_admin;

/// Dashboard headline numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    /// All orders ever placed.
    pub total_orders: usize,
    /// Orders currently pending.
    pub pending_orders: usize,
    /// Orders placed since local midnight.
    pub today_orders: usize,
    /// Revenue over all orders.
    pub total_revenue: Decimal,
    /// Revenue since local midnight.
    pub today_revenue: Decimal,
    /// Size of the user directory.
    pub total_customers: usize,
    /// Menu size.
    pub total_menu_items: usize,
    /// Currently available menu items.
    pub available_items: usize,
}

/// One row of the customer list, with lifetime order stats.
#[derive(Debug, Clone)]
pub struct CustomerRow {
    /// The user record.
    pub user: UserRecord,
    /// Number of orders this customer has placed.
    pub order_count: usize,
    /// Lifetime spend across those orders.
    pub total_spent: Decimal,
}

/// Reporting service.
pub struct AdminReports<'a, S> {
    store: &'a S,
}

impl<'a, S: Store> AdminReports<'a, S> {
    /// Create a new reporting service.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Compute the dashboard stats.
    ///
    /// "Today" is bounded by local midnight. Revenue sums every order's
    /// total regardless of status, as the dashboard always has.
    ///
    /// # Errors
    ///
    /// Returns [`tiffin_core::Error::Forbidden`] for non-admin callers
    /// and [`tiffin_core::Error::Store`] on backend failure.
    pub async fn dashboard(&self, identity: &VerifiedIdentity) -> Result<DashboardStats> {
        require_admin(self.store, identity).await?;

        let orders = self.store.scan_orders().await?;
        let users = self.store.scan_users().await?;
        let menu_items = self.store.scan_menu_items().await?;

        let today = Local::now().date_naive();
        let is_today = |at: DateTime<Utc>| at.with_timezone(&Local).date_naive() == today;

        let total_revenue = orders.iter().map(|o| o.total).sum();
        let today_revenue = orders
            .iter()
            .filter(|o| is_today(o.created_at))
            .map(|o| o.total)
            .sum();

        Ok(DashboardStats {
            total_orders: orders.len(),
            pending_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count(),
            today_orders: orders.iter().filter(|o| is_today(o.created_at)).count(),
            total_revenue,
            today_revenue,
            total_customers: users.len(),
            total_menu_items: menu_items.len(),
            available_items: menu_items.iter().filter(|m| m.is_available).count(),
        })
    }

    /// Every customer with order count and lifetime spend, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`tiffin_core::Error::Forbidden`] for non-admin callers
    /// and [`tiffin_core::Error::Store`] on backend failure.
    pub async fn customers(&self, identity: &VerifiedIdentity) -> Result<Vec<CustomerRow>> {
        require_admin(self.store, identity).await?;

        let mut users = self.store.scan_users().await?;
        users.sort_by_key(|u| u.created_at);
        let orders = self.store.scan_orders().await?;

        Ok(users
            .into_iter()
            .map(|user| {
                let user_orders: Vec<_> = orders.iter().filter(|o| o.user_id == user.id).collect();
                CustomerRow {
                    order_count: user_orders.len(),
                    total_spent: user_orders.iter().map(|o| o.total).sum(),
                    user,
                }
            })
            .collect())
    }
}

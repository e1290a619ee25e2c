//! Order administration.
//!
//! The console lists every order and sets statuses freely. Adjacency in
//! the usual `pending → … → delivered` progression is not enforced for
//! administrators; a transition outside it is logged and allowed.

use chrono::Utc;
use tracing::{info, warn};

use tiffin_core::{Email, Error, OrderId, OrderStatus, Result, VerifiedIdentity};
use tiffin_store::{OrderRecord, Store};

use tiffin_storefront::auth::require_admin;

/// One row of the console's order list.
#[derive(Debug, Clone)]
pub struct AdminOrderRow {
    /// The order record.
    pub order: OrderRecord,
    /// Total units across the order's lines.
    pub item_count: u32,
    /// Customer display name, or `"Unknown"` if the record is gone.
    pub customer_name: String,
    /// Customer email, when known.
    pub customer_email: Option<Email>,
}

/// Order administration service.
pub struct AdminOrders<'a, S> {
    store: &'a S,
}

impl<'a, S: Store> AdminOrders<'a, S> {
    /// Create a new order administration service.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Every order, newest first, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Forbidden`] for non-admin callers and
    /// [`Error::Store`] on backend failure.
    pub async fn all_orders(
        &self,
        identity: &VerifiedIdentity,
        status: Option<OrderStatus>,
    ) -> Result<Vec<AdminOrderRow>> {
        require_admin(self.store, identity).await?;

        let mut orders = match status {
            Some(status) => self.store.orders_by_status(status).await?,
            None => self.store.scan_orders().await?,
        };
        orders.sort_by_key(|o| std::cmp::Reverse(o.created_at));

        let mut rows = Vec::with_capacity(orders.len());
        for order in orders {
            let customer = self.store.user(order.user_id).await?;
            let items = self.store.order_items_by_order(order.id).await?;
            rows.push(AdminOrderRow {
                item_count: items.iter().map(|i| i.quantity).sum(),
                customer_name: customer
                    .as_ref()
                    .map_or_else(|| "Unknown".to_owned(), |u| u.name.clone()),
                customer_email: customer.and_then(|u| u.email),
                order,
            });
        }
        Ok(rows)
    }

    /// Set an order's status and refresh its updated timestamp.
    ///
    /// Any of the six statuses is accepted at any time. A transition
    /// outside the usual progression is logged, not rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Forbidden`] for non-admin callers,
    /// [`Error::NotFound`] for a missing order, and [`Error::Store`] on
    /// backend failure.
    pub async fn update_status(
        &self,
        identity: &VerifiedIdentity,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<()> {
        require_admin(self.store, identity).await?;

        let mut order = self
            .store
            .order(order_id)
            .await?
            .ok_or_else(|| Error::not_found("order", order_id))?;

        let from = order.status;
        if !from.is_usual_successor(status) {
            warn!(%order_id, %from, to = %status, "status set outside the usual progression");
        }

        order.status = status;
        order.updated_at = Utc::now();
        self.store.put_order(order).await?;
        info!(%order_id, %from, to = %status, "order status updated");
        Ok(())
    }
}

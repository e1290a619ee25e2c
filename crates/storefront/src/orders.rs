//! Checkout and the customer side of the order lifecycle.
//!
//! Order creation is all-or-nothing: every referenced menu item must
//! exist and be available, the total is computed from current catalog
//! prices, and price/name are snapshotted per line so later catalog edits
//! never alter historical orders. Reads and cancellation are restricted
//! to the owner or an administrator.

use chrono::{DateTime, Utc};
use tracing::info;

use tiffin_core::{
    Email, Error, MenuItemId, OrderId, OrderItemId, OrderStatus, Result, UserId, VerifiedIdentity,
};
use tiffin_store::{OrderItemRecord, OrderRecord, Store, UserRecord};

/// One requested line at checkout. Quantities come from the cart; prices
/// deliberately do not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    /// The menu item to order.
    pub menu_item_id: MenuItemId,
    /// Units to order (positive).
    pub quantity: u32,
    /// Optional per-line note.
    pub note: Option<String>,
}

/// Checkout input.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    /// The ordered lines (non-empty).
    pub lines: Vec<OrderLine>,
    /// Delivery address.
    pub delivery_address: String,
    /// Contact phone.
    pub phone: String,
    /// Optional order-level note.
    pub notes: Option<String>,
}

/// What the customer gets back from checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReceipt {
    /// The persisted order's ID.
    pub order_id: OrderId,
    /// The human-readable order number.
    pub order_number: String,
}

/// An order row for the customer's order list.
#[derive(Debug, Clone)]
pub struct OrderSummary {
    /// The order record.
    pub order: OrderRecord,
    /// Total units across the order's lines.
    pub item_count: u32,
}

/// Current catalog info for a snapshotted line, when the item still exists.
#[derive(Debug, Clone)]
pub struct MenuItemBrief {
    /// Current item name.
    pub name: String,
    /// Current image URL.
    pub image: Option<String>,
}

/// One snapshotted line joined with current catalog info.
#[derive(Debug, Clone)]
pub struct OrderLineDetail {
    /// The snapshotted line item.
    pub item: OrderItemRecord,
    /// The referenced menu item as it looks today, if it still exists.
    pub menu_item: Option<MenuItemBrief>,
}

/// Full order detail for the owner or an administrator.
#[derive(Debug, Clone)]
pub struct OrderDetails {
    /// The order record.
    pub order: OrderRecord,
    /// The snapshotted lines.
    pub items: Vec<OrderLineDetail>,
    /// The ordering customer's display name.
    pub customer_name: String,
    /// The ordering customer's email, when known.
    pub customer_email: Option<Email>,
}

/// Order lifecycle service (customer side).
pub struct OrderService<'a, S> {
    store: &'a S,
}

impl<'a, S: Store> OrderService<'a, S> {
    /// Create a new order service over the given store.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Place an order from checked-out cart lines.
    ///
    /// Side effect: creates the caller's directory record if this is
    /// their first order, seeding the profile from the checkout contact
    /// details; an existing record with a missing phone or address gets
    /// both backfilled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for an empty order, a non-positive
    /// quantity, or an unavailable item (naming it);
    /// [`Error::NotFound`] for a line referencing a missing menu item;
    /// [`Error::Store`] on backend failure. On any error nothing is
    /// persisted.
    pub async fn create_order(
        &self,
        identity: &VerifiedIdentity,
        request: CheckoutRequest,
    ) -> Result<OrderReceipt> {
        if request.lines.is_empty() {
            return Err(Error::validation("order must contain at least one item"));
        }

        let now = Utc::now();
        let order_id = OrderId::generate();

        // Validate every line and snapshot prices before touching anything.
        let mut items = Vec::with_capacity(request.lines.len());
        for line in &request.lines {
            if line.quantity == 0 {
                return Err(Error::validation(format!(
                    "quantity must be positive for menu item {}",
                    line.menu_item_id
                )));
            }

            let menu_item = self
                .store
                .menu_item(line.menu_item_id)
                .await?
                .ok_or_else(|| Error::not_found("menu item", line.menu_item_id))?;
            if !menu_item.is_available {
                return Err(Error::validation(format!(
                    "menu item not available: {}",
                    menu_item.name
                )));
            }

            items.push(OrderItemRecord {
                id: OrderItemId::generate(),
                order_id,
                menu_item_id: menu_item.id,
                quantity: line.quantity,
                unit_price: menu_item.price,
                item_name: menu_item.name,
                note: line.note.clone(),
            });
        }

        let total = items.iter().map(OrderItemRecord::line_total).sum();
        let user_id = self.ensure_ordering_user(identity, &request, now).await?;
        let order_number = order_number_for(now);

        let order = OrderRecord {
            id: order_id,
            user_id,
            order_number: order_number.clone(),
            status: OrderStatus::Pending,
            total,
            delivery_address: request.delivery_address,
            phone: request.phone,
            notes: request.notes,
            created_at: now,
            updated_at: now,
        };
        self.store.insert_order_with_items(order, items).await?;

        info!(%order_id, order_number, %total, "order placed");
        Ok(OrderReceipt {
            order_id,
            order_number,
        })
    }

    /// The caller's orders, newest first. Empty before first sign-in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] on backend failure.
    pub async fn my_orders(&self, identity: &VerifiedIdentity) -> Result<Vec<OrderSummary>> {
        let Some(user) = self.store.user_by_subject(identity.subject()).await? else {
            return Ok(Vec::new());
        };

        let mut orders = self.store.orders_by_user(user.id).await?;
        orders.sort_by_key(|o| std::cmp::Reverse(o.created_at));

        let mut summaries = Vec::with_capacity(orders.len());
        for order in orders {
            let items = self.store.order_items_by_order(order.id).await?;
            summaries.push(OrderSummary {
                item_count: items.iter().map(|i| i.quantity).sum(),
                order,
            });
        }
        Ok(summaries)
    }

    /// Full order detail, for the owner or an administrator only.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the order or caller record is
    /// missing, [`Error::Forbidden`] for any other caller, and
    /// [`Error::Store`] on backend failure.
    pub async fn order_details(
        &self,
        identity: &VerifiedIdentity,
        order_id: OrderId,
    ) -> Result<OrderDetails> {
        let order = self
            .store
            .order(order_id)
            .await?
            .ok_or_else(|| Error::not_found("order", order_id))?;

        let caller = crate::auth::require_user(self.store, identity).await?;
        if order.user_id != caller.id && !caller.is_admin {
            return Err(Error::forbidden("you can only view your own orders"));
        }

        let customer = self
            .store
            .user(order.user_id)
            .await?
            .ok_or_else(|| Error::not_found("user", order.user_id))?;

        let lines = self.store.order_items_by_order(order.id).await?;
        let mut items = Vec::with_capacity(lines.len());
        for item in lines {
            let menu_item = self
                .store
                .menu_item(item.menu_item_id)
                .await?
                .map(|m| MenuItemBrief {
                    name: m.name,
                    image: m.image,
                });
            items.push(OrderLineDetail { item, menu_item });
        }

        Ok(OrderDetails {
            order,
            items,
            customer_name: customer.name,
            customer_email: customer.email,
        })
    }

    /// Cancel an order.
    ///
    /// Owners may cancel while the order is `pending` or `confirmed`;
    /// administrators may cancel from any non-terminal state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Forbidden`] for a non-owner non-admin caller,
    /// [`Error::Validation`] when the status no longer allows
    /// cancellation, [`Error::NotFound`] for a missing order or caller,
    /// and [`Error::Store`] on backend failure.
    pub async fn cancel_order(
        &self,
        identity: &VerifiedIdentity,
        order_id: OrderId,
    ) -> Result<()> {
        let caller = crate::auth::require_user(self.store, identity).await?;
        let mut order = self
            .store
            .order(order_id)
            .await?
            .ok_or_else(|| Error::not_found("order", order_id))?;

        if order.user_id != caller.id && !caller.is_admin {
            return Err(Error::forbidden("you can only cancel your own orders"));
        }

        let cancellable = if caller.is_admin {
            !order.status.is_terminal()
        } else {
            order.status.customer_cancellable()
        };
        if !cancellable {
            return Err(Error::validation(
                "order cannot be cancelled at this stage",
            ));
        }

        let from = order.status;
        order.status = OrderStatus::Cancelled;
        order.updated_at = Utc::now();
        self.store.put_order(order).await?;

        info!(%order_id, %from, by_admin = caller.is_admin, "order cancelled");
        Ok(())
    }

    /// Create or backfill the ordering user's directory record.
    async fn ensure_ordering_user(
        &self,
        identity: &VerifiedIdentity,
        request: &CheckoutRequest,
        now: DateTime<Utc>,
    ) -> Result<UserId> {
        if let Some(mut user) = self.store.user_by_subject(identity.subject()).await? {
            if user.phone.is_none() || user.address.is_none() {
                user.phone = Some(request.phone.clone());
                user.address = Some(request.delivery_address.clone());
                let user_id = user.id;
                self.store.put_user(user).await?;
                return Ok(user_id);
            }
            return Ok(user.id);
        }

        let user = UserRecord {
            id: UserId::generate(),
            subject: identity.subject().to_owned(),
            email: identity.email().cloned(),
            name: identity
                .name()
                .map_or_else(|| "Guest".to_owned(), ToOwned::to_owned),
            phone: Some(request.phone.clone()),
            address: Some(request.delivery_address.clone()),
            is_admin: false,
            created_at: now,
        };
        let user_id = user.id;
        self.store.put_user(user).await?;
        info!(subject = identity.subject(), %user_id, "created user at checkout");
        Ok(user_id)
    }
}

/// Synthesize the human-readable order number for a creation instant.
///
/// `ORD-` followed by the creation millis in uppercase base 36: opaque,
/// roughly monotonically increasing, practically collision-free at the
/// expected creation rate.
fn order_number_for(at: DateTime<Utc>) -> String {
    let millis = u64::try_from(at.timestamp_millis()).unwrap_or_default();
    format!("ORD-{}", base36_upper(millis))
}

fn base36_upper(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    if n == 0 {
        return "0".to_owned();
    }
    let mut out = Vec::new();
    while n > 0 {
        let digit = usize::try_from(n % 36).unwrap_or_default();
        out.push(DIGITS.get(digit).copied().unwrap_or(b'0'));
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

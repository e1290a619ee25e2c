//! Client-session cart aggregate.
//!
//! The cart is client-local and ephemeral: single-threaded, synchronous,
//! and persisted through an injected [`CartStorage`] port after every
//! mutation. Prices and names on cart lines are display data only;
//! checkout re-reads the catalog and snapshots prices server-side.

use std::sync::Mutex;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tiffin_core::{MenuItemId, Price};

use crate::orders::OrderLine;

/// One line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The menu item being ordered.
    pub menu_item_id: MenuItemId,
    /// Item name at the time it was added (display only).
    pub name: String,
    /// Item price at the time it was added (display only).
    pub price: Price,
    /// Units (positive; a zero update removes the line).
    pub quantity: u32,
    /// Optional per-line note.
    pub note: Option<String>,
    /// Optional image URL for display.
    pub image: Option<String>,
}

/// Storage port for cart persistence.
///
/// Client storage is best-effort: a failed save costs at most the cart
/// contents, so the port is infallible by design of the original flows.
/// There is no cross-device synchronization.
pub trait CartStorage {
    /// Load the persisted cart, if any.
    fn load(&self) -> Option<Vec<CartLine>>;
    /// Persist the current cart contents.
    fn save(&self, lines: &[CartLine]);
    /// Drop any persisted cart.
    fn clear(&self);
}

impl<T: CartStorage + ?Sized> CartStorage for &T {
    fn load(&self) -> Option<Vec<CartLine>> {
        (**self).load()
    }

    fn save(&self, lines: &[CartLine]) {
        (**self).save(lines);
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// In-memory [`CartStorage`] for tests and local sessions.
#[derive(Debug, Default)]
pub struct InMemoryCartStorage {
    slot: Mutex<Option<Vec<CartLine>>>,
}

impl InMemoryCartStorage {
    /// Create an empty storage slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for InMemoryCartStorage {
    fn load(&self) -> Option<Vec<CartLine>> {
        self.slot.lock().map_or(None, |slot| (*slot).clone())
    }

    fn save(&self, lines: &[CartLine]) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(lines.to_vec());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

/// The cart aggregate owned by a client session.
#[derive(Debug)]
pub struct Cart<St> {
    storage: St,
    lines: Vec<CartLine>,
}

impl<St: CartStorage> Cart<St> {
    /// Open the cart, restoring any persisted contents.
    #[must_use]
    pub fn open(storage: St) -> Self {
        let lines = storage.load().unwrap_or_default();
        Self { storage, lines }
    }

    /// Add a line. Adding the same menu item again sums the quantities.
    pub fn add(&mut self, line: CartLine) {
        match self
            .lines
            .iter_mut()
            .find(|l| l.menu_item_id == line.menu_item_id)
        {
            Some(existing) => existing.quantity += line.quantity,
            None => self.lines.push(line),
        }
        self.storage.save(&self.lines);
    }

    /// Remove the line for a menu item, if present.
    pub fn remove(&mut self, menu_item_id: MenuItemId) {
        self.lines.retain(|l| l.menu_item_id != menu_item_id);
        self.storage.save(&self.lines);
    }

    /// Set a line's quantity. Zero removes the line.
    pub fn update_quantity(&mut self, menu_item_id: MenuItemId, quantity: u32) {
        if quantity == 0 {
            self.remove(menu_item_id);
            return;
        }
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.menu_item_id == menu_item_id)
        {
            line.quantity = quantity;
        }
        self.storage.save(&self.lines);
    }

    /// Set or clear a line's note.
    pub fn update_note(&mut self, menu_item_id: MenuItemId, note: Option<String>) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.menu_item_id == menu_item_id)
        {
            line.note = note;
        }
        self.storage.save(&self.lines);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.storage.clear();
    }

    /// The current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Display total at the prices the lines were added with.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .map(|l| l.price.line_total(l.quantity))
            .sum()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// The order lines to submit at checkout.
    ///
    /// Only ids, quantities and notes travel to the order service; prices
    /// are re-read from the catalog there.
    #[must_use]
    pub fn checkout_lines(&self) -> Vec<OrderLine> {
        self.lines
            .iter()
            .map(|l| OrderLine {
                menu_item_id: l.menu_item_id,
                quantity: l.quantity,
                note: l.note.clone(),
            })
            .collect()
    }
}

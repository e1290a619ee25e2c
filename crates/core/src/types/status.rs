//! Order status lifecycle.
//!
//! Statuses are stored and transmitted as the six literal snake_case
//! strings. The usual progression is
//! `pending → confirmed → preparing → ready → delivered`, with
//! `cancelled` reachable from any non-terminal state. Administrators may
//! set any status at any time; adjacency is observed for logging only,
//! never enforced.

use serde::{Deserialize, Serialize};

/// The lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed, awaiting kitchen confirmation.
    #[default]
    Pending,
    /// Accepted by the kitchen.
    Confirmed,
    /// Being prepared.
    Preparing,
    /// Ready for pickup/delivery.
    Ready,
    /// Delivered to the customer. Terminal.
    Delivered,
    /// Cancelled by the customer or an administrator. Terminal.
    Cancelled,
}

impl OrderStatus {
    /// All six statuses, in lifecycle order.
    pub const ALL: [Self; 6] = [
        Self::Pending,
        Self::Confirmed,
        Self::Preparing,
        Self::Ready,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// The wire/storage representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether no further transitions are meaningful.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Whether the owning customer may still cancel from this status.
    ///
    /// Administrators may additionally cancel from `preparing` and `ready`.
    #[must_use]
    pub const fn customer_cancellable(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    /// Whether `next` is an expected successor in the usual progression.
    ///
    /// Used only to flag unusual administrator overrides in logs.
    #[must_use]
    pub const fn is_usual_successor(&self, next: Self) -> bool {
        match self {
            Self::Pending => matches!(next, Self::Confirmed | Self::Cancelled),
            Self::Confirmed => matches!(next, Self::Preparing | Self::Cancelled),
            Self::Preparing => matches!(next, Self::Ready | Self::Cancelled),
            Self::Ready => matches!(next, Self::Delivered | Self::Cancelled),
            Self::Delivered | Self::Cancelled => false,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "preparing" => Ok(Self::Preparing),
            "ready" => Ok(Self::Ready),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

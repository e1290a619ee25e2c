//! Domain error taxonomy.
//!
//! A closed set of error kinds shared by the storefront and admin services.
//! The original taxonomy observed at the boundary is: authentication
//! missing, authorization denied, referenced record missing, and input
//! validation failure. A fifth variant surfaces store-backend failures.
//!
//! All services return [`Result`]; nothing is retried and no partial
//! success exists.

use thiserror::Error;

/// Domain-level error for Tiffin services.
#[derive(Debug, Error)]
pub enum Error {
    /// No verified identity was supplied where one is required.
    #[error("not signed in")]
    Unauthenticated,

    /// The caller is authenticated but not allowed to perform the operation.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// A referenced record does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Record kind, e.g. `"order"` or `"menu item"`.
        kind: &'static str,
        /// Identifier of the missing record.
        id: String,
    },

    /// The input is structurally valid but violates a domain rule.
    #[error("validation: {0}")]
    Validation(String),

    /// The managed store reported a backend failure.
    #[error("store error: {0}")]
    Store(String),
}

impl Error {
    /// Shorthand for a [`Error::Forbidden`] with a reason.
    pub fn forbidden(reason: impl Into<String>) -> Self {
        Self::Forbidden(reason.into())
    }

    /// Shorthand for a [`Error::NotFound`] for a record kind and id.
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Shorthand for a [`Error::Validation`] with a message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Result type alias for domain operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(Error::Unauthenticated.to_string(), "not signed in");
        assert_eq!(
            Error::forbidden("admin access required").to_string(),
            "forbidden: admin access required"
        );
        assert_eq!(
            Error::not_found("order", "abc").to_string(),
            "order not found: abc"
        );
        assert_eq!(
            Error::validation("menu item not available: Samosa").to_string(),
            "validation: menu item not available: Samosa"
        );
    }
}

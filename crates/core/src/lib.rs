//! Tiffin Core - Shared types library.
//!
//! This crate provides common types used across all Tiffin components:
//! - `store` - Managed document store port and reference backend
//! - `storefront` - Customer-facing ordering services
//! - `admin` - Administration console services
//! - `cli` - Command-line tools for seeding and management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no store access, no
//! runtime dependencies. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`error`] - The closed domain error taxonomy
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails,
//!   order statuses, and verified identities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

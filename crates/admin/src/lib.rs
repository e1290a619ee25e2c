//! Tiffin Admin - Administration console services.
//!
//! Catalog management, order administration, and read-only rollups for
//! the dashboard. Operations that model console features take a
//! [`VerifiedIdentity`](tiffin_core::VerifiedIdentity) and require the
//! admin flag; the [`users`] module is operator tooling invoked from the
//! CLI and deliberately has no caller gate, like the internal mutations
//! it replaces.
//!
//! # Modules
//!
//! - [`catalog`] - Category and menu-item mutations
//! - [`orders`] - Order listing and status administration
//! - [`reports`] - Dashboard stats and customer rollups
//! - [`users`] - Operator user listing and admin grants

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod orders;
pub mod reports;
pub mod users;

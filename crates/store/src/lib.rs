//! Tiffin Store - Managed document store port.
//!
//! The production deployment delegates persistence to an externally
//! managed reactive document database. This crate defines the contract the
//! domain relies on and a reference in-memory backend:
//!
//! - [`records`] - The five persisted record kinds
//! - [`Store`] - Lookup/scan/upsert primitives, one compound atomic insert
//! - [`MemoryStore`] - In-memory backend for tests, the CLI, and local dev
//! - [`StoreSnapshot`] - JSON serialization of the full contents

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod memory;
pub mod port;
pub mod records;
pub mod snapshot;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use port::Store;
pub use records::{CategoryRecord, MenuItemRecord, OrderItemRecord, OrderRecord, UserRecord};
pub use snapshot::StoreSnapshot;

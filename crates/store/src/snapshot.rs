//! JSON snapshots of the full store contents.
//!
//! The CLI operates on snapshot files: seed writes one, management
//! commands load it, mutate through [`MemoryStore`](crate::MemoryStore),
//! and write it back.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::records::{CategoryRecord, MenuItemRecord, OrderItemRecord, OrderRecord, UserRecord};

/// All five collections, serialized as one JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// User directory.
    #[serde(default)]
    pub users: Vec<UserRecord>,
    /// Menu categories.
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
    /// Menu items.
    #[serde(default)]
    pub menu_items: Vec<MenuItemRecord>,
    /// Orders.
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
    /// Order line items.
    #[serde(default)]
    pub order_items: Vec<OrderItemRecord>,
}

impl StoreSnapshot {
    /// Load a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Snapshot`] on I/O failure and
    /// [`StoreError::SnapshotDecode`] on malformed JSON.
    pub async fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| {
            StoreError::Snapshot {
                path: path.display().to_string(),
                source,
            }
        })?;
        serde_json::from_slice(&bytes).map_err(|source| StoreError::SnapshotDecode {
            path: path.display().to_string(),
            source,
        })
    }

    /// Write the snapshot to a JSON file, pretty-printed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Snapshot`] on I/O failure.
    pub async fn save(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_vec_pretty(self).map_err(|e| StoreError::Backend(e.to_string()))?;
        tokio::fs::write(path, json)
            .await
            .map_err(|source| StoreError::Snapshot {
                path: path.display().to_string(),
                source,
            })
    }
}

//! Store port errors.

use thiserror::Error;

/// Errors surfaced by a [`Store`](crate::Store) backend.
///
/// The managed store is an external service; everything it reports is an
/// opaque backend failure from the domain's point of view. The in-memory
/// reference backend only fails on snapshot I/O.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend reported a failure.
    #[error("store backend: {0}")]
    Backend(String),

    /// A snapshot file could not be read or written.
    #[error("snapshot {path}: {source}")]
    Snapshot {
        /// Path of the snapshot file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A snapshot file could not be parsed.
    #[error("snapshot decode {path}: {source}")]
    SnapshotDecode {
        /// Path of the snapshot file.
        path: String,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
}

impl From<StoreError> for tiffin_core::Error {
    fn from(err: StoreError) -> Self {
        Self::Store(err.to_string())
    }
}

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

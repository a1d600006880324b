//! Error types for the state core.
//!
//! - [`StorageError`] - Durable key-value storage failures
//! - [`StoreError`] - Failures surfaced by store operations
//!
//! Most operations are in-memory and cannot fail; only the ones that write
//! through to storage return a [`StoreError`].

use thiserror::Error;

/// Durable storage failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The storage backend is not available (private mode, no window, ...).
    #[error("storage not available")]
    Unavailable,
    /// Reading a key failed.
    #[error("failed to read `{key}` from storage")]
    ReadFailed { key: String },
    /// Writing a key failed (quota, permissions, ...).
    #[error("failed to write `{key}` to storage")]
    WriteFailed { key: String },
}

/// Errors returned by store operations that persist state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to serialize display preferences: {0}")]
    Serialize(#[from] serde_json::Error),
}

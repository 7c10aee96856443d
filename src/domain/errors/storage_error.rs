//! Session storage error types.

use thiserror::Error;

/// Session storage error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("failed to access session storage: {0}")]
    AccessFailed(String),

    #[error("failed to retrieve session value: {0}")]
    RetrievalFailed(String),

    #[error("failed to store session value: {0}")]
    StorageFailed(String),

    #[error("failed to delete session value: {0}")]
    DeletionFailed(String),
}

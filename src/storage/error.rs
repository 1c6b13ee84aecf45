//! Storage-specific error types.
//!
//! All storage operations return [`StoreError`] on failure, which can be
//! matched to determine the underlying cause.

use thiserror::Error;

/// Errors that can occur in the storage layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database operation failed (sqlx error).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error (e.g., filesystem failure during setup).
    #[error("internal error: {0}")]
    Internal(String),
}

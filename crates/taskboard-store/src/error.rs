//! Store error types.

use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A SQL query failed or returned malformed data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a row but none was found (among non-deleted rows).
    #[error("No result returned")]
    NoResult,

    /// The row changed since it was read: the version compare-and-swap
    /// missed. Callers re-fetch and resubmit; the store never retries.
    #[error("Concurrent modification of task {id}")]
    Conflict { id: String },

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

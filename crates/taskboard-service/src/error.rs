//! Service error taxonomy.
//!
//! Every failure propagates synchronously as one of these typed outcomes so
//! the (out-of-scope) transport layer can map kinds to statuses. `NotFound`
//! is only used where a miss is an error; point lookups return `Option`
//! instead, a miss there is neutral.

use thiserror::Error;

use taskboard_store::error::StoreError;

/// Errors raised by the task and user services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The addressed task does not exist (or is soft-deleted).
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Malformed input reached the service.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A referenced foreign entity does not exist. Validation-class failure.
    #[error("Invalid reference: {entity_type} {id} does not exist")]
    ReferenceInvalid { entity_type: String, id: String },

    /// Optimistic-lock mismatch: the row changed since it was read. The
    /// caller should reload and resubmit; the service never retries.
    #[error("Conflict: {entity_type} {id} was modified concurrently, reload and retry")]
    Conflict { entity_type: String, id: String },

    /// Unexpected lower-layer failure, surfaced as-is.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Log an unexpected store failure at error severity before surfacing it.
pub(crate) fn unexpected(operation: &'static str, err: StoreError) -> ServiceError {
    tracing::error!(operation, error = %err, "store operation failed");
    ServiceError::Store(err)
}

//! Error types for the Order collection.

use thiserror::Error;
use tulipa_store::StoreError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),

    /// A record invariant does not hold.
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// The collection could not be reached.
    #[error("Order store error: {0}")]
    Store(String),
}

impl OrderError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        OrderError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

impl From<StoreError> for OrderError {
    /// Recovers an `OrderError` the document itself raised; everything else is a store failure.
    fn from(err: StoreError) -> Self {
        match err.into_rejection::<OrderError>() {
            Ok(rejection) => rejection,
            Err(StoreError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::Store(other.to_string()),
        }
    }
}

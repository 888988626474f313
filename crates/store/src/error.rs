//! # Store Errors
//!
//! Failures reported by a collection. Transport failures (`Closed`, `Dropped`) and lookups
//! (`NotFound`) come from the store itself; `Rejected` carries the document's own error.

/// Errors returned by a [`CollectionClient`](crate::CollectionClient).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("collection closed")]
    Closed,
    #[error("collection dropped the reply channel")]
    Dropped,
    #[error("document not found: {0}")]
    NotFound(String),
    #[error("document rejected the request: {0}")]
    Rejected(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Recovers the document error behind a `Rejected`, if it is of type `E`.
    ///
    /// Any other variant, or a rejection of a different type, is handed back unchanged.
    pub fn into_rejection<E>(self) -> Result<E, StoreError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            StoreError::Rejected(inner) => match inner.downcast::<E>() {
                Ok(err) => Ok(*err),
                Err(other) => Err(StoreError::Rejected(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("too small")]
    struct TooSmall;

    #[test]
    fn rejection_is_recovered_by_type() {
        let err = StoreError::Rejected(Box::new(TooSmall));
        assert_eq!(err.into_rejection::<TooSmall>().unwrap(), TooSmall);
    }

    #[test]
    fn other_variants_pass_through() {
        let err = StoreError::NotFound("note_3".into());
        match err.into_rejection::<TooSmall>() {
            Err(StoreError::NotFound(id)) => assert_eq!(id, "note_3"),
            other => panic!("unexpected: {other:?}"),
        }

        let err = StoreError::Rejected(Box::new(std::io::Error::other("disk")));
        assert!(matches!(
            err.into_rejection::<TooSmall>(),
            Err(StoreError::Rejected(_))
        ));
    }
}

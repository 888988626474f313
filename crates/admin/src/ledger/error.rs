//! Error types for the stock ledger.

use crate::model::{UnknownVariety, Variety};
use thiserror::Error;

/// Why a reservation was refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Committing `requested` more would exceed the variety's capacity.
    #[error("not enough {variety} in stock: requested {requested}, remaining {remaining}")]
    CapacityExceeded {
        variety: Variety,
        requested: u32,
        remaining: i64,
    },

    /// The variety has no entry in the capacity table.
    #[error("no stock is kept for variety {0}")]
    UnknownVariety(String),
}

impl LedgerError {
    /// Remaining capacity to report to the operator. Unknown varieties have none.
    pub fn remaining(&self) -> i64 {
        match self {
            LedgerError::CapacityExceeded { remaining, .. } => *remaining,
            LedgerError::UnknownVariety(_) => 0,
        }
    }
}

impl From<UnknownVariety> for LedgerError {
    fn from(err: UnknownVariety) -> Self {
        LedgerError::UnknownVariety(err.0)
    }
}

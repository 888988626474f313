//! Errors surfaced by console operations.

use crate::ledger::LedgerError;
use crate::order_actor::OrderError;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConsoleError {
    /// The reservation was refused; nothing was written.
    #[error(transparent)]
    Stock(#[from] LedgerError),

    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Order store unavailable: {0}")]
    Store(String),
}

impl ConsoleError {
    /// Text to show the operator.
    pub fn user_message(&self) -> String {
        match self {
            ConsoleError::Stock(LedgerError::CapacityExceeded {
                variety, remaining, ..
            }) => format!("Not enough {variety} in stock. Available: {remaining}."),
            ConsoleError::Stock(LedgerError::UnknownVariety(name)) => {
                format!("\"{name}\" is not a variety we stock. Available: 0.")
            }
            ConsoleError::Invalid { field, reason } => format!("Please check {field}: {reason}."),
            ConsoleError::NotFound(_) => "This order no longer exists.".to_string(),
            ConsoleError::Store(_) => {
                "Could not reach the order store. Please try again.".to_string()
            }
        }
    }
}

impl From<OrderError> for ConsoleError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Validation { field, reason } => ConsoleError::Invalid { field, reason },
            OrderError::NotFound(id) => ConsoleError::NotFound(id),
            OrderError::Store(message) => {
                error!(error = %message, "Order store call failed");
                ConsoleError::Store(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Variety;

    #[test]
    fn stock_messages_carry_the_remaining_amount() {
        let err = ConsoleError::from(LedgerError::CapacityExceeded {
            variety: Variety::Circuit,
            requested: 10,
            remaining: 4,
        });
        assert_eq!(err.user_message(), "Not enough Circuit in stock. Available: 4.");

        let err = ConsoleError::from(LedgerError::UnknownVariety("Black Baccara".into()));
        assert!(err.user_message().contains("Available: 0"));
    }

    #[test]
    fn store_failures_stay_generic() {
        let err = ConsoleError::from(OrderError::Store("collection closed".into()));
        assert_eq!(err, ConsoleError::Store("collection closed".into()));
        assert!(!err.user_message().contains("collection closed"));
    }
}

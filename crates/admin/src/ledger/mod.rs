//! # Stock Ledger
//!
//! Keeps the per-variety capacity invariant: across all current orders, the flowers committed
//! to a variety must not exceed its capacity.
//!
//! The ledger holds no order state. Every call re-derives its answer from the snapshot it is
//! given, so it can be fed straight from [`CollectionClient::list`](tulipa_store::CollectionClient::list)
//! or from a live feed.
//!
//! ```rust
//! use tulipa_admin::ledger::{StockCapacity, StockLedger};
//! use tulipa_admin::model::Variety;
//!
//! let ledger = StockLedger::new(StockCapacity::standard());
//! assert!(ledger.validate_reservation(&[], Variety::Circuit, 300, None).is_ok());
//! assert_eq!(ledger.remaining(&[], Variety::Circuit), 300);
//! assert_eq!(ledger.next_order_number(&[]), 1);
//! ```
//!
//! Validation and the write that follows are separate steps. Two callers holding the same
//! snapshot can both pass and together overbook a variety; [`StockLedger::remaining`] then
//! goes negative and is reported as such.

pub mod capacity;
pub mod error;

pub use capacity::*;
pub use error::*;

use crate::model::{Order, OrderId, Variety};
use serde::Serialize;

/// One row of the inventory roll-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockLine {
    pub variety: Variety,
    pub capacity: u32,
    pub committed: u64,
    pub remaining: i64,
}

#[derive(Debug, Clone)]
pub struct StockLedger {
    capacity: StockCapacity,
}

impl Default for StockLedger {
    fn default() -> Self {
        Self::new(StockCapacity::standard())
    }
}

impl StockLedger {
    pub fn new(capacity: StockCapacity) -> Self {
        Self { capacity }
    }

    pub fn capacity(&self) -> &StockCapacity {
        &self.capacity
    }

    /// Sum of `flower_quantity` over the orders of `variety`, skipping `exclude` if given.
    pub fn committed(&self, orders: &[Order], variety: Variety, exclude: Option<&OrderId>) -> u64 {
        orders
            .iter()
            .filter(|o| o.variety == variety)
            .filter(|o| exclude != Some(&o.id))
            .map(|o| u64::from(o.flower_quantity))
            .sum()
    }

    /// Succeeds iff `committed + requested <= capacity`.
    ///
    /// Pass the id of the order being edited as `exclude` so it does not count against itself.
    pub fn validate_reservation(
        &self,
        orders: &[Order],
        variety: Variety,
        requested: u32,
        exclude: Option<&OrderId>,
    ) -> Result<(), LedgerError> {
        let capacity = self
            .capacity
            .get(variety)
            .ok_or_else(|| LedgerError::UnknownVariety(variety.name().to_string()))?;
        let committed = self.committed(orders, variety, exclude);

        if committed + u64::from(requested) > u64::from(capacity) {
            return Err(LedgerError::CapacityExceeded {
                variety,
                requested,
                remaining: i64::from(capacity) - committed as i64,
            });
        }
        Ok(())
    }

    /// Capacity minus committed. Negative when already overbooked; unknown varieties count
    /// as zero capacity.
    pub fn remaining(&self, orders: &[Order], variety: Variety) -> i64 {
        let capacity = self.capacity.get(variety).unwrap_or(0);
        i64::from(capacity) - self.committed(orders, variety, None) as i64
    }

    /// `1 + max(order_number)`, or 1 for an empty collection.
    pub fn next_order_number(&self, orders: &[Order]) -> u64 {
        orders.iter().map(|o| o.order_number).max().unwrap_or(0) + 1
    }

    /// One line per known variety, in catalogue order.
    pub fn report(&self, orders: &[Order]) -> Vec<StockLine> {
        self.capacity
            .iter()
            .map(|(variety, capacity)| {
                let committed = self.committed(orders, variety, None);
                StockLine {
                    variety,
                    capacity,
                    committed,
                    remaining: i64::from(capacity) - committed as i64,
                }
            })
            .collect()
    }

    /// The roll-up line for a single variety, if the table knows it.
    pub fn line(&self, orders: &[Order], variety: Variety) -> Option<StockLine> {
        let capacity = self.capacity.get(variety)?;
        let committed = self.committed(orders, variety, None);
        Some(StockLine {
            variety,
            capacity,
            committed,
            remaining: i64::from(capacity) - committed as i64,
        })
    }
}

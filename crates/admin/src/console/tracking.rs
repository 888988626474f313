use crate::ledger::StockLine;
use crate::model::Order;
use serde::Serialize;

/// An order together with the stock position of its variety.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderTracking {
    pub order: Order,
    /// `None` when the capacity table has no entry for the variety.
    pub stock: Option<StockLine>,
}

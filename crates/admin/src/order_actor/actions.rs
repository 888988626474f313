//! Custom actions for the Order collection.
//!
//! Handled by [`Document::handle_action`](tulipa_store::Document::handle_action); see
//! [`impl Document for Order`](crate::model::Order#impl-Document-for-Order).

/// Operations on a single order beyond CRUD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderAction {
    /// Sets the status to Done.
    MarkDone,
}

/// Results from [`OrderAction`]s, one variant per action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderActionResult {
    /// `false` when the order was already done and nothing was written.
    MarkDone(bool),
}

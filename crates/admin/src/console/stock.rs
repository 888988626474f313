use crate::ledger::{StockLedger, StockLine};
use crate::model::Order;
use tokio::sync::watch;
use tracing::debug;

/// Live inventory roll-up.
///
/// Recomputes the full report from the latest snapshot whenever the order collection
/// changes.
pub struct StockMonitor {
    feed: watch::Receiver<Vec<Order>>,
    ledger: StockLedger,
}

impl StockMonitor {
    pub fn new(feed: watch::Receiver<Vec<Order>>, ledger: StockLedger) -> Self {
        Self { feed, ledger }
    }

    /// Report for the snapshot last seen.
    pub fn current(&self) -> Vec<StockLine> {
        self.ledger.report(&self.feed.borrow())
    }

    /// Waits for the next committed change and returns the new report.
    ///
    /// `None` once the collection has shut down.
    pub async fn changed(&mut self) -> Option<Vec<StockLine>> {
        self.feed.changed().await.ok()?;
        let orders = self.feed.borrow_and_update();
        debug!(size = orders.len(), "Recomputing stock report");
        Some(self.ledger.report(&orders))
    }
}

//! # Console Operations
//!
//! The page logic of the admin console without any rendering: the create form, the
//! searchable and editable order list, per-order tracking and the inventory roll-up.
//!
//! Every write that adds flowers is preceded by a reservation check against a fresh
//! snapshot. The check and the write are separate store calls, so two operators submitting
//! at the same moment can both pass and overbook a variety. The roll-up then shows negative
//! remaining stock instead of hiding it.

pub mod error;
pub mod form;
pub mod search;
pub mod stock;
pub mod tracking;

pub use error::*;
pub use form::*;
pub use search::*;
pub use stock::*;
pub use tracking::*;

use crate::clients::{DocumentClient, OrderClient};
use crate::ledger::{StockLedger, StockLine};
use crate::model::{Order, OrderId, OrderPatch};
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct OrdersConsole {
    orders: OrderClient,
    ledger: StockLedger,
}

impl OrdersConsole {
    pub fn new(orders: OrderClient, ledger: StockLedger) -> Self {
        Self { orders, ledger }
    }

    pub fn ledger(&self) -> &StockLedger {
        &self.ledger
    }

    async fn snapshot(&self) -> Result<Vec<Order>, ConsoleError> {
        Ok(self.orders.list().await?)
    }

    /// Validates the form, reserves stock against the current snapshot and writes the order.
    #[instrument(skip(self, form), fields(customer = %form.customer, variety = %form.variety))]
    pub async fn create_order(&self, form: OrderForm) -> Result<OrderId, ConsoleError> {
        let mut draft = form.into_draft()?;
        let snapshot = self.snapshot().await?;

        if let Err(e) =
            self.ledger
                .validate_reservation(&snapshot, draft.variety, draft.flower_quantity, None)
        {
            warn!(error = %e, "Reservation refused");
            return Err(e.into());
        }
        info!(
            variety = %draft.variety,
            requested = draft.flower_quantity,
            remaining = self.ledger.remaining(&snapshot, draft.variety)
                - i64::from(draft.flower_quantity),
            "Reservation admitted"
        );
        draft.order_number = self.ledger.next_order_number(&snapshot);

        let id = self.orders.create_order(draft).await?;
        info!(%id, "Order placed");
        Ok(id)
    }

    /// Every order, in creation order.
    pub async fn orders(&self) -> Result<Vec<Order>, ConsoleError> {
        self.snapshot().await
    }

    #[instrument(skip(self))]
    pub async fn search(&self, query: &OrderQuery) -> Result<Vec<Order>, ConsoleError> {
        Ok(query.filter(self.snapshot().await?))
    }

    /// Applies an edit. A change of variety or quantity is checked against stock first,
    /// with the edited order left out of the committed total.
    #[instrument(skip(self))]
    pub async fn edit_order(&self, id: OrderId, patch: OrderPatch) -> Result<Order, ConsoleError> {
        if patch.touches_stock() {
            let snapshot = self.snapshot().await?;
            let current = snapshot
                .iter()
                .find(|o| o.id == id)
                .ok_or_else(|| ConsoleError::NotFound(id.to_string()))?;
            let next = current.patched(patch.clone());

            if let Err(e) = self.ledger.validate_reservation(
                &snapshot,
                next.variety,
                next.flower_quantity,
                Some(&id),
            ) {
                warn!(error = %e, "Edit refused");
                return Err(e.into());
            }
        }

        let order = self.orders.update_order(id, patch).await?;
        info!(%id, "Order updated");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<(), ConsoleError> {
        self.orders.delete(id).await?;
        info!(%id, "Order deleted");
        Ok(())
    }

    /// The order and the stock position of its variety.
    #[instrument(skip(self))]
    pub async fn track_order(&self, id: OrderId) -> Result<OrderTracking, ConsoleError> {
        let snapshot = self.snapshot().await?;
        let order = snapshot
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| ConsoleError::NotFound(id.to_string()))?;
        let stock = self.ledger.line(&snapshot, order.variety);
        Ok(OrderTracking { order, stock })
    }

    /// Marks the order done. `false` if it already was.
    #[instrument(skip(self))]
    pub async fn mark_done(&self, id: OrderId) -> Result<bool, ConsoleError> {
        let changed = self.orders.mark_done(id).await?;
        info!(%id, changed, "Order marked done");
        Ok(changed)
    }

    pub async fn stock_report(&self) -> Result<Vec<StockLine>, ConsoleError> {
        Ok(self.ledger.report(&self.snapshot().await?))
    }

    /// A roll-up that follows every committed change to the collection.
    pub async fn watch_stock(&self) -> Result<StockMonitor, ConsoleError> {
        let feed = self.orders.subscribe().await?;
        Ok(StockMonitor::new(feed, self.ledger.clone()))
    }
}

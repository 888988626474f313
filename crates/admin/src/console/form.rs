use super::error::ConsoleError;
use crate::ledger::LedgerError;
use crate::model::{Creator, Order, OrderDraft, OrderId, OrderStatus, Variety, YesNo};
use crate::order_actor::entity::check;
use chrono::NaiveDateTime;
use serde::Deserialize;

/// What the operator fills in to create an order.
///
/// The variety arrives as free text and is matched against the catalogue on submit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrderForm {
    pub customer: String,
    pub price: f64,
    pub variety: String,
    pub flower_quantity: u32,
    pub packaging: YesNo,
    pub delivery: YesNo,
    pub delivery_address: String,
    pub delivery_time: Option<NaiveDateTime>,
    pub status: OrderStatus,
    pub created_by: Creator,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            customer: String::new(),
            price: 0.0,
            variety: Variety::AndreCitroen.name().to_string(),
            flower_quantity: 0,
            packaging: YesNo::No,
            delivery: YesNo::No,
            delivery_address: String::new(),
            delivery_time: None,
            status: OrderStatus::New,
            created_by: Creator::User,
        }
    }
}

impl OrderForm {
    /// Parses the variety and checks the record invariants.
    ///
    /// The draft's order number is left at 0; it is assigned from the snapshot the
    /// reservation is validated against.
    pub fn into_draft(self) -> Result<OrderDraft, ConsoleError> {
        let variety: Variety = self.variety.parse().map_err(LedgerError::from)?;
        let draft = OrderDraft {
            order_number: 0,
            customer: self.customer.trim().to_string(),
            price: self.price,
            variety,
            flower_quantity: self.flower_quantity,
            packaging: self.packaging,
            delivery: self.delivery,
            delivery_address: self.delivery_address.trim().to_string(),
            delivery_time: self.delivery_time,
            status: self.status,
            created_by: self.created_by,
        };
        check(&Order::new(OrderId(0), draft.clone()))?;
        Ok(draft)
    }
}

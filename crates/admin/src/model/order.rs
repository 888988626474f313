use crate::model::Variety;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Store-assigned identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Yes/no flag used for packaging and delivery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    #[default]
    No,
}

impl YesNo {
    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }
}

impl From<bool> for YesNo {
    fn from(flag: bool) -> Self {
        if flag {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }
}

impl Display for YesNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        })
    }
}

/// Where an order is in its lifecycle. Moves forward in practice; edits may set any value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    New,
    InProgress,
    Done,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OrderStatus::New => "New",
            OrderStatus::InProgress => "In progress",
            OrderStatus::Done => "Done",
        })
    }
}

/// Who entered the order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Creator {
    System,
    #[default]
    User,
}

impl Display for Creator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Creator::System => "System",
            Creator::User => "User",
        })
    }
}

/// A customer order for flowers.
///
/// # Document Store
/// This struct implements the [`Document`](tulipa_store::Document) trait,
/// so it is kept by a [`CollectionActor`](tulipa_store::CollectionActor).
///
/// See [`impl Document for Order`](#impl-Document-for-Order) for:
/// - Creation payload ([`OrderDraft`])
/// - Edit payload ([`OrderPatch`])
/// - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_number: u64,
    pub customer: String,
    pub price: f64,
    pub variety: Variety,
    pub flower_quantity: u32,
    pub packaging: YesNo,
    pub delivery: YesNo,
    pub delivery_address: String,
    pub delivery_time: Option<NaiveDateTime>,
    pub status: OrderStatus,
    pub created_by: Creator,
}

/// Payload for creating an order: everything but the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    /// Assigned by the caller from the snapshot it validated against.
    pub order_number: u64,
    pub customer: String,
    pub price: f64,
    pub variety: Variety,
    pub flower_quantity: u32,
    pub packaging: YesNo,
    pub delivery: YesNo,
    pub delivery_address: String,
    pub delivery_time: Option<NaiveDateTime>,
    pub status: OrderStatus,
    pub created_by: Creator,
}

/// Payload for editing an order. `None` leaves a field as it is.
///
/// `delivery_time: Some(None)` clears the time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderPatch {
    pub customer: Option<String>,
    pub price: Option<f64>,
    pub variety: Option<Variety>,
    pub flower_quantity: Option<u32>,
    pub packaging: Option<YesNo>,
    pub delivery: Option<YesNo>,
    pub delivery_address: Option<String>,
    pub delivery_time: Option<Option<NaiveDateTime>>,
    pub status: Option<OrderStatus>,
    pub created_by: Option<Creator>,
}

impl OrderPatch {
    /// True when the patch changes what the order reserves from stock.
    pub fn touches_stock(&self) -> bool {
        self.variety.is_some() || self.flower_quantity.is_some()
    }
}

impl Order {
    /// Builds the stored record from a draft.
    pub fn new(id: OrderId, draft: OrderDraft) -> Self {
        Self {
            id,
            order_number: draft.order_number,
            customer: draft.customer,
            price: draft.price,
            variety: draft.variety,
            flower_quantity: draft.flower_quantity,
            packaging: draft.packaging,
            delivery: draft.delivery,
            delivery_address: draft.delivery_address,
            delivery_time: draft.delivery_time,
            status: draft.status,
            created_by: draft.created_by,
        }
    }

    /// Copies every field the patch sets. No validation.
    pub fn apply(&mut self, patch: OrderPatch) {
        if let Some(customer) = patch.customer {
            self.customer = customer;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(variety) = patch.variety {
            self.variety = variety;
        }
        if let Some(quantity) = patch.flower_quantity {
            self.flower_quantity = quantity;
        }
        if let Some(packaging) = patch.packaging {
            self.packaging = packaging;
        }
        if let Some(delivery) = patch.delivery {
            self.delivery = delivery;
        }
        if let Some(address) = patch.delivery_address {
            self.delivery_address = address;
        }
        if let Some(time) = patch.delivery_time {
            self.delivery_time = time;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(created_by) = patch.created_by {
            self.created_by = created_by;
        }
    }

    /// The order as it would look with `patch` applied.
    pub fn patched(&self, patch: OrderPatch) -> Self {
        let mut next = self.clone();
        next.apply(patch);
        next
    }
}

use crate::model::{Order, OrderStatus, Variety, YesNo};

/// Client-side filter over the order list.
///
/// `text` matches case-insensitively against customer, delivery address, variety name and
/// order number. Every filter that is set must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQuery {
    pub text: Option<String>,
    pub status: Option<OrderStatus>,
    pub variety: Option<Variety>,
    pub delivery: Option<YesNo>,
}

impl OrderQuery {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_variety(mut self, variety: Variety) -> Self {
        self.variety = Some(variety);
        self
    }

    pub fn with_delivery(mut self, delivery: YesNo) -> Self {
        self.delivery = Some(delivery);
        self
    }

    pub fn matches(&self, order: &Order) -> bool {
        if self.status.is_some_and(|s| s != order.status)
            || self.variety.is_some_and(|v| v != order.variety)
            || self.delivery.is_some_and(|d| d != order.delivery)
        {
            return false;
        }

        let needle = match self.text.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text.to_lowercase(),
            _ => return true,
        };
        [
            order.customer.to_lowercase(),
            order.delivery_address.to_lowercase(),
            order.variety.name().to_lowercase(),
            order.order_number.to_string(),
        ]
        .iter()
        .any(|field| field.contains(&needle))
    }

    /// Keeps the matching orders, in list order.
    pub fn filter(&self, orders: Vec<Order>) -> Vec<Order> {
        orders.into_iter().filter(|o| self.matches(o)).collect()
    }
}

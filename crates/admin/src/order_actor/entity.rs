//! [`Document`] implementation for [`Order`].

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::model::{Order, OrderDraft, OrderId, OrderPatch, OrderStatus};
use async_trait::async_trait;
use tulipa_store::Document;

#[async_trait]
impl Document for Order {
    type Id = OrderId;
    type Draft = OrderDraft;
    type Patch = OrderPatch;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = ();
    type Error = OrderError;

    fn from_draft(id: OrderId, draft: OrderDraft) -> Result<Self, Self::Error> {
        let order = Order::new(id, draft);
        check(&order)?;
        Ok(order)
    }

    /// Applies every field the patch sets, then re-checks the whole record.
    async fn on_update(&mut self, patch: OrderPatch, _ctx: &()) -> Result<(), Self::Error> {
        self.apply(patch);
        check(self)
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &(),
    ) -> Result<OrderActionResult, Self::Error> {
        match action {
            OrderAction::MarkDone if self.status == OrderStatus::Done => {
                Ok(OrderActionResult::MarkDone(false))
            }
            OrderAction::MarkDone => {
                self.status = OrderStatus::Done;
                Ok(OrderActionResult::MarkDone(true))
            }
        }
    }
}

/// Record invariants that hold for every stored order.
pub fn check(order: &Order) -> Result<(), OrderError> {
    if order.customer.trim().is_empty() {
        return Err(OrderError::invalid("customer", "is required"));
    }
    if !order.price.is_finite() {
        return Err(OrderError::invalid("price", "must be a number"));
    }
    if order.price < 0.0 {
        return Err(OrderError::invalid("price", "must not be negative"));
    }
    if order.delivery.is_yes() {
        if order.delivery_address.trim().is_empty() {
            return Err(OrderError::invalid(
                "delivery_address",
                "is required for delivery",
            ));
        }
        if order.delivery_time.is_none() {
            return Err(OrderError::invalid("delivery_time", "is required for delivery"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Creator, Variety, YesNo};
    use chrono::NaiveDate;

    fn draft() -> OrderDraft {
        OrderDraft {
            order_number: 1,
            customer: "Ilse".into(),
            price: 80.0,
            variety: Variety::StrongLove,
            flower_quantity: 15,
            packaging: YesNo::No,
            delivery: YesNo::No,
            delivery_address: String::new(),
            delivery_time: None,
            status: OrderStatus::New,
            created_by: Creator::User,
        }
    }

    #[test]
    fn blank_customer_is_rejected() {
        let result = Order::from_draft(
            OrderId(1),
            OrderDraft {
                customer: "   ".into(),
                ..draft()
            },
        );
        assert!(matches!(
            result,
            Err(OrderError::Validation { field: "customer", .. })
        ));
    }

    #[test]
    fn negative_or_nan_price_is_rejected() {
        for price in [-0.5, f64::NAN, f64::INFINITY] {
            let result = Order::from_draft(OrderId(1), OrderDraft { price, ..draft() });
            assert!(matches!(
                result,
                Err(OrderError::Validation { field: "price", .. })
            ));
        }
    }

    #[test]
    fn delivery_needs_address_and_time() {
        let with_delivery = OrderDraft {
            delivery: YesNo::Yes,
            ..draft()
        };
        assert!(matches!(
            Order::from_draft(OrderId(1), with_delivery.clone()),
            Err(OrderError::Validation { field: "delivery_address", .. })
        ));

        let with_address = OrderDraft {
            delivery_address: "Kloosterstraat 3".into(),
            ..with_delivery
        };
        assert!(matches!(
            Order::from_draft(OrderId(1), with_address.clone()),
            Err(OrderError::Validation { field: "delivery_time", .. })
        ));

        let time = NaiveDate::from_ymd_opt(2024, 4, 12)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        let complete = OrderDraft {
            delivery_time: Some(time),
            ..with_address
        };
        assert!(Order::from_draft(OrderId(1), complete).is_ok());
    }

    #[tokio::test]
    async fn mark_done_reports_whether_it_changed_anything() {
        let mut order = Order::from_draft(OrderId(1), draft()).unwrap();

        let first = order.handle_action(OrderAction::MarkDone, &()).await.unwrap();
        assert_eq!(first, OrderActionResult::MarkDone(true));
        assert_eq!(order.status, OrderStatus::Done);

        let second = order.handle_action(OrderAction::MarkDone, &()).await.unwrap();
        assert_eq!(second, OrderActionResult::MarkDone(false));
    }

    #[tokio::test]
    async fn update_is_rechecked() {
        let mut order = Order::from_draft(OrderId(1), draft()).unwrap();
        let result = order
            .on_update(
                OrderPatch {
                    delivery: Some(YesNo::Yes),
                    ..OrderPatch::default()
                },
                &(),
            )
            .await;
        assert!(result.is_err());
    }
}

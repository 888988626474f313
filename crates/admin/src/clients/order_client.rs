//! # Order Client
//!
//! High-level API for the Order collection. Wraps a `CollectionClient<Order>` and turns
//! store errors back into [`OrderError`].
use crate::model::{Order, OrderDraft, OrderId, OrderPatch};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use tracing::{debug, instrument};
use tulipa_store::{CollectionClient, DocumentClient, StoreError};

#[derive(Clone)]
pub struct OrderClient {
    inner: CollectionClient<Order>,
}

impl OrderClient {
    pub fn new(inner: CollectionClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, draft), fields(order_number = draft.order_number))]
    pub async fn create_order(&self, draft: OrderDraft) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        self.inner.create(draft).await.map_err(Self::map_error)
    }

    /// Applies a patch and returns the stored result.
    #[instrument(skip(self))]
    pub async fn update_order(&self, id: OrderId, patch: OrderPatch) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(Self::map_error)
    }

    /// Sets the order's status to Done. Returns `false` if it already was.
    #[instrument(skip(self))]
    pub async fn mark_done(&self, id: OrderId) -> Result<bool, OrderError> {
        debug!("Marking order done");
        match self
            .inner
            .perform_action(id, OrderAction::MarkDone)
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::MarkDone(changed) => Ok(changed),
        }
    }
}

#[async_trait]
impl DocumentClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &CollectionClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        OrderError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tulipa_store::mock::{create_mock_client, expect_action, expect_update};

    #[tokio::test]
    async fn mark_done_sends_the_action() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let orders = OrderClient::new(client);

        let task = tokio::spawn(async move { orders.mark_done(OrderId(3)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, OrderId(3));
        assert_eq!(action, OrderAction::MarkDone);
        responder.send(Ok(OrderActionResult::MarkDone(true))).unwrap();

        assert!(task.await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn rejected_patch_comes_back_as_order_error() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let orders = OrderClient::new(client);

        let task = tokio::spawn(async move {
            orders
                .update_order(
                    OrderId(1),
                    OrderPatch {
                        customer: Some(String::new()),
                        ..OrderPatch::default()
                    },
                )
                .await
        });

        let (id, patch, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, OrderId(1));
        assert_eq!(patch.customer.as_deref(), Some(""));
        responder
            .send(Err(StoreError::Rejected(Box::new(OrderError::Validation {
                field: "customer",
                reason: "is required".into(),
            }))))
            .unwrap();

        assert!(matches!(
            task.await.unwrap(),
            Err(OrderError::Validation { field: "customer", .. })
        ));
    }

    #[tokio::test]
    async fn missing_order_is_not_found() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let orders = OrderClient::new(client);

        let task = tokio::spawn(async move { orders.mark_done(OrderId(9)).await });

        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        responder
            .send(Err(StoreError::NotFound("order_9".into())))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(OrderError::NotFound("order_9".into()))
        );
    }
}

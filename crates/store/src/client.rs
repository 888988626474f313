//! # Collection Client
//!
//! The caller's side of a collection.

use crate::document::Document;
use crate::error::StoreError;
use crate::message::StoreRequest;
use tokio::sync::{mpsc, oneshot, watch};

/// A typed handle to a [`CollectionActor`](crate::CollectionActor).
///
/// Holds only the request sender, so cloning is cheap and clones can be moved into other
/// tasks. The collection shuts down once every clone is dropped.
#[derive(Clone)]
pub struct CollectionClient<T: Document> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: Document> CollectionClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn call<R>(
        &self,
        request: impl FnOnce(oneshot::Sender<Result<R, StoreError>>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    pub async fn create(&self, draft: T::Draft) -> Result<T::Id, StoreError> {
        self.call(|respond_to| StoreRequest::Create { draft, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.call(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    /// Full snapshot of the collection, in creation order.
    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        self.call(|respond_to| StoreRequest::List { respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, StoreError> {
        self.call(|respond_to| StoreRequest::Update {
            id,
            patch,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        self.call(|respond_to| StoreRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, StoreError> {
        self.call(|respond_to| StoreRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    /// Live feed of full snapshots. Drop the receiver to unsubscribe.
    pub async fn subscribe(&self) -> Result<watch::Receiver<Vec<T>>, StoreError> {
        self.call(|respond_to| StoreRequest::Subscribe { respond_to })
            .await
    }
}

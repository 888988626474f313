//! # DocumentClient Trait
//!
//! Shared read/delete/subscribe operations for typed domain clients built on a
//! [`CollectionClient`]. A domain client supplies its inner client and an error mapping and
//! inherits the rest.
use crate::{CollectionClient, Document, StoreError};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for domain clients that wrap a [`CollectionClient`].
///
/// ```rust,ignore
/// #[async_trait]
/// impl DocumentClient<Order> for OrderClient {
///     type Error = OrderError;
///
///     fn inner(&self) -> &CollectionClient<Order> {
///         &self.inner
///     }
///
///     fn map_error(e: StoreError) -> Self::Error {
///         OrderError::from(e)
///     }
/// }
///
/// // get(), list(), delete() and subscribe() now come for free
/// let orders = order_client.list().await?;
/// ```
#[async_trait]
pub trait DocumentClient<T: Document>: Send + Sync {
    /// The domain error type.
    type Error: Send + Sync;

    /// The wrapped generic client.
    fn inner(&self) -> &CollectionClient<T>;

    /// Maps store errors to the domain error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetches a document by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetches the full collection.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Deletes a document by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Subscribes to full-collection snapshots.
    #[tracing::instrument(skip(self))]
    async fn subscribe(&self) -> Result<watch::Receiver<Vec<T>>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().subscribe().await.map_err(Self::map_error)
    }
}

//! # Collection Actor
//!
//! The server side of a collection. It owns the records, processes requests one at a time and
//! republishes the full snapshot after every committed mutation.

use crate::client::CollectionClient;
use crate::document::Document;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::BTreeMap;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// Owns one collection of documents.
///
/// **Concurrency Model**:
/// The actor drains its request channel sequentially inside a single task, so the `store`
/// needs no `Mutex`. Ordering between *different* requests of one client is preserved;
/// nothing ties a `List` to a later `Create`, so read-then-write sequences from two clients
/// can interleave.
///
/// # Usage Pattern
///
/// 1. **Create**: `CollectionActor::new()` returns the actor and its client.
/// 2. **Wire**: pass the document's dependencies into `actor.run(context)`.
/// 3. **Run**: spawn the returned future.
///
/// ```rust,ignore
/// let (actor, client) = CollectionActor::<Order>::new(32);
/// tokio::spawn(actor.run(()));
/// let id = client.create(draft).await?;
/// ```
///
/// # Implementation Details
///
/// * Records live in a `BTreeMap` keyed by id, so [`StoreRequest::List`] returns them in
///   creation order.
/// * Ids come from a `u32` counter starting at 1 and are never reused.
/// * Update and Action run against a clone; the clone replaces the stored record only when
///   the hook succeeds.
/// * The live feed is a `watch` channel holding the last published snapshot.
pub struct CollectionActor<T: Document> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
    feed: watch::Sender<Vec<T>>,
}

impl<T: Document> CollectionActor<T> {
    /// Creates a `CollectionActor` and its `CollectionClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - capacity of the request channel. When it is full, client calls wait.
    pub fn new(buffer_size: usize) -> (Self, CollectionClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (feed, _) = watch::channel(Vec::new());
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
            feed,
        };
        (actor, CollectionClient::new(sender))
    }

    fn publish(&self) {
        self.feed.send_replace(self.store.values().cloned().collect());
    }

    /// Runs the request loop until every client has been dropped.
    ///
    /// # Context Injection
    /// `context` is passed into every document hook. Dependencies created after the actor
    /// (other collections' clients, for instance) can therefore still be wired in here.
    pub async fn run(mut self, context: T::Context) {
        // "Order" rather than "tulipa_admin::model::order::Order"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Collection started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { draft, respond_to } => {
                    debug!(entity_type, ?draft, "Create");
                    let id = T::Id::from(self.next_id);

                    let mut item = match T::from_draft(id.clone(), draft) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create rejected");
                            let _ = respond_to.send(Err(StoreError::Rejected(Box::new(e))));
                            continue;
                        }
                    };
                    if let Err(e) = item.on_create(&context).await {
                        warn!(entity_type, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(StoreError::Rejected(Box::new(e))));
                        continue;
                    }

                    // Only consume the id once the record is accepted.
                    self.next_id += 1;
                    self.store.insert(id.clone(), item);
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    self.publish();
                    let _ = respond_to.send(Ok(id));
                }
                StoreRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                StoreRequest::Update {
                    id,
                    patch,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?patch, "Update");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };

                    let mut candidate = current.clone();
                    if let Err(e) = candidate.on_update(patch, &context).await {
                        warn!(entity_type, %id, error = %e, "Update rejected");
                        let _ = respond_to.send(Err(StoreError::Rejected(Box::new(e))));
                        continue;
                    }
                    self.store.insert(id.clone(), candidate.clone());
                    info!(entity_type, %id, "Updated");
                    self.publish();
                    let _ = respond_to.send(Ok(candidate));
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };

                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(StoreError::Rejected(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    self.publish();
                    let _ = respond_to.send(Ok(()));
                }
                StoreRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };

                    let mut candidate = current.clone();
                    match candidate.handle_action(action, &context).await {
                        Ok(result) => {
                            self.store.insert(id.clone(), candidate);
                            info!(entity_type, %id, "Action ok");
                            self.publish();
                            let _ = respond_to.send(Ok(result));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            let _ = respond_to.send(Err(StoreError::Rejected(Box::new(e))));
                        }
                    }
                }
                StoreRequest::Subscribe { respond_to } => {
                    debug!(entity_type, subscribers = self.feed.receiver_count(), "Subscribe");
                    // The current snapshot counts as already seen by the new receiver.
                    let _ = respond_to.send(Ok(self.feed.subscribe()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

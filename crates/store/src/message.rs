//! # Requests
//!
//! The messages a [`CollectionClient`](crate::CollectionClient) sends to a
//! [`CollectionActor`](crate::CollectionActor). Each carries a oneshot sender for the reply.

use crate::document::Document;
use crate::error::StoreError;
use tokio::sync::{oneshot, watch};

/// One-shot reply channel used by every request.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// A request to a collection.
///
/// The variants cover what a document database offers a client: the CRUD set, a full
/// listing, a live subscription, and `Action` for record-specific operations that are not a
/// plain patch. The enum is generic over `T: Document`, so a draft or patch of one record type
/// cannot be sent to a collection of another.
#[derive(Debug)]
pub enum StoreRequest<T: Document> {
    Create {
        draft: T::Draft,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Subscribe {
        respond_to: Response<watch::Receiver<Vec<T>>>,
    },
}

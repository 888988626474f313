//! # Mock Store & Testing Guide
//!
//! [`MockStore<T>`] hands out a real [`CollectionClient<T>`] whose requests are answered from
//! scripted expectations instead of a running collection. Code under test cannot tell the
//! difference, which makes store failures trivial to inject.
//!
//! ## When to use Mocks vs a Real Collection
//!
//! | Feature | MockStore | CollectionActor |
//! |---------|-----------|-----------------|
//! | **State** | None, answers are scripted | Real records and live feed |
//! | **Determinism** | Fully deterministic | Subject to the scheduler |
//! | **Error Injection** | `return_err` | Only what documents reject |
//! | **Use Case** | Logic *around* a client | The collection itself, end-to-end flows |
//!
//! ## Fluent API
//!
//! ```rust,ignore
//! let mut mock = MockStore::<Order>::new();
//! mock.expect_list().return_ok(vec![]);
//! mock.expect_create().return_err(StoreError::Closed);
//!
//! let client = OrderClient::new(mock.client());
//! // exercise the code under test ...
//! mock.verify();
//! ```
//!
//! Expectations are consumed in order. A request that does not match the next expectation
//! panics inside the mock task; the caller then sees [`StoreError::Dropped`].
//!
//! ## Raw Helpers
//!
//! [`create_mock_client`] returns a client and the receiving end of its channel. The
//! `expect_*` functions pop the next request and return its payload together with the reply
//! sender, so a test can inspect what was sent and answer however it likes.

use crate::client::CollectionClient;
use crate::document::Document;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// A scripted answer for one request.
enum Expectation<T: Document> {
    Get {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    List {
        response: Result<Vec<T>, StoreError>,
    },
    Create {
        response: Result<T::Id, StoreError>,
    },
    Update {
        id: T::Id,
        response: Result<T, StoreError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), StoreError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, StoreError>,
    },
}

type Script<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A collection stand-in that replays expectations.
pub struct MockStore<T: Document> {
    client: CollectionClient<T>,
    expectations: Script<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Document> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Document> MockStore<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Script<T> = Arc::new(Mutex::new(VecDeque::new()));
        let script = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = script.lock().unwrap().pop_front();

                match (request, expectation) {
                    (StoreRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
                        assert_eq!(id, want, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: want, response }),
                    ) => {
                        assert_eq!(id, want, "update called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: want, response }),
                    ) => {
                        assert_eq!(id, want, "delete called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: want, response }),
                    ) => {
                        assert_eq!(id, want, "action called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: CollectionClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// The client to hand to the code under test.
    pub fn client(&self) -> CollectionClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Get { id, response })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::List { response })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Create { response })
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Update { id, response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Delete { id, response })
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Action { id, response })
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Finishes an expectation with the answer to give.
pub struct ExpectationBuilder<T: Document, R> {
    expectations: Script<T>,
    build: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T> + Send>,
}

impl<T: Document, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: &Script<T>,
        build: impl FnOnce(Result<R, StoreError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations: expectations.clone(),
            build: Box::new(build),
        }
    }

    pub fn return_ok(self, value: R) {
        let expectation = (self.build)(Ok(value));
        self.expectations.lock().unwrap().push_back(expectation);
    }

    pub fn return_err(self, error: StoreError) {
        let expectation = (self.build)(Err(error));
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// RAW HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
pub fn create_mock_client<T: Document>(
    buffer_size: usize,
) -> (CollectionClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CollectionClient::new(sender), receiver)
}

/// Next request, if it is a Create.
pub async fn expect_create<T: Document>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Draft, oneshot::Sender<Result<T::Id, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Create { draft, respond_to }) => Some((draft, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a Get.
pub async fn expect_get<T: Document>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a List.
pub async fn expect_list<T: Document>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, StoreError>>> {
    match receiver.recv().await {
        Some(StoreRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Next request, if it is an Update.
pub async fn expect_update<T: Document>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(T::Id, T::Patch, oneshot::Sender<Result<T, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Update {
            id,
            patch,
            respond_to,
        }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an Action.
pub async fn expect_action<T: Document>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

//! # Tulipa Store
//!
//! An in-process document store built on the **Actor Model**. Each collection of records is
//! owned by a single Tokio task and reached through a cloneable client, so the console code
//! talks to it exactly the way it would talk to a hosted document database: read the whole
//! collection, write one record, delete one record, watch for live changes.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Document Layer** ([`Document`]) - the record type and its lifecycle hooks
//! 2. **Runtime Layer** ([`CollectionActor`]) - sequential request processing and snapshot publishing
//! 3. **Interface Layer** ([`CollectionClient`]) - typed request/reply over channels
//!
//! Business rules live in the document's hooks; the actor handles ids, storage, the request
//! loop and the live feed.
//!
//! ## Live Snapshots
//!
//! Every committed mutation republishes the full collection on a `tokio::sync::watch` channel.
//! A subscriber gets a `watch::Receiver<Vec<T>>` and always sees the *latest* snapshot:
//!
//! ```rust,ignore
//! let mut feed = client.subscribe().await?;
//! while feed.changed().await.is_ok() {
//!     let orders = feed.borrow_and_update().clone();
//!     // recompute whatever depends on the full collection
//! }
//! ```
//!
//! Dropping the receiver unsubscribes. When the actor shuts down the sender is dropped and
//! `changed()` returns an error.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tulipa_store::{CollectionActor, Document};
//!
//! let (actor, client) = CollectionActor::<Note>::new(32);
//! tokio::spawn(actor.run(()));
//!
//! let id = client.create(NoteDraft { text: "hello".into() }).await?;
//! let all = client.list().await?;
//! ```
//!
//! ## Concurrency Model
//!
//! - Each collection runs in its own Tokio task
//! - Requests are processed **sequentially** within a collection (no locks on the store)
//! - Two clients can still read the same snapshot and then both write: a read followed by a
//!   write is two requests, not one
//!
//! ## Testing
//!
//! The [`mock`] module provides [`mock::MockStore`], which speaks the same request protocol
//! as a real collection but answers from scripted expectations.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod document;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::CollectionActor;
pub use client::CollectionClient;
pub use client_trait::DocumentClient;
pub use document::Document;
pub use error::StoreError;
pub use message::{Response, StoreRequest};

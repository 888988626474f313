//! # Order Actor
//!
//! The collection of [`Order`] records.
//!
//! ## Structure
//!
//! - [`entity`] - [`Document`](tulipa_store::Document) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`]
//! - [`new()`] - creates the actor and its client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, generic_client) = order_actor::new(32);
//! let orders = OrderClient::new(generic_client);
//! tokio::spawn(actor.run(()));
//!
//! let id = orders.create_order(draft).await?;
//! orders.mark_done(id).await?;
//! ```
//!
//! Records are checked on create and after every patch: customer present, price finite and
//! not negative, and address plus time when the order is delivered. Stock is not checked
//! here; that is the caller's job, against a snapshot, before it writes.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Order;
use tulipa_store::{CollectionActor, CollectionClient};

/// Creates the Order collection actor and its client.
pub fn new(buffer_size: usize) -> (CollectionActor<Order>, CollectionClient<Order>) {
    CollectionActor::new(buffer_size)
}

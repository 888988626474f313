//! Typed clients over the generic collection clients.

pub mod order_client;

pub use order_client::*;
pub use tulipa_store::DocumentClient;

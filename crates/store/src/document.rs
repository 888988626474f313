//! # Document Trait
//!
//! The `Document` trait is the contract a record type implements to be kept in a
//! [`CollectionActor`](crate::CollectionActor). It names the identifier, the create and
//! update payloads, custom actions, the injected context and the error type, and it provides
//! the lifecycle hooks the actor calls around every mutation.
//!
//! # Provided Methods (Hooks)
//! [`Document::on_create`] and [`Document::on_delete`] default to `Ok(())`. Implement them
//! only when a record needs to validate or react at those points.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A record type managed by a [`CollectionActor`](crate::CollectionActor).
///
/// # Async & Context
/// The hooks are `async` so a document can consult other collections while it is being
/// created or changed. The `Context` type is handed to [`CollectionActor::run`](crate::CollectionActor::run)
/// and passed by reference into every hook.
///
/// # Failed Hooks
/// A hook returning `Err` aborts the operation. For `on_update` and `handle_action` the
/// actor works on a copy of the stored record, so a failure leaves the stored record
/// exactly as it was.
#[async_trait]
pub trait Document: Clone + Send + Sync + 'static {
    /// Store-assigned identifier. Built from the actor's `u32` counter and ordered so that
    /// listings come back in creation order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for creating a record (the record without its identifier).
    type Draft: Send + Sync + Debug;

    /// Payload for a partial update.
    type Patch: Send + Sync + Debug;

    /// Record-specific operations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// What an [`Action`](Document::Action) returns.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected at run time. Use `()` when there are none.
    type Context: Send + Sync;

    /// The record's own error type, carried to callers inside
    /// [`StoreError::Rejected`](crate::StoreError::Rejected).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the record from its new identifier and the draft.
    /// Called synchronously before `on_create`.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Result<Self, Self::Error>;

    /// Called after `from_draft`, before the record is inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies a patch.
    async fn on_update(
        &mut self,
        patch: Self::Patch,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called before the record is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handles a custom action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

//! # Observability & Tracing
//!
//! Structured logging setup shared by every binary in the workspace.
//!
//! ## What Gets Traced
//!
//! - **Collection lifecycle**: start, shutdown and final size
//! - **Document operations**: Create, Get, List, Update, Delete, Action, Subscribe
//! - **Client calls**: `#[instrument]` spans on typed client and console methods
//! - **Failures**: rejected drafts and patches with the document id and reason
//!
//! ## Usage
//!
//! ```bash
//! # Operations and failures
//! RUST_LOG=info cargo run -p tulipa-admin
//!
//! # Full drafts and patches
//! RUST_LOG=debug cargo run -p tulipa-admin
//!
//! # Only the store
//! RUST_LOG=tulipa_store=debug cargo run -p tulipa-admin
//! ```
//!
//! With `RUST_LOG=info` a create that passes the stock check reads:
//!
//! ```text
//! INFO create_order: Reservation admitted variety=Circuit requested=40 remaining=260
//! INFO create_order: Created entity_type="Order" id=order_1 size=1
//! ```
//!
//! Entity fields use `%` (Display) for ids and `?` (Debug) for payloads, so drafts and
//! patches only show up at `debug`.

/// Installs the global `tracing` subscriber.
///
/// Reads the filter from `RUST_LOG`; module paths are hidden because every store event
/// already carries `entity_type`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

//! # System Lifecycle
//!
//! Starts, wires and stops the console's tasks.
//!
//! [`AdminSystem::new`] spawns the order collection and session restoration and hands back
//! the clients the pages use. [`AdminSystem::shutdown`] drops every client it holds, which
//! closes the collection's channel, and then awaits each task.
//!
//! ```rust,ignore
//! let system = AdminSystem::new(&ConsoleConfig::default())?;
//! system.auth.sign_in("desk@tulipa.test", "bloom").await?;
//! let id = system.console.create_order(form).await?;
//! system.shutdown().await?;
//! ```
//!
//! Clones handed out to other tasks keep the collection alive; shutdown only completes once
//! they are dropped too. Live stock monitors do not hold a client and close with the
//! collection.
//!
//! Logging is set up once per process with [`setup_tracing`]; `RUST_LOG` selects the level.

pub mod admin_system;

pub use admin_system::*;
pub use tulipa_store::tracing::setup_tracing;

//! # Tulipa Admin
//!
//! Back office for a tulip grower: operators sign in, enter customer orders, search and edit
//! them, track single orders and watch how much of each variety is still free.
//!
//! - [`model`]: orders and the variety catalogue
//! - [`ledger`]: per-variety capacity checks and the stock roll-up
//! - [`order_actor`] and [`clients`]: the order collection and its typed client
//! - [`auth`]: session state and route gating
//! - [`console`]: page operations built on the above
//! - [`config`] and [`lifecycle`]: loading settings and running the whole thing

pub mod auth;
pub mod clients;
pub mod config;
pub mod console;
pub mod ledger;
pub mod lifecycle;
pub mod model;
pub mod order_actor;

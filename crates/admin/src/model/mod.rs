//! Plain data: the order record, its payloads and the variety catalogue.

pub mod order;
pub mod variety;

pub use order::*;
pub use variety::*;

//! Async handles onto the kitchen actor.

pub mod kitchen_api;
pub mod kitchen_client;
pub mod mock;

pub use kitchen_api::*;
pub use kitchen_client::*;

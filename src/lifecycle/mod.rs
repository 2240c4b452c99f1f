//! Runtime orchestration and lifecycle management.
//!
//! - [`RestaurantSystem`] - Spawns the kitchen actor and shuts it down
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod restaurant_system;
pub mod tracing;

pub use restaurant_system::*;
pub use self::tracing::*;

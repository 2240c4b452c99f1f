//! Pure data structures shared by the manager, the kitchen actor and the views.

pub mod menu;
pub mod order;
pub mod report;

pub use menu::*;
pub use order::*;
pub use report::*;

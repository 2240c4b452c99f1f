//! Text-mode views for the three roles around the order board.
//!
//! - [`FrontDesk`]: takes a table and item selections, validates them and
//!   submits the order.
//! - [`KitchenView`]: lists what still has to be cooked.
//! - [`ReportView`]: shows revenue over delivered orders.
//!
//! The kitchen and report views are [`OrderObserver`](crate::manager::OrderObserver)s
//! and re-render whenever the board changes.

pub mod error;
pub mod front_desk;
pub mod kitchen;
pub mod report;

pub use error::*;
pub use front_desk::*;
pub use kitchen::*;
pub use report::*;

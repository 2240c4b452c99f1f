//! Error types for order entry.

use crate::kitchen_actor::KitchenError;
use thiserror::Error;

/// Errors that can occur while placing an order at the front desk.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The table number was left blank.
    #[error("Table number cannot be empty")]
    EmptyTable,

    /// No item had a quantity above zero.
    #[error("Select at least one item")]
    NoItems,

    /// The selection names an item that is not on the menu.
    #[error("Unknown menu item: {0}")]
    UnknownMenuItem(String),

    /// Too many units of one item in a single order.
    #[error("Quantity {quantity} for {item} exceeds the maximum of {max}")]
    QuantityOutOfRange { item: String, quantity: u32, max: u32 },

    /// The order was valid but could not reach the kitchen.
    #[error(transparent)]
    Kitchen(#[from] KitchenError),
}

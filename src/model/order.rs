//! Represents a table's order as it moves through the kitchen.
//!
//! # Lifecycle
//! An `Order` is built by the front desk with [`Order::new`] and handed to
//! [`OrderManager::submit`](crate::manager::OrderManager::submit), which
//! assigns its [`OrderId`]. From then on the manager owns it exclusively and
//! moves it forward: `Placed -> InPreparation -> Delivered`.

use crate::model::MenuItem;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
///
/// `OrderId(0)` marks an order that has not been submitted yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Where an order currently is in the kitchen workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Placed,
    InPreparation,
    Delivered,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::Placed => "Placed",
            OrderStatus::InPreparation => "In preparation",
            OrderStatus::Delivered => "Delivered",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub table_id: String,
    pub items: Vec<MenuItem>,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `table_id` - Table the order belongs to
    /// * `items` - Ordered items; repeated entries mean quantity
    ///
    /// # Notes
    /// The order starts as [`OrderStatus::Placed`], stamped with the current
    /// time. The `id` stays unassigned until the manager accepts the order.
    /// No validation happens here; the front desk checks its input first.
    pub fn new(table_id: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            id: OrderId::default(),
            table_id: table_id.into(),
            items,
            created_at: Utc::now(),
            status: OrderStatus::Placed,
        }
    }

    /// Sum of the prices of every item in the order.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(|item| item.price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_order_is_placed_and_unassigned() {
        let order = Order::new("5", vec![MenuItem::new("Burger", Decimal::new(10, 0))]);
        assert_eq!(order.status, OrderStatus::Placed);
        assert_eq!(order.id, OrderId(0));
        assert_eq!(order.table_id, "5");
    }

    #[test]
    fn total_counts_repeated_items() {
        let burger = MenuItem::new("Burger", Decimal::new(1000, 2));
        let soda = MenuItem::new("Soda", Decimal::new(500, 2));
        let order = Order::new("2", vec![burger.clone(), burger, soda]);
        assert_eq!(order.total(), Decimal::new(25, 0));
    }

    #[test]
    fn display_formats() {
        assert_eq!(OrderId(7).to_string(), "order_7");
        assert_eq!(OrderStatus::InPreparation.to_string(), "In preparation");
    }
}

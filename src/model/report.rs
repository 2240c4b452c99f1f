use crate::model::Order;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Revenue over delivered orders.
///
/// `sold_counts` maps an item name to how many times it appears across the
/// delivered orders' item lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueReport {
    pub total_revenue: Decimal,
    pub sold_counts: BTreeMap<String, u32>,
}

impl RevenueReport {
    /// Builds a report from scratch over the given orders.
    pub fn from_orders<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        let mut report = Self::default();
        for item in orders.into_iter().flat_map(|order| order.items.iter()) {
            report.total_revenue += item.price;
            *report.sold_counts.entry(item.name.clone()).or_insert(0) += 1;
        }
        report
    }

    pub fn count_of(&self, name: &str) -> u32 {
        self.sold_counts.get(name).copied().unwrap_or(0)
    }

    pub fn items_sold(&self) -> u32 {
        self.sold_counts.values().sum()
    }
}

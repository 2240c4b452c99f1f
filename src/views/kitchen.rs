use crate::manager::{OrderManager, OrderObserver};
use crate::model::Order;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// Kitchen display: one line per order still to be cooked.
///
/// Pending orders come first, then orders in preparation, each in queue
/// order. Delivered orders are not shown.
#[derive(Debug, Default)]
pub struct KitchenView {
    lines: Mutex<Vec<String>>,
    refreshes: AtomicUsize,
}

impl KitchenView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn render(&self) -> String {
        self.lines().join("\n")
    }

    /// How many times the board has asked this view to refresh.
    pub fn refreshes(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }
}

fn line(order: &Order) -> String {
    format!("Table {} - {}", order.table_id, order.status)
}

impl OrderObserver for KitchenView {
    fn on_orders_changed(&self, board: &OrderManager) {
        let lines: Vec<String> = board.pending().chain(board.in_preparation()).map(line).collect();
        *self.lines.lock().unwrap_or_else(PoisonError::into_inner) = lines;
        self.refreshes.fetch_add(1, Ordering::SeqCst);
    }
}

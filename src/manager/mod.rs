//! # Order Manager
//!
//! The synchronous core of the order board. [`OrderManager`] owns every
//! submitted [`Order`] and moves it through three queues:
//!
//! ```text
//! submit ──► pending ──advance──► in_preparation ──complete──► delivered
//!            (FIFO)               (FIFO)                      (append-only)
//! ```
//!
//! Every operation is total: transitions on an empty queue are no-ops, and
//! nothing here returns an error. Observers registered with
//! [`OrderManager::register_observer`] are notified after every call that may
//! change the board.
//!
//! The manager is not shared across threads by itself. Concurrent callers go
//! through the [`kitchen_actor`](crate::kitchen_actor), which owns one
//! manager and applies requests one at a time.

pub mod observer;

pub use observer::*;

use crate::model::{Order, OrderId, OrderStatus, RevenueReport};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Arc, Weak};
use tracing::{debug, info};

/// Owned copy of the three queues at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub pending: Vec<Order>,
    pub in_preparation: Vec<Order>,
    pub delivered: Vec<Order>,
}

impl BoardSnapshot {
    /// Total number of orders across all queues.
    pub fn len(&self) -> usize {
        self.pending.len() + self.in_preparation.len() + self.delivered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct OrderManager {
    pending: VecDeque<Order>,
    in_preparation: VecDeque<Order>,
    delivered: Vec<Order>,
    observers: Vec<Weak<dyn OrderObserver>>,
    next_id: u64,
}

impl OrderManager {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            in_preparation: VecDeque::new(),
            delivered: Vec::new(),
            observers: Vec::new(),
            next_id: 1,
        }
    }

    /// Accepts an order into the tail of the pending queue.
    ///
    /// The order is trusted as-is; the manager only assigns its id and keeps
    /// its status at [`OrderStatus::Placed`].
    pub fn submit(&mut self, mut order: Order) -> OrderId {
        let id = OrderId(self.next_id);
        self.next_id += 1;

        order.id = id;
        order.status = OrderStatus::Placed;
        info!(
            order_id = %id,
            table = %order.table_id,
            items = order.items.len(),
            "Order submitted"
        );
        self.pending.push_back(order);

        self.notify_all();
        id
    }

    /// Moves the oldest pending order into preparation.
    ///
    /// Returns the id of the order that moved, or `None` when nothing was
    /// pending. Observers are notified either way.
    pub fn advance_to_preparation(&mut self) -> Option<OrderId> {
        let moved = match self.pending.pop_front() {
            Some(mut order) => {
                order.status = OrderStatus::InPreparation;
                let id = order.id;
                info!(order_id = %id, table = %order.table_id, "Preparation started");
                self.in_preparation.push_back(order);
                Some(id)
            }
            None => {
                debug!("No pending order to prepare");
                None
            }
        };

        self.notify_all();
        moved
    }

    /// Moves the oldest order in preparation to the delivered list.
    ///
    /// Returns the id of the order that moved, or `None` when nothing was in
    /// preparation. Observers are notified either way.
    pub fn complete_preparation(&mut self) -> Option<OrderId> {
        let moved = match self.in_preparation.pop_front() {
            Some(mut order) => {
                order.status = OrderStatus::Delivered;
                let id = order.id;
                info!(
                    order_id = %id,
                    table = %order.table_id,
                    total = %order.total(),
                    "Order delivered"
                );
                self.delivered.push(order);
                Some(id)
            }
            None => {
                debug!("No order in preparation to complete");
                None
            }
        };

        self.notify_all();
        moved
    }

    /// Revenue and per-item counts over every delivered order.
    ///
    /// Recomputed from the full delivered history on each call; nothing is
    /// cached.
    pub fn revenue_report(&self) -> RevenueReport {
        RevenueReport::from_orders(&self.delivered)
    }

    /// Registers an observer to be notified after every change.
    ///
    /// Only a weak handle is kept: the caller owns the observer, and one that
    /// has been dropped is silently skipped. There is no unregister.
    pub fn register_observer<O: OrderObserver + 'static>(&mut self, observer: &Arc<O>) {
        let observer: Arc<dyn OrderObserver> = observer.clone();
        self.register_shared(Arc::downgrade(&observer));
    }

    /// Registers an already type-erased observer handle.
    pub fn register_shared(&mut self, observer: Weak<dyn OrderObserver>) {
        self.observers.push(observer);
        debug!(observers = self.observers.len(), "Observer registered");
    }

    /// Calls every live observer, in registration order.
    pub fn notify_all(&self) {
        for observer in self.observers.iter().filter_map(Weak::upgrade) {
            observer.on_orders_changed(self);
        }
    }

    pub fn pending(&self) -> impl ExactSizeIterator<Item = &Order> {
        self.pending.iter()
    }

    pub fn in_preparation(&self) -> impl ExactSizeIterator<Item = &Order> {
        self.in_preparation.iter()
    }

    pub fn delivered(&self) -> &[Order] {
        &self.delivered
    }

    /// Number of registered observers that are still alive.
    pub fn observer_count(&self) -> usize {
        self.observers.iter().filter(|o| o.strong_count() > 0).count()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            pending: self.pending.iter().cloned().collect(),
            in_preparation: self.in_preparation.iter().cloned().collect(),
            delivered: self.delivered.clone(),
        }
    }
}

impl Default for OrderManager {
    fn default() -> Self {
        Self::new()
    }
}

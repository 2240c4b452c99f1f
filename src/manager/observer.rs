//! Change notification for collaborators that display the order board.

use crate::manager::OrderManager;

/// Anything that wants to be refreshed after the order board changes.
///
/// The manager calls [`on_orders_changed`](OrderObserver::on_orders_changed)
/// synchronously after every mutation, including transitions that found an
/// empty queue. The callback gets a read-only view of the manager and is
/// expected to re-read whatever it displays from there.
///
/// Implementations keep their own state behind interior mutability, since
/// they are shared (`&self`) and may live on the kitchen actor's task.
pub trait OrderObserver: Send + Sync {
    fn on_orders_changed(&self, board: &OrderManager);
}

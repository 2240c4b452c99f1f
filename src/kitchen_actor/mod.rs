//! Actor that serialises access to a single [`OrderManager`](crate::manager::OrderManager).

pub mod actor;
pub mod error;

pub use actor::*;
pub use error::*;

use crate::clients::KitchenClient;
use crate::manager::OrderManager;
use tokio::sync::mpsc;

/// Creates a new Kitchen actor and its client.
///
/// The actor is not started; spawn [`KitchenActor::run`] on a runtime.
pub fn new(buffer_size: usize) -> (KitchenActor, KitchenClient) {
    with_manager(buffer_size, OrderManager::new())
}

/// Creates a Kitchen actor around an existing manager, e.g. one with
/// observers already registered.
pub fn with_manager(buffer_size: usize, manager: OrderManager) -> (KitchenActor, KitchenClient) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let actor = KitchenActor::new(receiver, manager);
    let client = KitchenClient::new(sender);

    (actor, client)
}

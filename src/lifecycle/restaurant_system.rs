use crate::clients::KitchenClient;
use crate::config::RestaurantConfig;
use crate::kitchen_actor::KitchenError;
use crate::manager::OrderManager;
use crate::model::Menu;
use tracing::{error, info};

/// The runtime orchestrator for the order board.
///
/// `RestaurantSystem` is responsible for:
/// - **Lifecycle Management**: starting the kitchen actor and stopping it
/// - **Wiring**: handing out the kitchen client and the configured menu
///
/// # Example
///
/// ```ignore
/// let system = RestaurantSystem::new(RestaurantConfig::default());
///
/// let desk = FrontDesk::new(system.menu.clone(), system.kitchen.clone());
/// desk.place_order("5", &[("Burger", 1)]).await?;
/// system.kitchen.advance_to_preparation().await?;
///
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    /// Client for interacting with the Kitchen actor
    pub kitchen: KitchenClient,

    /// Menu offered at the front desk
    pub menu: Menu,

    /// Task handle for the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<OrderManager>,
}

impl RestaurantSystem {
    /// Creates the kitchen actor and spawns it on the current runtime.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: RestaurantConfig) -> Self {
        Self::with_manager(config, OrderManager::new())
    }

    /// Like [`new`](Self::new), around a manager prepared by the caller.
    pub fn with_manager(config: RestaurantConfig, manager: OrderManager) -> Self {
        let (actor, kitchen) = crate::kitchen_actor::with_manager(config.channel_capacity, manager);
        let handle = tokio::spawn(actor.run());

        Self {
            kitchen,
            menu: config.menu,
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops this system's client and waits for the actor to drain its
    /// queue. Clones of the client still held elsewhere keep the actor alive,
    /// so drop them first.
    ///
    /// # Returns
    ///
    /// The final state of the order board, or
    /// [`KitchenError::TaskFailed`] if the actor task panicked.
    pub async fn shutdown(self) -> Result<OrderManager, KitchenError> {
        info!("Shutting down system...");

        // Closing the channel ends the actor's receive loop.
        drop(self.kitchen);

        match self.handle.await {
            Ok(manager) => {
                info!("System shutdown complete.");
                Ok(manager)
            }
            Err(e) => {
                error!("Actor task failed: {:?}", e);
                Err(KitchenError::TaskFailed(e.to_string()))
            }
        }
    }
}

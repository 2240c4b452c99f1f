//! # Kitchen Actor
//!
//! Wraps one [`OrderManager`] in a Tokio task so it can be driven from any
//! number of tasks at once.
//!
//! ## Key Types
//!
//! - [`KitchenRequest`]: The messages the actor understands.
//! - [`KitchenActor`]: The server half, owning the manager and the receiver.
//! - [`KitchenClient`](crate::clients::KitchenClient): The cloneable sender half.

use crate::manager::{BoardSnapshot, OrderManager, OrderObserver};
use crate::model::{Order, OrderId, RevenueReport};
use std::fmt;
use std::sync::Weak;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<T>;

/// Message sent to the actor, one variant per manager operation.
pub enum KitchenRequest {
    Submit {
        order: Order,
        respond_to: Response<OrderId>,
    },
    AdvanceToPreparation {
        respond_to: Response<Option<OrderId>>,
    },
    CompletePreparation {
        respond_to: Response<Option<OrderId>>,
    },
    RevenueReport {
        respond_to: Response<RevenueReport>,
    },
    Snapshot {
        respond_to: Response<BoardSnapshot>,
    },
    RegisterObserver {
        observer: Weak<dyn OrderObserver>,
        respond_to: Response<()>,
    },
}

impl fmt::Debug for KitchenRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KitchenRequest::Submit { order, .. } => {
                f.debug_struct("Submit").field("order", order).finish()
            }
            KitchenRequest::AdvanceToPreparation { .. } => f.write_str("AdvanceToPreparation"),
            KitchenRequest::CompletePreparation { .. } => f.write_str("CompletePreparation"),
            KitchenRequest::RevenueReport { .. } => f.write_str("RevenueReport"),
            KitchenRequest::Snapshot { .. } => f.write_str("Snapshot"),
            KitchenRequest::RegisterObserver { .. } => f.write_str("RegisterObserver"),
        }
    }
}

/// The actor that owns the order board.
///
/// # Concurrency Model
/// Requests are processed *sequentially* in [`run`](KitchenActor::run), so the
/// message loop is the only critical section the board needs. Clients on
/// other tasks never touch the manager directly, and observers are called
/// from inside the loop.
pub struct KitchenActor {
    receiver: mpsc::Receiver<KitchenRequest>,
    manager: OrderManager,
}

impl KitchenActor {
    pub fn new(receiver: mpsc::Receiver<KitchenRequest>, manager: OrderManager) -> Self {
        Self { receiver, manager }
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// Returns the manager so callers can inspect the final board.
    pub async fn run(mut self) -> OrderManager {
        info!("Kitchen actor started");

        while let Some(msg) = self.receiver.recv().await {
            debug!(request = ?msg, "Request");
            match msg {
                KitchenRequest::Submit { order, respond_to } => {
                    let id = self.manager.submit(order);
                    let _ = respond_to.send(id);
                }
                KitchenRequest::AdvanceToPreparation { respond_to } => {
                    let moved = self.manager.advance_to_preparation();
                    let _ = respond_to.send(moved);
                }
                KitchenRequest::CompletePreparation { respond_to } => {
                    let moved = self.manager.complete_preparation();
                    let _ = respond_to.send(moved);
                }
                KitchenRequest::RevenueReport { respond_to } => {
                    let _ = respond_to.send(self.manager.revenue_report());
                }
                KitchenRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(self.manager.snapshot());
                }
                KitchenRequest::RegisterObserver { observer, respond_to } => {
                    self.manager.register_shared(observer);
                    let _ = respond_to.send(());
                }
            }
        }

        info!(
            pending = self.manager.pending().len(),
            in_preparation = self.manager.in_preparation().len(),
            delivered = self.manager.delivered().len(),
            "Kitchen actor shutdown"
        );
        self.manager
    }
}

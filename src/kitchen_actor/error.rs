//! Error types for the Kitchen actor.

use thiserror::Error;

/// Errors that can occur while talking to the kitchen actor.
///
/// The order board itself never fails; these only describe the plumbing
/// around it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum KitchenError {
    /// The actor has stopped and no longer accepts requests.
    #[error("Kitchen actor closed")]
    ActorClosed,

    /// The actor dropped the response channel before answering.
    #[error("Kitchen actor dropped response channel")]
    ActorDropped,

    /// The actor task panicked or was cancelled.
    #[error("Kitchen actor task failed: {0}")]
    TaskFailed(String),
}

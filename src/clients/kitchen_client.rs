use crate::clients::KitchenApi;
use crate::kitchen_actor::{KitchenError, KitchenRequest};
use crate::manager::{BoardSnapshot, OrderObserver};
use crate::model::{Order, OrderId, RevenueReport};
use async_trait::async_trait;
use std::sync::{Arc, Weak};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for interacting with the Kitchen actor.
///
/// Cheap to clone; every clone talks to the same actor. The actor stops once
/// the last client is dropped.
#[derive(Clone)]
pub struct KitchenClient {
    sender: mpsc::Sender<KitchenRequest>,
}

impl KitchenClient {
    pub fn new(sender: mpsc::Sender<KitchenRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> KitchenRequest,
    ) -> Result<T, KitchenError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| KitchenError::ActorClosed)?;
        response.await.map_err(|_| KitchenError::ActorDropped)
    }

    #[instrument(skip(self, order), fields(table = %order.table_id))]
    pub async fn submit(&self, order: Order) -> Result<OrderId, KitchenError> {
        debug!(?order, "submit called");
        self.request(|respond_to| KitchenRequest::Submit { order, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn advance_to_preparation(&self) -> Result<Option<OrderId>, KitchenError> {
        debug!("Sending request");
        self.request(|respond_to| KitchenRequest::AdvanceToPreparation { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn complete_preparation(&self) -> Result<Option<OrderId>, KitchenError> {
        debug!("Sending request");
        self.request(|respond_to| KitchenRequest::CompletePreparation { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn revenue_report(&self) -> Result<RevenueReport, KitchenError> {
        self.request(|respond_to| KitchenRequest::RevenueReport { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<BoardSnapshot, KitchenError> {
        self.request(|respond_to| KitchenRequest::Snapshot { respond_to })
            .await
    }

    /// Registers an observer with the actor's manager.
    ///
    /// Only a weak handle crosses the channel; the caller keeps ownership.
    #[instrument(skip(self, observer))]
    pub async fn register_observer<O: OrderObserver + 'static>(
        &self,
        observer: &Arc<O>,
    ) -> Result<(), KitchenError> {
        let observer: Arc<dyn OrderObserver> = observer.clone();
        let observer: Weak<dyn OrderObserver> = Arc::downgrade(&observer);
        self.request(|respond_to| KitchenRequest::RegisterObserver { observer, respond_to })
            .await
    }
}

#[async_trait]
impl KitchenApi for KitchenClient {
    async fn submit(&self, order: Order) -> Result<OrderId, KitchenError> {
        KitchenClient::submit(self, order).await
    }

    async fn advance_to_preparation(&self) -> Result<Option<OrderId>, KitchenError> {
        KitchenClient::advance_to_preparation(self).await
    }

    async fn complete_preparation(&self) -> Result<Option<OrderId>, KitchenError> {
        KitchenClient::complete_preparation(self).await
    }

    async fn revenue_report(&self) -> Result<RevenueReport, KitchenError> {
        KitchenClient::revenue_report(self).await
    }

    async fn snapshot(&self) -> Result<BoardSnapshot, KitchenError> {
        KitchenClient::snapshot(self).await
    }
}

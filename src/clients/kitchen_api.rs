use crate::kitchen_actor::KitchenError;
use crate::manager::BoardSnapshot;
use crate::model::{Order, OrderId, RevenueReport};
use async_trait::async_trait;

/// The order-board operations a view needs, independent of how they are
/// delivered.
///
/// [`KitchenClient`](crate::clients::KitchenClient) implements this over the
/// actor channel; [`MockKitchen`](crate::clients::mock::MockKitchen) implements
/// it from a queue of expectations so views can be tested without a runtime
/// actor.
#[async_trait]
pub trait KitchenApi: Send + Sync {
    async fn submit(&self, order: Order) -> Result<OrderId, KitchenError>;

    async fn advance_to_preparation(&self) -> Result<Option<OrderId>, KitchenError>;

    async fn complete_preparation(&self) -> Result<Option<OrderId>, KitchenError>;

    async fn revenue_report(&self) -> Result<RevenueReport, KitchenError>;

    async fn snapshot(&self) -> Result<BoardSnapshot, KitchenError>;
}

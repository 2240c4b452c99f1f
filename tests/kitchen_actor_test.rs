use restaurant_orders::manager::OrderManager;
use restaurant_orders::model::{MenuItem, Order};
use restaurant_orders::views::{KitchenView, ReportView};
use rust_decimal::Decimal;
use std::sync::Arc;

fn burger() -> MenuItem {
    MenuItem::new("Burger", Decimal::new(1000, 2))
}

/// Observers registered on the manager before it is handed to the actor keep
/// working inside the actor task.
#[tokio::test]
async fn test_actor_with_preregistered_observers() {
    let kitchen_view = Arc::new(KitchenView::new());
    let report_view = Arc::new(ReportView::new());
    let mut manager = OrderManager::new();
    manager.register_observer(&kitchen_view);
    manager.register_observer(&report_view);

    let (actor, client) = restaurant_orders::kitchen_actor::with_manager(4, manager);
    let handle = tokio::spawn(actor.run());

    client.submit(Order::new("1", vec![burger()])).await.unwrap();
    client.submit(Order::new("2", vec![burger(), burger()])).await.unwrap();
    client.advance_to_preparation().await.unwrap();

    assert_eq!(
        kitchen_view.lines(),
        vec!["Table 2 - Placed".to_string(), "Table 1 - In preparation".to_string()]
    );

    client.complete_preparation().await.unwrap();
    assert_eq!(report_view.lines()[0], "Total revenue: $10.00");

    drop(client);
    let manager = handle.await.unwrap();
    assert_eq!(manager.pending().len(), 1);
    assert_eq!(manager.observer_count(), 2);
}

/// Requests from one client are applied in the order they were sent.
#[tokio::test]
async fn test_requests_are_serialised_per_client() {
    let (actor, client) = restaurant_orders::kitchen_actor::new(1);
    let handle = tokio::spawn(actor.run());

    let mut ids = Vec::new();
    for table in ["a", "b", "c"] {
        ids.push(client.submit(Order::new(table, vec![burger()])).await.unwrap());
    }
    for expected in &ids {
        assert_eq!(client.advance_to_preparation().await.unwrap(), Some(*expected));
    }
    assert_eq!(client.advance_to_preparation().await.unwrap(), None);

    drop(client);
    handle.await.unwrap();
}

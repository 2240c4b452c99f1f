use restaurant_orders::config::RestaurantConfig;
use restaurant_orders::lifecycle::RestaurantSystem;
use restaurant_orders::model::{MenuItem, Order, OrderStatus};
use restaurant_orders::views::{FrontDesk, KitchenView, OrderError, ReportView};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::Arc;

/// Full end-to-end run: front desk, kitchen transitions, report.
#[tokio::test]
async fn test_full_service_integration() {
    let system = RestaurantSystem::new(RestaurantConfig::default());

    let kitchen_view = Arc::new(KitchenView::new());
    let report_view = Arc::new(ReportView::new());
    system.kitchen.register_observer(&kitchen_view).await.unwrap();
    system.kitchen.register_observer(&report_view).await.unwrap();

    let desk = FrontDesk::new(system.menu.clone(), system.kitchen.clone());
    let id = desk
        .place_order("5", &[("Burger", 1), ("Soda", 1)])
        .await
        .expect("Failed to place order");

    let snapshot = system.kitchen.snapshot().await.unwrap();
    assert_eq!(snapshot.pending.len(), 1);
    assert_eq!(snapshot.pending[0].id, id);
    assert_eq!(kitchen_view.lines(), vec!["Table 5 - Placed".to_string()]);

    assert_eq!(system.kitchen.advance_to_preparation().await.unwrap(), Some(id));
    let snapshot = system.kitchen.snapshot().await.unwrap();
    assert!(snapshot.pending.is_empty());
    assert_eq!(snapshot.in_preparation[0].status, OrderStatus::InPreparation);
    assert_eq!(kitchen_view.lines(), vec!["Table 5 - In preparation".to_string()]);

    assert_eq!(system.kitchen.complete_preparation().await.unwrap(), Some(id));
    let snapshot = system.kitchen.snapshot().await.unwrap();
    assert!(snapshot.in_preparation.is_empty());
    assert_eq!(snapshot.delivered[0].status, OrderStatus::Delivered);
    assert!(kitchen_view.lines().is_empty());

    let report = system.kitchen.revenue_report().await.unwrap();
    assert_eq!(report.total_revenue, Decimal::new(1500, 2));
    assert_eq!(report.count_of("Burger"), 1);
    assert_eq!(report.count_of("Soda"), 1);
    assert_eq!(report.items_sold(), 2);
    assert_eq!(report_view.report(), report);

    // Rejected input never reaches the board.
    let rejected = desk.place_order("", &[("Burger", 1)]).await;
    assert_eq!(rejected, Err(OrderError::EmptyTable));
    assert_eq!(system.kitchen.snapshot().await.unwrap().len(), 1);

    drop(desk);
    let board = system.shutdown().await.expect("Failed to shutdown system");
    assert_eq!(board.delivered().len(), 1);
}

/// Completing with nothing in preparation changes nothing but still refreshes views.
#[tokio::test]
async fn test_noop_transition_still_notifies() {
    let system = RestaurantSystem::new(RestaurantConfig::default());
    let kitchen_view = Arc::new(KitchenView::new());
    system.kitchen.register_observer(&kitchen_view).await.unwrap();

    let order = Order::new("1", vec![MenuItem::new("Soda", Decimal::new(5, 0))]);
    system.kitchen.submit(order).await.unwrap();
    let before = system.kitchen.snapshot().await.unwrap();

    assert_eq!(system.kitchen.complete_preparation().await.unwrap(), None);

    assert_eq!(system.kitchen.snapshot().await.unwrap(), before);
    assert_eq!(kitchen_view.refreshes(), 2);

    system.shutdown().await.unwrap();
}

/// Many tasks submitting and advancing at once still leave a consistent board.
#[tokio::test]
async fn test_concurrent_submissions() {
    let system = RestaurantSystem::new(RestaurantConfig::default());
    let desk = Arc::new(FrontDesk::new(system.menu.clone(), system.kitchen.clone()));

    let mut handles = vec![];
    for table in 1..=20 {
        let desk = desk.clone();
        handles.push(tokio::spawn(async move {
            desk.place_order(&table.to_string(), &[("Pizza", 1)]).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().expect("Order should be accepted");
    }

    let mut handles = vec![];
    for _ in 0..10 {
        let kitchen = system.kitchen.clone();
        handles.push(tokio::spawn(async move {
            kitchen.advance_to_preparation().await.unwrap();
            kitchen.complete_preparation().await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let snapshot = system.kitchen.snapshot().await.unwrap();
    assert_eq!(snapshot.len(), 20);
    assert_eq!(snapshot.pending.len(), 10);
    assert!(snapshot.pending.iter().all(|o| o.status == OrderStatus::Placed));
    assert!(snapshot.in_preparation.iter().all(|o| o.status == OrderStatus::InPreparation));
    assert!(snapshot.delivered.iter().all(|o| o.status == OrderStatus::Delivered));

    let ids: HashSet<_> = snapshot
        .pending
        .iter()
        .chain(&snapshot.in_preparation)
        .chain(&snapshot.delivered)
        .map(|o| o.id)
        .collect();
    assert_eq!(ids.len(), 20, "Every order appears exactly once");

    let report = system.kitchen.revenue_report().await.unwrap();
    let delivered = snapshot.delivered.len() as i64;
    assert_eq!(report.total_revenue, Decimal::new(20 * delivered, 0));
    assert_eq!(report.count_of("Pizza") as i64, delivered);

    drop(desk);
    system.shutdown().await.unwrap();
}

//! # Restaurant Orders Demo
//!
//! Walks one short service through the order board:
//! 1. Starts the [`RestaurantSystem`] and attaches the kitchen and report views.
//! 2. Places orders at the [`FrontDesk`], including one that is rejected.
//! 3. Moves orders through the kitchen and prints the views after each step.

use restaurant_orders::clients::KitchenClient;
use restaurant_orders::config::RestaurantConfig;
use restaurant_orders::lifecycle::{setup_tracing, RestaurantSystem};
use restaurant_orders::views::{FrontDesk, KitchenView, ReportView};
use std::sync::Arc;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = RestaurantConfig::from_env().map_err(|e| e.to_string())?;
    info!(
        channel_capacity = config.channel_capacity,
        menu_items = config.menu.len(),
        "Starting restaurant order board"
    );

    let system = RestaurantSystem::new(config);

    let kitchen_view = Arc::new(KitchenView::new());
    let report_view = Arc::new(ReportView::new());
    system.kitchen.register_observer(&kitchen_view).await.map_err(|e| e.to_string())?;
    system.kitchen.register_observer(&report_view).await.map_err(|e| e.to_string())?;

    let desk: FrontDesk<KitchenClient> =
        FrontDesk::new(system.menu.clone(), system.kitchen.clone());
    println!("Menu:");
    for item in desk.menu().items() {
        println!("  {} - ${:.2}", item.name, item.price);
    }
    println!();

    let span = tracing::info_span!("front_desk");
    async {
        for (table, selections) in [
            ("5", vec![("Burger", 1), ("Soda", 1)]),
            ("2", vec![("Pizza", 2)]),
            ("", vec![("Soda", 1)]),
        ] {
            if let Err(e) = desk.place_order(table, &selections).await {
                warn!(error = %e, "Front desk could not place order");
            }
        }
    }
    .instrument(span)
    .await;
    println!("Kitchen:\n{}\n", kitchen_view.render());

    let span = tracing::info_span!("kitchen");
    async {
        system.kitchen.advance_to_preparation().await?;
        system.kitchen.complete_preparation().await?;
        system.kitchen.advance_to_preparation().await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;
    println!("Kitchen:\n{}\n", kitchen_view.render());
    println!("{}", report_view.render());

    drop(desk);
    let board = system.shutdown().await.map_err(|e| e.to_string())?;
    info!(delivered = board.delivered().len(), "Application completed successfully");
    Ok(())
}

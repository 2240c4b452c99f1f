//! # Restaurant Orders
//!
//! > **Order tracking for a single restaurant: front desk, kitchen and revenue report.**
//!
//! Staff enter orders at the front desk, the kitchen moves them through
//! preparation, and a report view adds up what has been delivered.
//!
//! ## 🏗️ Order Lifecycle
//!
//! ```text
//! Placed ──advance──► InPreparation ──complete──► Delivered
//! ```
//!
//! Both transitions are FIFO: the kitchen always takes the oldest order in a
//! queue, never a specific one. Transitions on an empty queue are no-ops, and
//! observers are refreshed after every operation, including no-ops.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Board ([`manager`])
//! The synchronous core. [`OrderManager`](manager::OrderManager) owns every
//! submitted order in one of three queues and notifies
//! [`OrderObserver`](manager::OrderObserver)s after each change.
//!
//! ### 2. The Data ([`model`])
//! [`MenuItem`](model::MenuItem), [`Menu`](model::Menu), [`Order`](model::Order)
//! and [`RevenueReport`](model::RevenueReport).
//!
//! ### 3. The Actor ([`kitchen_actor`], [`clients`])
//! A Tokio task that owns one manager and applies requests one at a time, so
//! the board can be driven from many tasks. [`KitchenClient`](clients::KitchenClient)
//! is its cloneable handle; [`MockKitchen`](clients::mock::MockKitchen) stands in
//! for it in tests.
//!
//! ### 4. The Views ([`views`])
//! [`FrontDesk`](views::FrontDesk) validates and submits orders;
//! [`KitchenView`](views::KitchenView) and [`ReportView`](views::ReportView)
//! re-render on every change.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! [`RestaurantSystem`](lifecycle::RestaurantSystem) spawns the actor from a
//! [`RestaurantConfig`](config::RestaurantConfig) and shuts it down.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod kitchen_actor;
pub mod lifecycle;
pub mod manager;
pub mod model;
pub mod views;

//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by the `RUST_LOG` environment variable.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup and shutdown of the kitchen actor, with the
//!   final queue sizes
//! - **Transitions**: every submit, preparation start and delivery, with
//!   `order_id` and `table` fields
//! - **No-ops**: transitions on an empty queue, at `debug`
//! - **Order Entry**: rejected orders with the validation error
//!
//! ## Usage Examples
//!
//! ```bash
//! # Transitions only
//! RUST_LOG=info cargo run
//!
//! # Full payloads and no-op transitions
//! RUST_LOG=debug cargo run
//!
//! # Only the order manager
//! RUST_LOG=restaurant_orders::manager=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a single order looks like:
//!
//! ```text
//! INFO Kitchen actor started
//! INFO place_order{table="5"}: Order placed order_id=order_1
//! INFO Order submitted order_id=order_1 table=5 items=2
//! INFO Preparation started order_id=order_1 table=5
//! INFO Order delivered order_id=order_1 table=5 total=15.00
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

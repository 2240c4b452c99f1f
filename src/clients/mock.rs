//! # Mock Kitchen
//!
//! Utilities for testing views without spawning the kitchen actor.
//!
//! Queue up responses with the `expect_*` methods, hand the mock to the code
//! under test through [`KitchenApi`], then call [`MockKitchen::verify`].
//! Requests must arrive in the same order the expectations were queued.

use crate::clients::KitchenApi;
use crate::kitchen_actor::KitchenError;
use crate::manager::BoardSnapshot;
use crate::model::{Order, OrderId, RevenueReport};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock kitchen.
#[derive(Debug)]
enum Expectation {
    Submit(Result<OrderId, KitchenError>),
    Advance(Result<Option<OrderId>, KitchenError>),
    Complete(Result<Option<OrderId>, KitchenError>),
    Report(Result<RevenueReport, KitchenError>),
    Snapshot(Result<BoardSnapshot, KitchenError>),
}

type Expectations = Arc<Mutex<VecDeque<Expectation>>>;

/// A mock kitchen with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mock = MockKitchen::new();
/// mock.expect_submit().return_ok(OrderId(1));
///
/// let desk = FrontDesk::new(Menu::default(), mock.clone());
/// desk.place_order("5", &[("Burger", 1)]).await?;
/// mock.verify(); // Ensures all expectations were met
/// ```
#[derive(Clone, Default)]
pub struct MockKitchen {
    expectations: Expectations,
    submitted: Arc<Mutex<Vec<Order>>>,
}

impl MockKitchen {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `submit` call.
    pub fn expect_submit(&self) -> ExpectationBuilder<OrderId> {
        ExpectationBuilder::new(&self.expectations, Expectation::Submit)
    }

    /// Expects an `advance_to_preparation` call.
    pub fn expect_advance(&self) -> ExpectationBuilder<Option<OrderId>> {
        ExpectationBuilder::new(&self.expectations, Expectation::Advance)
    }

    /// Expects a `complete_preparation` call.
    pub fn expect_complete(&self) -> ExpectationBuilder<Option<OrderId>> {
        ExpectationBuilder::new(&self.expectations, Expectation::Complete)
    }

    /// Expects a `revenue_report` call.
    pub fn expect_report(&self) -> ExpectationBuilder<RevenueReport> {
        ExpectationBuilder::new(&self.expectations, Expectation::Report)
    }

    /// Expects a `snapshot` call.
    pub fn expect_snapshot(&self) -> ExpectationBuilder<BoardSnapshot> {
        ExpectationBuilder::new(&self.expectations, Expectation::Snapshot)
    }

    /// Orders received by `submit`, in call order.
    pub fn submitted(&self) -> Vec<Order> {
        self.submitted.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining: {:?}", exps.len(), exps);
        }
    }

    fn next(&self, call: &str) -> Expectation {
        let mut exps = self.expectations.lock().unwrap();
        match exps.pop_front() {
            Some(expectation) => expectation,
            None => panic!("Unexpected {call} call: no expectations left"),
        }
    }
}

/// Builder for a single expectation.
pub struct ExpectationBuilder<T> {
    expectations: Expectations,
    wrap: fn(Result<T, KitchenError>) -> Expectation,
}

impl<T> ExpectationBuilder<T> {
    fn new(expectations: &Expectations, wrap: fn(Result<T, KitchenError>) -> Expectation) -> Self {
        Self {
            expectations: expectations.clone(),
            wrap,
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.expectations.lock().unwrap().push_back((self.wrap)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: KitchenError) {
        self.expectations.lock().unwrap().push_back((self.wrap)(Err(error)));
    }
}

#[async_trait]
impl KitchenApi for MockKitchen {
    async fn submit(&self, order: Order) -> Result<OrderId, KitchenError> {
        self.submitted.lock().unwrap().push(order);
        match self.next("submit") {
            Expectation::Submit(response) => response,
            other => panic!("Expectation mismatch: got submit, expected {other:?}"),
        }
    }

    async fn advance_to_preparation(&self) -> Result<Option<OrderId>, KitchenError> {
        match self.next("advance_to_preparation") {
            Expectation::Advance(response) => response,
            other => panic!("Expectation mismatch: got advance_to_preparation, expected {other:?}"),
        }
    }

    async fn complete_preparation(&self) -> Result<Option<OrderId>, KitchenError> {
        match self.next("complete_preparation") {
            Expectation::Complete(response) => response,
            other => panic!("Expectation mismatch: got complete_preparation, expected {other:?}"),
        }
    }

    async fn revenue_report(&self) -> Result<RevenueReport, KitchenError> {
        match self.next("revenue_report") {
            Expectation::Report(response) => response,
            other => panic!("Expectation mismatch: got revenue_report, expected {other:?}"),
        }
    }

    async fn snapshot(&self) -> Result<BoardSnapshot, KitchenError> {
        match self.next("snapshot") {
            Expectation::Snapshot(response) => response,
            other => panic!("Expectation mismatch: got snapshot, expected {other:?}"),
        }
    }
}

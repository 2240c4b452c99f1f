use crate::manager::{OrderManager, OrderObserver};
use crate::model::RevenueReport;
use std::sync::{Mutex, PoisonError};

/// Formats a revenue report as display lines.
///
/// The first line carries the total with two decimals; one `name: count`
/// line follows per item sold, sorted by name.
pub fn render_report(report: &RevenueReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.sold_counts.len() + 1);
    lines.push(format!("Total revenue: ${:.2}", report.total_revenue));
    lines.extend(report.sold_counts.iter().map(|(name, count)| format!("{name}: {count}")));
    lines
}

/// Revenue display, refreshed on every board change.
#[derive(Debug, Default)]
pub struct ReportView {
    report: Mutex<RevenueReport>,
}

impl ReportView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The report as of the last refresh.
    pub fn report(&self) -> RevenueReport {
        self.report.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn lines(&self) -> Vec<String> {
        render_report(&self.report())
    }

    pub fn render(&self) -> String {
        self.lines().join("\n")
    }
}

impl OrderObserver for ReportView {
    fn on_orders_changed(&self, board: &OrderManager) {
        *self.report.lock().unwrap_or_else(PoisonError::into_inner) = board.revenue_report();
    }
}

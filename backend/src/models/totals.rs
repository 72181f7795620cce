//! Summary totals (KPI cards)

use serde::{Deserialize, Serialize};

/// Aggregated sums and derived average over a daily metric series.
///
/// Produced by [`crate::aggregation::aggregate_totals`]; never stored apart
/// from the snapshot it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub revenue: i64,
    pub orders: i64,
    pub customers: i64,
    /// revenue / orders, 0.0 when there are no orders
    pub avg_order_value: f64,
}

impl Totals {
    /// Average order value rounded to whole currency units.
    ///
    /// # Example
    /// ```
    /// use sales_dashboard_core_rs::Totals;
    ///
    /// let totals = Totals { revenue: 1000, orders: 3, customers: 2, avg_order_value: 1000.0 / 3.0 };
    /// assert_eq!(totals.rounded_avg_order_value(), 333);
    /// ```
    pub fn rounded_avg_order_value(&self) -> i64 {
        self.avg_order_value.round() as i64
    }
}

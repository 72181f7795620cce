//! Daily sales metric
//!
//! One day's synthetic revenue / orders / customers tuple. A series of these
//! drives the revenue line chart, the orders/customers bar chart and the
//! summary totals.
//!
//! CRITICAL: All money values are i64 (whole currency units)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Chart label format for a series day ("Oct 05").
pub const DAY_LABEL_FORMAT: &str = "%b %d";

/// One day of synthetic sales activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMetric {
    /// Calendar day this metric covers
    pub date: NaiveDate,

    /// Abbreviated month + zero-padded day, e.g. `Mar 07`
    pub label: String,

    /// Revenue for the day
    pub revenue: i64,

    /// Number of orders placed
    pub orders: i64,

    /// Number of distinct customers
    pub customers: i64,
}

impl DailyMetric {
    /// Build a metric, deriving the chart label from `date`.
    ///
    /// # Example
    /// ```
    /// use chrono::NaiveDate;
    /// use sales_dashboard_core_rs::DailyMetric;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
    /// let metric = DailyMetric::new(day, 1000, 10, 5);
    /// assert_eq!(metric.label, "Mar 07");
    /// ```
    pub fn new(date: NaiveDate, revenue: i64, orders: i64, customers: i64) -> Self {
        Self {
            date,
            label: date.format(DAY_LABEL_FORMAT).to_string(),
            revenue,
            orders,
            customers,
        }
    }
}

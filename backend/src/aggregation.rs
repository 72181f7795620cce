//! Totals aggregation over a daily metric series
//!
//! # Critical Invariants
//!
//! - Sums are exact integer sums (i64)
//! - `avg_order_value` is never NaN: an order-less series averages to 0.0

use crate::models::{DailyMetric, Totals};

/// Reduce a sales series into summary totals.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use sales_dashboard_core_rs::aggregation::aggregate_totals;
/// use sales_dashboard_core_rs::DailyMetric;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let totals = aggregate_totals(&[DailyMetric::new(day, 1000, 10, 5)]);
/// assert_eq!(totals.avg_order_value, 100.0);
/// ```
pub fn aggregate_totals(series: &[DailyMetric]) -> Totals {
    let (revenue, orders, customers) = series.iter().fold((0i64, 0i64, 0i64), |acc, day| {
        (acc.0 + day.revenue, acc.1 + day.orders, acc.2 + day.customers)
    });

    let avg_order_value = if orders == 0 {
        0.0
    } else {
        revenue as f64 / orders as f64
    };

    Totals {
        revenue,
        orders,
        customers,
        avg_order_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32, revenue: i64, orders: i64, customers: i64) -> DailyMetric {
        DailyMetric::new(
            NaiveDate::from_ymd_opt(2024, 1, d).unwrap(),
            revenue,
            orders,
            customers,
        )
    }

    #[test]
    fn test_zero_orders_with_revenue_is_not_nan() {
        let totals = aggregate_totals(&[day(1, 500, 0, 0)]);
        assert_eq!(totals.revenue, 500);
        assert_eq!(totals.avg_order_value, 0.0);
    }

    #[test]
    fn test_sums_across_days() {
        let totals = aggregate_totals(&[day(1, 1000, 10, 5), day(2, 2000, 30, 7)]);
        assert_eq!(totals.revenue, 3000);
        assert_eq!(totals.orders, 40);
        assert_eq!(totals.customers, 12);
        assert_eq!(totals.avg_order_value, 75.0);
    }
}

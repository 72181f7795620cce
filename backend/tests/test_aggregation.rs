//! Totals aggregation tests
//!
//! Critical invariants tested:
//! - Empty series aggregates to all zeros (average 0, not NaN)
//! - Sums equal the per-field sums of the series
//! - Average order value = revenue / orders

use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use sales_dashboard_core_rs::{aggregate_totals, generate_sales_series, DailyMetric, FixedClock, RngManager};

fn metric(revenue: i64, orders: i64, customers: i64) -> DailyMetric {
    DailyMetric::new(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(), revenue, orders, customers)
}

#[test]
fn test_empty_series_is_all_zero() {
    let totals = aggregate_totals(&[]);
    assert_eq!(totals.revenue, 0);
    assert_eq!(totals.orders, 0);
    assert_eq!(totals.customers, 0);
    assert_eq!(totals.avg_order_value, 0.0);
    assert!(!totals.avg_order_value.is_nan());
}

#[test]
fn test_single_day_series() {
    let totals = aggregate_totals(&[metric(1000, 10, 5)]);
    assert_eq!(totals.revenue, 1000);
    assert_eq!(totals.orders, 10);
    assert_eq!(totals.customers, 5);
    assert_eq!(totals.avg_order_value, 100.0);
    assert_eq!(totals.rounded_avg_order_value(), 100);
}

#[test]
fn test_zero_order_days_do_not_poison_average() {
    let totals = aggregate_totals(&[metric(2500, 0, 3), metric(0, 0, 0)]);
    assert_eq!(totals.revenue, 2500);
    assert_eq!(totals.avg_order_value, 0.0);
}

#[test]
fn test_average_rounds_to_whole_units() {
    let totals = aggregate_totals(&[metric(1000, 6, 1)]);
    assert!((totals.avg_order_value - 166.666).abs() < 0.001);
    assert_eq!(totals.rounded_avg_order_value(), 167);
}

#[test]
fn test_empty_generated_series_aggregates_to_zero() {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
    let mut rng = RngManager::new(8);
    let series = generate_sales_series(0, &clock, &mut rng).unwrap();
    assert_eq!(aggregate_totals(&series).avg_order_value, 0.0);
}

proptest! {
    #[test]
    fn prop_totals_match_field_sums(
        rows in proptest::collection::vec((0i64..10_000, 0i64..100, 0i64..50), 0..120)
    ) {
        let series: Vec<DailyMetric> = rows.iter().map(|&(r, o, c)| metric(r, o, c)).collect();
        let totals = aggregate_totals(&series);

        let revenue: i64 = rows.iter().map(|r| r.0).sum();
        let orders: i64 = rows.iter().map(|r| r.1).sum();
        let customers: i64 = rows.iter().map(|r| r.2).sum();

        prop_assert_eq!(totals.revenue, revenue);
        prop_assert_eq!(totals.orders, orders);
        prop_assert_eq!(totals.customers, customers);
        prop_assert!(totals.avg_order_value.is_finite());
        if orders == 0 {
            prop_assert_eq!(totals.avg_order_value, 0.0);
        } else {
            prop_assert_eq!(totals.avg_order_value, revenue as f64 / orders as f64);
        }
    }
}

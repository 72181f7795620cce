//! Daily sales series generation

use super::GeneratorError;
use crate::core::time::Clock;
use crate::models::DailyMetric;
use crate::rng::NumberSource;
use chrono::Duration;
use tracing::debug;

/// Longest series accepted (ten years of days).
pub const MAX_SERIES_DAYS: usize = 3650;

/// Revenue bounds per day, `[min, max)`
pub const REVENUE_RANGE: (i64, i64) = (1000, 6000);
/// Order count bounds per day, `[min, max)`
pub const ORDERS_RANGE: (i64, i64) = (10, 60);
/// Customer count bounds per day, `[min, max)`
pub const CUSTOMERS_RANGE: (i64, i64) = (5, 35);

/// Generate `days` daily metrics ending today (most recent last).
///
/// `days == 0` yields an empty series.
///
/// # Errors
///
/// [`GeneratorError::InvalidParameter`] if `days` exceeds [`MAX_SERIES_DAYS`].
pub fn generate_sales_series<R>(
    days: usize,
    clock: &dyn Clock,
    rng: &mut R,
) -> Result<Vec<DailyMetric>, GeneratorError>
where
    R: NumberSource + ?Sized,
{
    if days > MAX_SERIES_DAYS {
        return Err(GeneratorError::InvalidParameter {
            parameter: "days",
            value: days.to_string(),
            reason: format!("at most {} days can be generated", MAX_SERIES_DAYS),
        });
    }

    let today = clock.today();
    debug!(days, %today, "generating sales series");

    let series = (0..days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset as i64);
            let revenue = rng.range(REVENUE_RANGE.0, REVENUE_RANGE.1);
            let orders = rng.range(ORDERS_RANGE.0, ORDERS_RANGE.1);
            let customers = rng.range(CUSTOMERS_RANGE.0, CUSTOMERS_RANGE.1);
            DailyMetric::new(date, revenue, orders, customers)
        })
        .collect();

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::FixedClock;
    use crate::rng::RngManager;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 2, 15, 0, 0).unwrap())
    }

    #[test]
    fn test_series_crosses_month_and_leap_day() {
        let mut rng = RngManager::new(42);
        let series = generate_sales_series(3, &clock(), &mut rng).unwrap();

        let dates: Vec<NaiveDate> = series.iter().map(|m| m.date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            ]
        );
        assert_eq!(series[0].label, "Feb 29");
        assert_eq!(series[2].label, "Mar 02");
    }

    #[test]
    fn test_zero_days_is_empty() {
        let mut rng = RngManager::new(42);
        let series = generate_sales_series(0, &clock(), &mut rng).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_too_many_days_rejected() {
        let mut rng = RngManager::new(42);
        let err = generate_sales_series(MAX_SERIES_DAYS + 1, &clock(), &mut rng).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidParameter { parameter: "days", .. }));
    }

    #[test]
    fn test_rejection_consumes_no_randomness() {
        let mut rng = RngManager::new(42);
        let before = rng.get_state();
        let _ = generate_sales_series(MAX_SERIES_DAYS + 1, &clock(), &mut rng);
        assert_eq!(rng.get_state(), before);
    }
}

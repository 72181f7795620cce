//! Order record generation

use super::GeneratorError;
use crate::core::time::Clock;
use crate::models::order::MAX_ORDER_INDEX;
use crate::models::{OrderRecord, OrderStatus};
use crate::rng::{pick, NumberSource};
use chrono::Duration;
use tracing::debug;

/// Most orders one call can produce; ids are 4-digit zero-padded.
pub const MAX_ORDER_COUNT: usize = MAX_ORDER_INDEX;

/// Order amount bounds, `[min, max)`
pub const AMOUNT_RANGE: (i64, i64) = (100, 2100);

/// Orders are placed within this many days before generation time.
pub const ORDER_WINDOW_DAYS: i64 = 30;

pub const CUSTOMERS: [&str; 7] = [
    "John Doe",
    "Jane Smith",
    "Bob Johnson",
    "Alice Brown",
    "Charlie Wilson",
    "Diana Davis",
    "Eve Miller",
];

pub const PRODUCTS: [&str; 7] = [
    "iPhone 15",
    "MacBook Pro",
    "AirPods",
    "iPad",
    "Apple Watch",
    "Samsung Galaxy",
    "Dell Laptop",
];

/// Generate `count` orders with ids `ORD-0001` through `ORD-{count:04}`.
///
/// Numbering restarts at 1 on every call. `count == 0` yields no orders.
///
/// # Errors
///
/// [`GeneratorError::InvalidParameter`] if `count` exceeds [`MAX_ORDER_COUNT`].
pub fn generate_orders<R>(
    count: usize,
    clock: &dyn Clock,
    rng: &mut R,
) -> Result<Vec<OrderRecord>, GeneratorError>
where
    R: NumberSource + ?Sized,
{
    if count > MAX_ORDER_COUNT {
        return Err(GeneratorError::InvalidParameter {
            parameter: "count",
            value: count.to_string(),
            reason: format!("at most {} orders fit the ORD-NNNN id format", MAX_ORDER_COUNT),
        });
    }

    let now = clock.now();
    let window_ms = Duration::days(ORDER_WINDOW_DAYS).num_milliseconds();
    debug!(count, "generating order records");

    let orders = (1..=count)
        .map(|index| {
            let customer = pick(&mut *rng, &CUSTOMERS).to_string();
            let product = pick(&mut *rng, &PRODUCTS).to_string();
            let amount = rng.range(AMOUNT_RANGE.0, AMOUNT_RANGE.1);
            let status = *pick(&mut *rng, &OrderStatus::ALL);
            let age_ms = (rng.next_f64() * window_ms as f64) as i64;
            let placed_at = now - Duration::milliseconds(age_ms);
            OrderRecord::new(index, customer, product, amount, status, placed_at)
        })
        .collect();

    Ok(orders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::FixedClock;
    use crate::rng::RngManager;
    use chrono::{TimeZone, Utc};

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_ids_restart_each_call() {
        let mut rng = RngManager::new(9);
        let first = generate_orders(3, &clock(), &mut rng).unwrap();
        let second = generate_orders(2, &clock(), &mut rng).unwrap();

        let ids: Vec<&str> = first.iter().map(|o| o.id()).collect();
        assert_eq!(ids, ["ORD-0001", "ORD-0002", "ORD-0003"]);
        assert_eq!(second[0].id(), "ORD-0001");
    }

    #[test]
    fn test_fields_drawn_from_pools() {
        let mut rng = RngManager::new(1234);
        let now = clock().now();
        for order in generate_orders(200, &clock(), &mut rng).unwrap() {
            assert!(CUSTOMERS.contains(&order.customer()));
            assert!(PRODUCTS.contains(&order.product()));
            assert!((AMOUNT_RANGE.0..AMOUNT_RANGE.1).contains(&order.amount()));
            assert!(order.placed_at() <= now);
            assert!(order.placed_at() > now - Duration::days(ORDER_WINDOW_DAYS));
        }
    }

    #[test]
    fn test_count_above_id_width_rejected() {
        let mut rng = RngManager::new(1);
        let err = generate_orders(MAX_ORDER_COUNT + 1, &clock(), &mut rng).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidParameter { parameter: "count", .. }));
        assert_eq!(generate_orders(0, &clock(), &mut rng).unwrap().len(), 0);
    }
}

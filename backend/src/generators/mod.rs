//! Mock data generators for the dashboard datasets.
//!
//! All randomness comes from an injected [`NumberSource`](crate::rng::NumberSource)
//! and all dates from an injected [`Clock`](crate::core::time::Clock).
//!
//! # Key Principles
//!
//! 1. **Determinism**: Same seed + same clock → same datasets
//! 2. **Fresh output**: Every call allocates new values; nothing is cached
//! 3. **Fail fast**: Out-of-range sizes are rejected, never clamped
//!
//! # Example
//!
//! ```
//! use sales_dashboard_core_rs::core::time::SystemClock;
//! use sales_dashboard_core_rs::generators::{generate_category_mix, generate_orders, generate_sales_series};
//! use sales_dashboard_core_rs::rng::RngManager;
//!
//! let mut rng = RngManager::new(42);
//! let series = generate_sales_series(7, &SystemClock, &mut rng).unwrap();
//! let orders = generate_orders(50, &SystemClock, &mut rng).unwrap();
//! assert_eq!(series.len(), 7);
//! assert_eq!(orders.len(), 50);
//! assert_eq!(generate_category_mix().len(), 5);
//! ```

pub mod categories;
pub mod orders;
pub mod sales;

pub use categories::generate_category_mix;
pub use orders::{generate_orders, MAX_ORDER_COUNT};
pub use sales::{generate_sales_series, MAX_SERIES_DAYS};

use thiserror::Error;

/// Errors raised at the generator boundary
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid {parameter} '{value}': {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value: String,
        reason: String,
    },
}

//! Order record model
//!
//! Represents one synthetic transaction shown in the dashboard's order table.
//! Each order has:
//! - Sequential id (`ORD-0001`, `ORD-0002`, ...) restarting at 1 per generation
//! - Customer and product names drawn from fixed pools
//! - Amount (i64 whole currency units)
//! - Status (Completed, Pending, Cancelled)
//! - Placement instant within the trailing 30 days, plus its display label

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display format for the order date column ("Oct 05, 2024").
pub const ORDER_DATE_FORMAT: &str = "%b %d, %Y";

/// Largest index that fits the 4-digit zero-padded order id.
pub const MAX_ORDER_INDEX: usize = 9999;

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Completed,
    Pending,
    Cancelled,
}

impl OrderStatus {
    /// Every status, in the order the generator draws from.
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Completed,
        OrderStatus::Pending,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Completed => "completed",
            OrderStatus::Pending => "pending",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format the id for a 1-based order index.
///
/// # Example
/// ```
/// use sales_dashboard_core_rs::models::order::order_id;
///
/// assert_eq!(order_id(1), "ORD-0001");
/// assert_eq!(order_id(50), "ORD-0050");
/// ```
pub fn order_id(index: usize) -> String {
    format!("ORD-{:04}", index)
}

/// A synthetic order
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use sales_dashboard_core_rs::{OrderRecord, OrderStatus};
///
/// let order = OrderRecord::new(
///     1,
///     "Jane Smith".to_string(),
///     "iPad".to_string(),
///     1250,
///     OrderStatus::Pending,
///     Utc.with_ymd_and_hms(2024, 3, 7, 9, 30, 0).unwrap(),
/// );
/// assert_eq!(order.id(), "ORD-0001");
/// assert_eq!(order.date(), "Mar 07, 2024");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// `ORD-` + zero-padded 1-based index
    id: String,

    customer: String,

    product: String,

    /// Order amount (i64 whole currency units)
    amount: i64,

    status: OrderStatus,

    /// Instant the order was placed
    placed_at: DateTime<Utc>,

    /// `placed_at` rendered with [`ORDER_DATE_FORMAT`]
    date: String,
}

impl OrderRecord {
    /// Create an order for the given 1-based index.
    ///
    /// # Panics
    /// Panics if index is 0 or amount is negative
    pub fn new(
        index: usize,
        customer: String,
        product: String,
        amount: i64,
        status: OrderStatus,
        placed_at: DateTime<Utc>,
    ) -> Self {
        assert!(index > 0, "order index is 1-based");
        assert!(amount >= 0, "amount must be non-negative");

        Self {
            id: order_id(index),
            customer,
            product,
            amount,
            status,
            placed_at,
            date: placed_at.format(ORDER_DATE_FORMAT).to_string(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    /// Display label for the order date
    pub fn date(&self) -> &str {
        &self.date
    }
}

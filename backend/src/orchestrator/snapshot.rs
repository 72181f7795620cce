//! Snapshot - immutable view of every dashboard dataset
//!
//! The orchestrator never mutates a published snapshot. Each refresh,
//! timeframe change or order reload builds a new one and swaps it in, so a
//! consumer always sees a consistent bundle of series, categories, orders and
//! totals.
//!
//! # Critical Invariants
//!
//! - **Derived totals**: `totals` always equals `aggregate_totals(&series)`
//! - **Monotonic generation**: each published snapshot has a larger generation
//! - **Content fingerprint**: identical datasets hash identically, regardless
//!   of generation, id or timestamp

use crate::aggregation::aggregate_totals;
use crate::models::{CategoryShare, DailyMetric, OrderRecord, Timeframe, Totals};
use crate::orchestrator::engine::DashboardError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

// ============================================================================
// Snapshot Structures
// ============================================================================

/// One consistent set of dashboard datasets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Position in the orchestrator's publish sequence (initial = 0)
    pub generation: u64,

    /// Unique identifier of this snapshot
    pub snapshot_id: Uuid,

    /// Clock reading when the datasets were generated
    pub generated_at: DateTime<Utc>,

    /// Day-count the series was generated for
    pub timeframe: Timeframe,

    pub series: Vec<DailyMetric>,
    pub categories: Vec<CategoryShare>,
    pub orders: Vec<OrderRecord>,
    pub totals: Totals,
}

/// One page of the order table.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderPage<'a> {
    /// 0-based page index
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_orders: usize,
    pub orders: &'a [OrderRecord],
}

/// Fields that make up a snapshot's fingerprint
#[derive(Serialize)]
struct FingerprintContent<'a> {
    timeframe: Timeframe,
    series: &'a [DailyMetric],
    categories: &'a [CategoryShare],
    orders: &'a [OrderRecord],
}

impl DashboardSnapshot {
    /// Assemble a snapshot, deriving totals from `series`.
    pub fn new(
        generation: u64,
        generated_at: DateTime<Utc>,
        timeframe: Timeframe,
        series: Vec<DailyMetric>,
        categories: Vec<CategoryShare>,
        orders: Vec<OrderRecord>,
    ) -> Self {
        let totals = aggregate_totals(&series);
        Self {
            generation,
            snapshot_id: Uuid::new_v4(),
            generated_at,
            timeframe,
            series,
            categories,
            orders,
            totals,
        }
    }

    /// Copy of this snapshot with a new series (totals recomputed).
    pub fn with_series(
        &self,
        generation: u64,
        generated_at: DateTime<Utc>,
        timeframe: Timeframe,
        series: Vec<DailyMetric>,
    ) -> Self {
        Self::new(
            generation,
            generated_at,
            timeframe,
            series,
            self.categories.clone(),
            self.orders.clone(),
        )
    }

    /// Copy of this snapshot with a new order list.
    pub fn with_orders(
        &self,
        generation: u64,
        generated_at: DateTime<Utc>,
        orders: Vec<OrderRecord>,
    ) -> Self {
        Self::new(
            generation,
            generated_at,
            self.timeframe,
            self.series.clone(),
            self.categories.clone(),
            orders,
        )
    }

    /// Return the requested 0-based page of the order table.
    ///
    /// Pages past the end are empty.
    ///
    /// # Panics
    /// Panics if `page_size` is 0
    pub fn order_page(&self, page: usize, page_size: usize) -> OrderPage<'_> {
        assert!(page_size > 0, "page_size must be positive");

        let total_orders = self.orders.len();
        let total_pages = total_orders.div_ceil(page_size);
        let start = page.saturating_mul(page_size).min(total_orders);
        let end = start.saturating_add(page_size).min(total_orders);

        OrderPage {
            page,
            page_size,
            total_pages,
            total_orders,
            orders: &self.orders[start..end],
        }
    }

    /// SHA256 over the datasets (hex). Generation, id and timestamp are excluded.
    pub fn fingerprint(&self) -> String {
        let content = FingerprintContent {
            timeframe: self.timeframe,
            series: &self.series,
            categories: &self.categories,
            orders: &self.orders,
        };
        // Serializing plain data structs to a Vec cannot fail
        let bytes = serde_json::to_vec(&content).unwrap_or_default();
        format!("{:x}", Sha256::digest(&bytes))
    }

    /// Serialize for a host renderer.
    pub fn to_json(&self) -> Result<String, DashboardError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

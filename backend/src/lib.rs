//! Sales Dashboard Core - Rust Engine
//!
//! Mock data core for a sales analytics dashboard: synthetic daily metrics,
//! a fixed category mix, synthetic order records, summary totals, and a
//! simulated-latency refresh cycle that publishes immutable snapshots.
//!
//! # Architecture
//!
//! - **core**: Clock abstraction
//! - **models**: Domain types (DailyMetric, CategoryShare, OrderRecord, Totals)
//! - **generators**: Sales series, category mix and order generators
//! - **aggregation**: Totals over a sales series
//! - **orchestrator**: Refresh state machine, scheduler, snapshots
//! - **rng**: Deterministic random number generation
//! - **config**: Dashboard configuration
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (whole currency units)
//! 2. All randomness goes through an injected `NumberSource`
//! 3. Published snapshots are never mutated, only replaced

pub mod aggregation;
pub mod config;
pub mod core;
pub mod generators;
pub mod models;
pub mod orchestrator;
pub mod rng;

// Re-exports for convenience
pub use aggregation::aggregate_totals;
pub use config::DashboardConfig;
pub use crate::core::time::{Clock, FixedClock, SystemClock};
pub use generators::{generate_category_mix, generate_orders, generate_sales_series, GeneratorError};
pub use models::{
    CategoryShare, DailyMetric, DashboardEvent, EventLog, OrderRecord, OrderStatus, Timeframe,
    Totals,
};
pub use orchestrator::{
    DashboardError, DashboardSnapshot, ManualScheduler, OrderPage, RefreshOrchestrator,
    RefreshOutcome, RefreshState, Scheduler, TokioScheduler,
};
pub use rng::{NumberSource, RngManager};

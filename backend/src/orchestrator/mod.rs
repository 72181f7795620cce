//! Orchestrator - refresh state machine and snapshot publication
//!
//! See `engine.rs` for the state machine, `scheduler.rs` for the simulated
//! latency and `snapshot.rs` for the published datasets.

pub mod engine;
pub mod scheduler;
pub mod snapshot;

// Re-export main types for convenience
pub use engine::{
    DashboardError, RefreshOrchestrator, RefreshOrchestratorBuilder, RefreshOutcome, RefreshState,
};
pub use scheduler::{DelayFuture, ManualScheduler, Scheduler, TokioScheduler};
pub use snapshot::{DashboardSnapshot, OrderPage};

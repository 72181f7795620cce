//! Domain models for the sales dashboard

pub mod category;
pub mod event;
pub mod metric;
pub mod order;
pub mod timeframe;
pub mod totals;

// Re-exports
pub use category::CategoryShare;
pub use event::{DashboardEvent, EventLog, DEFAULT_EVENT_CAPACITY};
pub use metric::DailyMetric;
pub use order::{OrderRecord, OrderStatus};
pub use timeframe::Timeframe;
pub use totals::Totals;

//! Dashboard event log
//!
//! Records every transition of the refresh state machine and every dataset
//! replacement, so hosts and tests can audit exactly what happened:
//! - **Refresh**: started, rejected while busy, completed, failed, cancelled
//! - **Selection**: timeframe changed (series regenerated)
//! - **Orders**: order list reloaded outside the refresh cycle
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use sales_dashboard_core_rs::models::event::{DashboardEvent, EventLog};
//!
//! let mut log = EventLog::new();
//! log.log(DashboardEvent::RefreshStarted { at: Utc::now(), generation: 0 });
//! assert_eq!(log.events_of_type("RefreshStarted").len(), 1);
//! ```

use crate::models::Timeframe;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;

/// Events kept by a log built with [`EventLog::new`].
pub const DEFAULT_EVENT_CAPACITY: usize = 1024;

/// A state change of the dashboard.
///
/// `generation` always names the snapshot generation current *after* the
/// event (for `RefreshStarted`/`RefreshRejected`, the one still published).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum DashboardEvent {
    /// Idle -> Refreshing
    RefreshStarted { at: DateTime<Utc>, generation: u64 },

    /// Refresh requested while one was already pending
    RefreshRejected { at: DateTime<Utc>, generation: u64 },

    /// Refreshing -> Idle with all datasets replaced
    RefreshCompleted {
        at: DateTime<Utc>,
        generation: u64,
        days: u32,
        order_count: usize,
    },

    /// Refreshing -> Idle without replacing the snapshot
    RefreshFailed {
        at: DateTime<Utc>,
        generation: u64,
        reason: String,
    },

    /// Pending refresh abandoned by disposal
    RefreshCancelled { at: DateTime<Utc>, generation: u64 },

    /// Day-count selector changed; sales series regenerated
    TimeframeSelected {
        at: DateTime<Utc>,
        generation: u64,
        timeframe: Timeframe,
    },

    /// Order list regenerated on demand
    OrdersReloaded {
        at: DateTime<Utc>,
        generation: u64,
        order_count: usize,
    },
}

impl DashboardEvent {
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            DashboardEvent::RefreshStarted { at, .. }
            | DashboardEvent::RefreshRejected { at, .. }
            | DashboardEvent::RefreshCompleted { at, .. }
            | DashboardEvent::RefreshFailed { at, .. }
            | DashboardEvent::RefreshCancelled { at, .. }
            | DashboardEvent::TimeframeSelected { at, .. }
            | DashboardEvent::OrdersReloaded { at, .. } => *at,
        }
    }

    pub fn generation(&self) -> u64 {
        match self {
            DashboardEvent::RefreshStarted { generation, .. }
            | DashboardEvent::RefreshRejected { generation, .. }
            | DashboardEvent::RefreshCompleted { generation, .. }
            | DashboardEvent::RefreshFailed { generation, .. }
            | DashboardEvent::RefreshCancelled { generation, .. }
            | DashboardEvent::TimeframeSelected { generation, .. }
            | DashboardEvent::OrdersReloaded { generation, .. } => *generation,
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            DashboardEvent::RefreshStarted { .. } => "RefreshStarted",
            DashboardEvent::RefreshRejected { .. } => "RefreshRejected",
            DashboardEvent::RefreshCompleted { .. } => "RefreshCompleted",
            DashboardEvent::RefreshFailed { .. } => "RefreshFailed",
            DashboardEvent::RefreshCancelled { .. } => "RefreshCancelled",
            DashboardEvent::TimeframeSelected { .. } => "TimeframeSelected",
            DashboardEvent::OrdersReloaded { .. } => "OrdersReloaded",
        }
    }
}

/// Bounded event log. Once `capacity` events are held, each new one evicts
/// the oldest.
#[derive(Debug, Clone)]
pub struct EventLog {
    events: VecDeque<DashboardEvent>,
    capacity: usize,
    evicted: u64,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }

    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "event log capacity must be positive");
        Self {
            events: VecDeque::with_capacity(capacity.min(DEFAULT_EVENT_CAPACITY)),
            capacity,
            evicted: 0,
        }
    }

    pub fn log(&mut self, event: DashboardEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
            self.evicted += 1;
        }
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Events dropped to stay within capacity
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    /// Retained events, oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DashboardEvent> + '_ {
        self.events.iter()
    }

    /// The last `n` retained events, oldest first
    pub fn recent(&self, n: usize) -> Vec<DashboardEvent> {
        let skip = self.events.len().saturating_sub(n);
        self.events.iter().skip(skip).cloned().collect()
    }

    pub fn events_of_type(&self, event_type: &str) -> Vec<&DashboardEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_filter_by_type_preserves_order() {
        let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let mut log = EventLog::new();
        log.log(DashboardEvent::RefreshStarted { at: t0, generation: 0 });
        log.log(DashboardEvent::RefreshRejected { at: t0, generation: 0 });
        log.log(DashboardEvent::RefreshCompleted {
            at: t0,
            generation: 1,
            days: 30,
            order_count: 50,
        });
        log.log(DashboardEvent::RefreshStarted { at: t0, generation: 1 });

        let started = log.events_of_type("RefreshStarted");
        assert_eq!(started.len(), 2);
        assert_eq!(started[0].generation(), 0);
        assert_eq!(started[1].generation(), 1);
        assert_eq!(log.len(), 4);
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let event = DashboardEvent::TimeframeSelected {
            at,
            generation: 3,
            timeframe: Timeframe::Last7Days,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "TimeframeSelected");
        assert_eq!(json["timeframe"], 7);
        assert_eq!(event.at(), at);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let mut log = EventLog::with_capacity(3);
        for generation in 0..5 {
            log.log(DashboardEvent::OrdersReloaded {
                at: t0,
                generation,
                order_count: 50,
            });
        }

        assert_eq!(log.len(), 3);
        assert_eq!(log.evicted(), 2);
        let kept: Vec<u64> = log.iter().map(|e| e.generation()).collect();
        assert_eq!(kept, vec![2, 3, 4]);
        let last_two: Vec<u64> = log.recent(2).iter().map(|e| e.generation()).collect();
        assert_eq!(last_two, vec![3, 4]);
        assert_eq!(log.recent(10).len(), 3);
    }

    #[test]
    #[should_panic(expected = "event log capacity must be positive")]
    fn test_zero_capacity_panics() {
        EventLog::with_capacity(0);
    }
}

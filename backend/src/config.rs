//! Dashboard configuration
//!
//! Every field has a default matching the demo dashboard, so an empty JSON
//! object is a valid configuration.

use crate::generators::MAX_ORDER_COUNT;
use crate::models::{Timeframe, DEFAULT_EVENT_CAPACITY};
use crate::orchestrator::DashboardError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Parameters of a [`RefreshOrchestrator`](crate::orchestrator::RefreshOrchestrator).
///
/// # Example
/// ```
/// use sales_dashboard_core_rs::DashboardConfig;
///
/// let config = DashboardConfig::from_json_str(r#"{ "refresh_delay_ms": 250, "rng_seed": 7 }"#).unwrap();
/// assert_eq!(config.order_count, 50);
/// assert_eq!(config.rng_seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Simulated latency of a refresh, in milliseconds
    pub refresh_delay_ms: u64,

    /// Orders generated per refresh or reload (1-9999)
    pub order_count: usize,

    /// Day-count selected when the dashboard opens
    pub default_timeframe: Timeframe,

    /// Rows per page of the order table
    pub table_page_size: usize,

    /// Seed for reproducible datasets (None = seeded from entropy)
    pub rng_seed: Option<u64>,

    /// Events retained by the orchestrator's log; oldest evicted first
    pub event_log_capacity: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_delay_ms: 6000,
            order_count: 50,
            default_timeframe: Timeframe::Last30Days,
            table_page_size: 10,
            rng_seed: None,
            event_log_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, DashboardError> {
        let config: DashboardConfig = serde_json::from_str(json)
            .map_err(|e| DashboardError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.order_count == 0 || self.order_count > MAX_ORDER_COUNT {
            return Err(DashboardError::InvalidConfig(format!(
                "order_count must be between 1 and {}, got {}",
                MAX_ORDER_COUNT, self.order_count
            )));
        }
        if self.table_page_size == 0 {
            return Err(DashboardError::InvalidConfig(
                "table_page_size must be positive".to_string(),
            ));
        }
        if self.event_log_capacity == 0 {
            return Err(DashboardError::InvalidConfig(
                "event_log_capacity must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = DashboardConfig::from_json_str("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.refresh_delay(), Duration::from_secs(6));
    }

    #[test]
    fn test_invalid_timeframe_rejected() {
        let err = DashboardConfig::from_json_str(r#"{ "default_timeframe": 14 }"#).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidConfig(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(DashboardConfig::from_json_str(r#"{ "refresh_delay": 5 }"#).is_err());
    }

    #[test]
    fn test_order_count_bounds() {
        let zero = DashboardConfig {
            order_count: 0,
            ..Default::default()
        };
        assert!(zero.validate().is_err());

        let too_many = DashboardConfig {
            order_count: MAX_ORDER_COUNT + 1,
            ..Default::default()
        };
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config = DashboardConfig {
            table_page_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_event_log_capacity_rejected() {
        let err = DashboardConfig::from_json_str(r#"{ "event_log_capacity": 0 }"#).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidConfig(_)));
    }
}

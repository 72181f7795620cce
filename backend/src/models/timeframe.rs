//! Day-count selector
//!
//! The dashboard only offers the last 7, 30 or 90 days. Any other day count
//! coming from a caller is rejected rather than clamped.

use crate::generators::GeneratorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Timeframe {
    Last7Days,
    #[default]
    Last30Days,
    Last90Days,
}

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [
        Timeframe::Last7Days,
        Timeframe::Last30Days,
        Timeframe::Last90Days,
    ];

    /// Number of days covered by the series.
    pub fn days(&self) -> u32 {
        match self {
            Timeframe::Last7Days => 7,
            Timeframe::Last30Days => 30,
            Timeframe::Last90Days => 90,
        }
    }
}

impl TryFrom<u32> for Timeframe {
    type Error = GeneratorError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            7 => Ok(Timeframe::Last7Days),
            30 => Ok(Timeframe::Last30Days),
            90 => Ok(Timeframe::Last90Days),
            other => Err(GeneratorError::InvalidParameter {
                parameter: "timeframe",
                value: other.to_string(),
                reason: "must be one of 7, 30 or 90 days".to_string(),
            }),
        }
    }
}

impl From<Timeframe> for u32 {
    fn from(timeframe: Timeframe) -> Self {
        timeframe.days()
    }
}

impl FromStr for Timeframe {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let days: u32 = s.trim().parse().map_err(|_| GeneratorError::InvalidParameter {
            parameter: "timeframe",
            value: s.to_string(),
            reason: "not a day count".to_string(),
        })?;
        Timeframe::try_from(days)
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Last {} days", self.days())
    }
}

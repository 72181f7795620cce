//! Category share model (pie chart slices)

use serde::{Deserialize, Serialize};

/// A named percentage slice of the category breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub name: String,
    /// Percentage of sales (0-100)
    pub value: u32,
    /// Display color token (`#RRGGBB`)
    pub color: String,
}

impl CategoryShare {
    pub fn new(name: &str, value: u32, color: &str) -> Self {
        Self {
            name: name.to_string(),
            value,
            color: color.to_string(),
        }
    }
}

//! Fixed category breakdown

use crate::models::CategoryShare;

/// (name, percentage, color) for each category, in display order.
const CATEGORY_MIX: [(&str, u32, &str); 5] = [
    ("Electronics", 35, "#0088FE"),
    ("Clothing", 25, "#00C49F"),
    ("Books", 20, "#FFBB28"),
    ("Home & Garden", 15, "#FF8042"),
    ("Sports", 5, "#8884D8"),
];

/// The fixed 5-category sales mix. Values always sum to 100.
pub fn generate_category_mix() -> Vec<CategoryShare> {
    CATEGORY_MIX
        .iter()
        .map(|(name, value, color)| CategoryShare::new(name, *value, color))
        .collect()
}

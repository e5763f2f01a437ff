use std::collections::HashMap;

use serde::Deserialize;

/// A submitted project brief. Immutable for the lifetime of one generation
/// request; everything downstream (classification, financials, narrative)
/// is derived from it.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectBrief {
    pub title: String,
    pub short_description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Free-form numeric overrides for the financial projector
    /// (price_per_unit, variable_cost, fixed_annual, capex, labor, ...).
    #[serde(default)]
    pub additional: Option<HashMap<String, f64>>,
}

fn default_currency() -> String {
    "INR".to_string()
}

impl ProjectBrief {
    /// Looks up a numeric override by key, falling back to the documented
    /// default. Missing inputs never fail.
    pub fn override_or(&self, key: &str, default: f64) -> f64 {
        self.additional
            .as_ref()
            .and_then(|m| m.get(key))
            .copied()
            .unwrap_or(default)
    }
}

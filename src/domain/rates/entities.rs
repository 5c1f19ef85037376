pub use super::value_objects::{Rate, RateChange};
use serde::{Deserialize, Serialize};

/// Domain entity - one country's policy rate as published by the refresh scripts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRecord {
    pub country: String,
    pub flag: String,
    pub rate: Rate,
    /// Display string, never parsed
    pub date: String,
    pub change: RateChange,
    #[serde(default)]
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl RateRecord {
    pub fn new(
        country: impl Into<String>,
        flag: impl Into<String>,
        rate: f64,
        date: impl Into<String>,
        change: f64,
    ) -> Self {
        Self {
            country: country.into(),
            flag: flag.into(),
            rate: Rate::from(rate),
            date: date.into(),
            change: RateChange::from(change),
            currency: String::new(),
            source: None,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Country matches case-insensitively, flag only as a literal substring.
    /// `needle_lower` is `needle` lowercased once by the caller.
    pub fn matches(&self, needle: &str, needle_lower: &str) -> bool {
        self.country.to_lowercase().contains(needle_lower) || self.flag.contains(needle)
    }
}

use derive_more::{Constructor, Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

/// Records at or below this rate are left out of average/max/min.
/// Keeps deeply negative regimes from dragging the headline numbers.
pub const STATS_EXCLUSION_THRESHOLD: f64 = -1.0;

/// Marker shown when a rate did not move since the previous observation
pub const NO_CHANGE_LABEL: &str = "변동없음";

/// Value Object - policy rate in percent, may be negative
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Constructor, Display, Serialize, Deserialize)]
pub struct Rate(f64);

impl Rate {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn counts_toward_stats(&self) -> bool {
        self.0 > STATS_EXCLUSION_THRESHOLD
    }
}

/// Value Object - signed delta since the previous observation, percentage points
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Constructor, Display, Serialize, Deserialize)]
pub struct RateChange(f64);

impl RateChange {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn direction(&self) -> ChangeDirection {
        if self.0 > 0.0 {
            ChangeDirection::Up
        } else if self.0 < 0.0 {
            ChangeDirection::Down
        } else {
            ChangeDirection::Unchanged
        }
    }
}

/// Sign of a rate change; the string form doubles as the CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    #[strum(serialize = "change-up")]
    Up,
    #[strum(serialize = "change-down")]
    Down,
    #[strum(serialize = "change-none")]
    Unchanged,
}

impl ChangeDirection {
    pub fn css_class(&self) -> &str {
        self.as_ref()
    }
}

/// Styled text for a rate change: `+0.25%`, `-0.5%` or the no-change marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeAnnotation {
    pub direction: ChangeDirection,
    pub text: String,
}

impl From<RateChange> for ChangeAnnotation {
    fn from(change: RateChange) -> Self {
        let direction = change.direction();
        let text = match direction {
            ChangeDirection::Up => format!("+{}%", change.value()),
            // the minus sign is already part of the value
            ChangeDirection::Down => format!("{}%", change.value()),
            ChangeDirection::Unchanged => NO_CHANGE_LABEL.to_string(),
        };
        Self { direction, text }
    }
}

/// Two decimals plus a percent sign, used for rates and statistics alike
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(format_percent(5.5), "5.50%");
        assert_eq!(format_percent(-0.1), "-0.10%");
        assert_eq!(format_percent(0.0), "0.00%");
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(!Rate::new(-1.0).counts_toward_stats());
        assert!(Rate::new(-0.99).counts_toward_stats());
    }

    #[test]
    fn css_classes_are_distinct() {
        let classes: Vec<String> = ChangeDirection::iter().map(|d| d.as_ref().to_owned()).collect();
        assert_eq!(classes, vec!["change-up", "change-down", "change-none"]);
    }
}

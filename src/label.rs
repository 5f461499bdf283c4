//! Toxin-label computation: the nutrition-facts-style breakdown rendered
//! for one food's detail payload.

use serde::{Deserialize, Serialize};

use crate::models::{FoodDetail, FoodToxinDetail};

/// Severity of one toxin's share of its daily reference value.
///
/// Tiers partition `[0, ∞)` with inclusive lower bounds: `>= 75` is high,
/// `>= 25` is medium, everything below is low.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

const HIGH_THRESHOLD: f64 = 75.0;
const MEDIUM_THRESHOLD: f64 = 25.0;

impl Severity {
    pub fn from_percent(percent: f64) -> Self {
        if percent >= HIGH_THRESHOLD {
            Severity::High
        } else if percent >= MEDIUM_THRESHOLD {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

/// Percent of the daily reference value an amount represents.
///
/// A missing or non-positive reference value means the percentage is not
/// computable; that is reported as 0, not as an error.
pub fn percent_daily_value(amount: f64, daily_value: Option<f64>) -> f64 {
    match daily_value {
        Some(dv) if dv > 0.0 => (amount / dv) * 100.0,
        _ => 0.0,
    }
}

/// One rendered line of the label.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LabelLine {
    pub name: String,
    /// `"<amount> <unit>"`, no conversion or rounding.
    pub amount: String,
    /// Percent rounded to one decimal place, suffixed with `%`.
    pub percent: String,
    pub severity: Severity,
}

impl LabelLine {
    pub fn from_toxin(toxin: &FoodToxinDetail) -> Self {
        let percent = percent_daily_value(toxin.amount, toxin.daily_value);

        LabelLine {
            name: toxin.name.clone(),
            amount: format!("{} {}", toxin.amount, toxin.unit),
            percent: format!("{percent:.1}%"),
            // Tiered on the raw percent, before display rounding.
            severity: Severity::from_percent(percent),
        }
    }
}

/// The full label for one food.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ToxinLabel {
    pub serving_size: String,
    pub lines: Vec<LabelLine>,
}

impl ToxinLabel {
    pub fn from_detail(food: &FoodDetail) -> Self {
        ToxinLabel {
            serving_size: food.serving_size.clone(),
            lines: food.toxins.iter().map(LabelLine::from_toxin).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toxin(amount: f64, daily_value: Option<f64>) -> FoodToxinDetail {
        FoodToxinDetail {
            id: 1,
            name: "Lead".to_string(),
            description: None,
            daily_value,
            unit: "mg".to_string(),
            amount,
        }
    }

    #[test]
    fn percent_is_exact_for_positive_daily_value() {
        assert_eq!(percent_daily_value(80.0, Some(100.0)), 80.0);
        assert_eq!(percent_daily_value(0.5, Some(2.0)), 25.0);
        assert_eq!(percent_daily_value(0.0, Some(100.0)), 0.0);
        assert_eq!(percent_daily_value(1.0, Some(3.0)), 100.0 / 3.0);
    }

    #[test]
    fn missing_or_non_positive_daily_value_yields_zero() {
        assert_eq!(percent_daily_value(80.0, None), 0.0);
        assert_eq!(percent_daily_value(80.0, Some(0.0)), 0.0);
        assert_eq!(percent_daily_value(80.0, Some(-5.0)), 0.0);
    }

    #[test]
    fn severity_tier_boundaries_are_inclusive_on_the_lower_bound() {
        assert_eq!(Severity::from_percent(0.0), Severity::Low);
        assert_eq!(Severity::from_percent(24.9), Severity::Low);
        assert_eq!(Severity::from_percent(25.0), Severity::Medium);
        assert_eq!(Severity::from_percent(74.9), Severity::Medium);
        assert_eq!(Severity::from_percent(75.0), Severity::High);
        assert_eq!(Severity::from_percent(350.0), Severity::High);
    }

    #[test]
    fn severity_names_match_display_classes() {
        assert_eq!(Severity::Low.as_str(), "low");
        assert_eq!(Severity::Medium.as_str(), "medium");
        assert_eq!(Severity::High.as_str(), "high");
    }

    #[test]
    fn line_formats_amount_percent_and_tier() {
        let line = LabelLine::from_toxin(&toxin(80.0, Some(100.0)));
        assert_eq!(line.amount, "80 mg");
        assert_eq!(line.percent, "80.0%");
        assert_eq!(line.severity, Severity::High);

        let line = LabelLine::from_toxin(&toxin(20.0, Some(100.0)));
        assert_eq!(line.percent, "20.0%");
        assert_eq!(line.severity, Severity::Low);
    }

    #[test]
    fn fractional_amounts_keep_their_precision() {
        let line = LabelLine::from_toxin(&toxin(0.5, Some(2.0)));
        assert_eq!(line.amount, "0.5 mg");
        assert_eq!(line.percent, "25.0%");
        assert_eq!(line.severity, Severity::Medium);
    }

    #[test]
    fn uncomputable_percent_renders_as_zero() {
        let line = LabelLine::from_toxin(&toxin(80.0, None));
        assert_eq!(line.percent, "0.0%");
        assert_eq!(line.severity, Severity::Low);
    }

    #[test]
    fn label_carries_serving_size_and_one_line_per_toxin() {
        let food = FoodDetail {
            id: 1,
            name: "Tomato".to_string(),
            description: None,
            serving_size: "100 g".to_string(),
            toxins: vec![toxin(80.0, Some(100.0)), toxin(20.0, Some(100.0))],
        };

        let label = ToxinLabel::from_detail(&food);
        assert_eq!(label.serving_size, "100 g");
        assert_eq!(label.lines.len(), 2);
    }
}

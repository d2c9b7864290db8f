use serde::{Deserialize, Serialize};

use super::rules::Firing;

/// Crisp score at or above which an applicant is very eligible.
pub const HIGH_THRESHOLD: f64 = 80.0;
/// Crisp score at or above which an applicant is eligible pending review.
pub const MEDIUM_THRESHOLD: f64 = 50.0;

/// Weighted average of rule consequents by firing strength.
///
/// When no rule fires the score saturates to `0.0` rather than dividing by zero.
pub fn defuzzify<I>(firings: I) -> f64
where
    I: IntoIterator<Item = Firing>,
{
    let (weighted, total) = firings
        .into_iter()
        .fold((0.0_f64, 0.0_f64), |(weighted, total), firing| {
            (
                weighted + firing.strength * firing.consequent,
                total + firing.strength,
            )
        });

    if total == 0.0 {
        0.0
    } else {
        weighted / total
    }
}

/// Discrete eligibility band derived from the crisp score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityCategory {
    High,
    Medium,
    Low,
}

impl EligibilityCategory {
    pub fn label(&self) -> &'static str {
        match self {
            EligibilityCategory::High => "high",
            EligibilityCategory::Medium => "medium",
            EligibilityCategory::Low => "low",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EligibilityCategory::High => "very eligible",
            EligibilityCategory::Medium => "eligible, needs further review",
            EligibilityCategory::Low => "not eligible",
        }
    }
}

/// Maps a crisp score to its band. Lower bounds are inclusive.
pub fn classify(crisp_score: f64) -> (EligibilityCategory, &'static str) {
    let category = if crisp_score >= HIGH_THRESHOLD {
        EligibilityCategory::High
    } else if crisp_score >= MEDIUM_THRESHOLD {
        EligibilityCategory::Medium
    } else {
        EligibilityCategory::Low
    };
    (category, category.description())
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::engine::EligibilityAssessment;

/// One recorded evaluation with the raw inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant: Option<String>,
    pub credit_score: f64,
    pub debt: f64,
    pub income: f64,
    pub assessment: EligibilityAssessment,
    pub recorded_at: DateTime<Utc>,
}

impl AssessmentRecord {
    /// Crisp score rounded to two decimals for display.
    pub fn display_score(&self) -> String {
        format!("{:.2}", self.assessment.result.crisp_score)
    }
}

/// Append-only store of past assessments owned by the calling layer.
pub trait AssessmentHistory: Send + Sync {
    fn append(&self, record: AssessmentRecord) -> Result<(), HistoryError>;
    /// Most recent records first, at most `limit` of them.
    fn recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, HistoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("history unavailable: {0}")]
    Unavailable(String),
}

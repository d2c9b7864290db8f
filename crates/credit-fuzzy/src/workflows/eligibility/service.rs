use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::engine::EligibilityEngine;
use super::error::InvalidInputError;
use super::history::{AssessmentHistory, AssessmentRecord, HistoryError};
use super::lookup::{LookupError, ScoreLookup};

/// Assessment keyed by customer name; the score comes from the lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedAssessmentRequest {
    pub name: String,
    pub debt: f64,
    pub income: f64,
}

/// Assessment for a caller-supplied credit score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreAssessmentRequest {
    pub credit_score: f64,
    pub debt: f64,
    pub income: f64,
}

/// Service composing the score lookup, the engine, and the assessment history.
pub struct EligibilityService<L, H> {
    lookup: Arc<L>,
    history: Arc<H>,
    engine: Arc<EligibilityEngine>,
}

impl<L, H> EligibilityService<L, H>
where
    L: ScoreLookup + 'static,
    H: AssessmentHistory + 'static,
{
    pub fn new(lookup: Arc<L>, history: Arc<H>, engine: EligibilityEngine) -> Self {
        Self {
            lookup,
            history,
            engine: Arc::new(engine),
        }
    }

    pub fn engine(&self) -> &EligibilityEngine {
        &self.engine
    }

    /// Resolve the customer's score, evaluate, and record the result.
    pub fn assess_by_name(
        &self,
        request: NamedAssessmentRequest,
    ) -> Result<AssessmentRecord, EligibilityServiceError> {
        let NamedAssessmentRequest { name, debt, income } = request;
        let name = name.trim().to_string();

        let credit_score = match self.lookup.resolve(&name) {
            Ok(score) => score,
            Err(err) => {
                warn!(applicant = %name, error = %err, "credit score lookup failed");
                return Err(err.into());
            }
        };

        self.record(Some(name), credit_score, debt, income)
    }

    /// Evaluate a score that was resolved elsewhere, and record the result.
    pub fn assess_score(
        &self,
        request: ScoreAssessmentRequest,
    ) -> Result<AssessmentRecord, EligibilityServiceError> {
        let ScoreAssessmentRequest {
            credit_score,
            debt,
            income,
        } = request;
        self.record(None, credit_score, debt, income)
    }

    pub fn history(&self, limit: usize) -> Result<Vec<AssessmentRecord>, EligibilityServiceError> {
        Ok(self.history.recent(limit)?)
    }

    fn record(
        &self,
        applicant: Option<String>,
        credit_score: f64,
        debt: f64,
        income: f64,
    ) -> Result<AssessmentRecord, EligibilityServiceError> {
        let assessment = self.engine.assess(credit_score, debt, income)?;

        let record = AssessmentRecord {
            applicant,
            credit_score,
            debt,
            income,
            assessment,
            recorded_at: Utc::now(),
        };
        self.history.append(record.clone())?;

        info!(
            applicant = record.applicant.as_deref().unwrap_or("<direct>"),
            crisp_score = record.assessment.result.crisp_score,
            category = record.assessment.result.category.label(),
            "eligibility assessment recorded"
        );

        Ok(record)
    }
}

/// Error raised by the eligibility service.
#[derive(Debug, thiserror::Error)]
pub enum EligibilityServiceError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    #[error(transparent)]
    History(#[from] HistoryError),
}

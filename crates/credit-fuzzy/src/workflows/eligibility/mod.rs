//! Credit eligibility by fuzzy inference.
//!
//! Two crisp inputs, a credit score and a debt-to-income ratio, are fuzzified into
//! low/medium/high degrees, combined through a four-rule base with minimum as AND,
//! and reduced to one crisp score by a strength-weighted average of each rule's
//! constant consequent. The score is then banded into high/medium/low eligibility.

pub mod defuzzify;
pub mod engine;
pub mod error;
pub mod history;
pub mod lookup;
pub mod membership;
pub mod router;
pub mod rules;
pub mod screening;
pub mod service;

#[cfg(test)]
mod tests;

pub use defuzzify::{classify, defuzzify, EligibilityCategory};
pub use engine::{
    debt_ratio, EligibilityAssessment, EligibilityEngine, EngineConfig, InferenceResult,
    PartitionConfig,
};
pub use error::{EligibilityError, FuzzyConfigError, InvalidInputError};
pub use history::{AssessmentHistory, AssessmentRecord, HistoryError};
pub use lookup::{LookupError, ScoreLookup, ScoreTableImportError, StaticScoreTable};
pub use membership::{evaluate, CurvePoint, DegreeTriple, Shape, Term, Variable};
pub use router::{eligibility_router, CurveView};
pub use rules::{fire, Firing, Firings, Rule, RuleBase};
pub use screening::{quick_screen, ScreeningVerdict};
pub use service::{
    EligibilityService, EligibilityServiceError, NamedAssessmentRequest, ScoreAssessmentRequest,
};

/// Scores one applicant with the standard shapes and rules.
pub fn evaluate_eligibility(
    credit_score: f64,
    debt: f64,
    income: f64,
) -> Result<InferenceResult, EligibilityError> {
    let engine = EligibilityEngine::standard()?;
    Ok(engine.evaluate(credit_score, debt, income)?)
}

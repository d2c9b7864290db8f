use super::membership::Term;

/// Malformed shape or rule configuration, raised while the engine is being built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FuzzyConfigError {
    #[error("shape breakpoints must be finite (found [{lower}, {upper}])")]
    NonFinite { lower: f64, upper: f64 },
    #[error("shape breakpoints must be non-decreasing (found [{lower}, {upper}])")]
    NonMonotonic { lower: f64, upper: f64 },
    #[error("shape collapses to a single point at {at}")]
    ZeroWidth { at: f64 },
    #[error("variable '{variable}': {left:?} shape extends past the start of the {right:?} shape")]
    Overlap {
        variable: String,
        left: Term,
        right: Term,
    },
    #[error("rule {index} has a non-finite consequent")]
    InvalidConsequent { index: usize },
    #[error("rule base must contain at least one rule")]
    EmptyRuleBase,
}

/// Raw evaluation inputs the engine refuses to score.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("{field} must be a finite number (found {value})")]
    NonFinite { field: &'static str, value: f64 },
    #[error("income must be non-zero to compute a debt ratio")]
    ZeroIncome,
}

/// Failure of the one-shot [`evaluate_eligibility`](super::evaluate_eligibility) entry point.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EligibilityError {
    #[error(transparent)]
    Config(#[from] FuzzyConfigError),
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}

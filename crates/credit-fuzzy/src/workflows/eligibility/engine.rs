use serde::{Deserialize, Serialize};
use tracing::debug;

use super::defuzzify::{classify, defuzzify, EligibilityCategory};
use super::error::{FuzzyConfigError, InvalidInputError};
use super::membership::{DegreeTriple, Shape, Variable};
use super::rules::{fire, Firing, RuleBase};
use super::screening::{quick_screen, ScreeningVerdict};

/// Low/medium/high shapes for one input variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionConfig {
    pub low: Shape,
    pub medium: Shape,
    pub high: Shape,
}

/// Shapes and rules the engine is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub credit_score: PartitionConfig,
    pub debt_ratio: PartitionConfig,
    pub rules: RuleBase,
}

impl EngineConfig {
    /// Credit score partitioned at 500/750 over 0..850, debt ratio (percent) at 30/60
    /// over 0..100, and the four standard rules.
    pub fn standard() -> Self {
        Self {
            credit_score: PartitionConfig {
                low: Shape::fixed(0.0, 500.0),
                medium: Shape::fixed(500.0, 750.0),
                high: Shape::fixed(750.0, 850.0),
            },
            debt_ratio: PartitionConfig {
                low: Shape::fixed(0.0, 30.0),
                medium: Shape::fixed(30.0, 60.0),
                high: Shape::fixed(60.0, 100.0),
            },
            rules: RuleBase::standard(),
        }
    }
}

/// Crisp outcome of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult {
    pub crisp_score: f64,
    pub category: EligibilityCategory,
    pub description: String,
}

/// Evaluation outcome together with the intermediate values that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityAssessment {
    pub result: InferenceResult,
    pub debt_ratio: f64,
    pub credit_degrees: DegreeTriple,
    pub debt_ratio_degrees: DegreeTriple,
    pub firings: Vec<Firing>,
    pub screening: ScreeningVerdict,
}

/// Stateless fuzzy engine; every call is a pure function of its arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct EligibilityEngine {
    credit_score: Variable,
    debt_ratio: Variable,
    rules: RuleBase,
}

impl EligibilityEngine {
    pub fn new(config: EngineConfig) -> Result<Self, FuzzyConfigError> {
        let EngineConfig {
            credit_score,
            debt_ratio,
            rules,
        } = config;

        let credit_score = Variable::new(
            "credit score",
            credit_score.low,
            credit_score.medium,
            credit_score.high,
        )?;
        let debt_ratio = Variable::new(
            "debt ratio",
            debt_ratio.low,
            debt_ratio.medium,
            debt_ratio.high,
        )?;

        Ok(Self {
            credit_score,
            debt_ratio,
            rules,
        })
    }

    pub fn standard() -> Result<Self, FuzzyConfigError> {
        Self::new(EngineConfig::standard())
    }

    pub fn credit_score_variable(&self) -> &Variable {
        &self.credit_score
    }

    pub fn debt_ratio_variable(&self) -> &Variable {
        &self.debt_ratio
    }

    pub fn rules(&self) -> &RuleBase {
        &self.rules
    }

    /// Scores an already-resolved credit score against a monthly debt/income pair.
    pub fn evaluate(
        &self,
        credit_score: f64,
        debt: f64,
        income: f64,
    ) -> Result<InferenceResult, InvalidInputError> {
        self.assess(credit_score, debt, income)
            .map(|assessment| assessment.result)
    }

    /// Like [`evaluate`](Self::evaluate) but keeps the degrees, firings and screening verdict.
    pub fn assess(
        &self,
        credit_score: f64,
        debt: f64,
        income: f64,
    ) -> Result<EligibilityAssessment, InvalidInputError> {
        ensure_finite("credit_score", credit_score)?;
        let ratio = debt_ratio(debt, income)?;

        let credit_degrees = self.credit_score.evaluate(credit_score);
        let debt_ratio_degrees = self.debt_ratio.evaluate(ratio);
        let firings: Vec<Firing> =
            fire(&self.rules, &credit_degrees, &debt_ratio_degrees).collect();
        let crisp_score = defuzzify(firings.iter().copied());
        let (category, description) = classify(crisp_score);

        debug!(
            credit_score,
            debt_ratio = ratio,
            crisp_score,
            category = category.label(),
            "eligibility evaluated"
        );

        Ok(EligibilityAssessment {
            result: InferenceResult {
                crisp_score,
                category,
                description: description.to_string(),
            },
            debt_ratio: ratio,
            screening: quick_screen(&credit_degrees, &debt_ratio_degrees),
            credit_degrees,
            debt_ratio_degrees,
            firings,
        })
    }
}

/// Debt as a percentage of income.
pub fn debt_ratio(debt: f64, income: f64) -> Result<f64, InvalidInputError> {
    ensure_finite("debt", debt)?;
    ensure_finite("income", income)?;
    if income == 0.0 {
        return Err(InvalidInputError::ZeroIncome);
    }

    let ratio = (debt / income) * 100.0;
    ensure_finite("debt_ratio", ratio)?;
    Ok(ratio)
}

fn ensure_finite(field: &'static str, value: f64) -> Result<(), InvalidInputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidInputError::NonFinite { field, value })
    }
}

use super::common::*;
use crate::workflows::eligibility::defuzzify::EligibilityCategory;
use crate::workflows::eligibility::engine::{debt_ratio, EligibilityEngine, EngineConfig};
use crate::workflows::eligibility::error::{EligibilityError, FuzzyConfigError, InvalidInputError};
use crate::workflows::eligibility::membership::DegreeTriple;
use crate::workflows::eligibility::screening::ScreeningVerdict;
use crate::workflows::eligibility::evaluate_eligibility;

#[test]
fn strong_credit_with_light_debt_is_very_eligible() {
    let assessment = engine()
        .assess(750.0, 1000.0, 5000.0)
        .expect("valid inputs");

    assert_eq!(assessment.debt_ratio, 20.0);
    assert_eq!(
        assessment.credit_degrees,
        DegreeTriple {
            low: 0.0,
            medium: 0.0,
            high: 1.0
        }
    );
    assert_eq!(
        assessment.debt_ratio_degrees,
        DegreeTriple {
            low: 1.0,
            medium: 0.0,
            high: 0.0
        }
    );
    assert_eq!(assessment.result.crisp_score, 90.0);
    assert_eq!(assessment.result.category, EligibilityCategory::High);
    assert_eq!(assessment.result.description, "very eligible");
    assert_eq!(assessment.screening, ScreeningVerdict::Eligible);
}

#[test]
fn medium_credit_with_light_debt_lands_on_high_boundary() {
    let result = engine().evaluate(680.0, 1000.0, 5000.0).expect("valid inputs");
    assert_eq!(result.crisp_score, 80.0);
    assert_eq!(result.category, EligibilityCategory::High);
}

#[test]
fn medium_credit_with_medium_debt_needs_review() {
    let assessment = engine().assess(680.0, 2000.0, 5000.0).expect("valid inputs");
    assert_eq!(assessment.result.crisp_score, 70.0);
    assert_eq!(assessment.result.category, EligibilityCategory::Medium);
    assert_eq!(assessment.screening, ScreeningVerdict::UnderConsideration);
}

#[test]
fn weak_credit_with_heavy_debt_is_not_eligible() {
    let assessment = engine().assess(400.0, 4000.0, 5000.0).expect("valid inputs");
    assert_eq!(assessment.result.crisp_score, 30.0);
    assert_eq!(assessment.result.category, EligibilityCategory::Low);
    assert_eq!(assessment.screening, ScreeningVerdict::NotEligible);
}

#[test]
fn uncovered_combinations_saturate_to_zero() {
    for (score, debt) in [(400.0, 1000.0), (800.0, 4000.0)] {
        let assessment = engine().assess(score, debt, 5000.0).expect("valid inputs");
        assert!(assessment.firings.iter().all(|firing| firing.strength == 0.0));
        assert_eq!(assessment.result.crisp_score, 0.0);
        assert_eq!(assessment.result.category, EligibilityCategory::Low);
    }
}

#[test]
fn evaluation_is_idempotent() {
    let engine = engine();
    let first = engine.evaluate(720.0, 1500.0, 4200.0).expect("valid inputs");
    let second = engine.evaluate(720.0, 1500.0, 4200.0).expect("valid inputs");
    assert_eq!(first, second);
    assert_eq!(first.crisp_score.to_bits(), second.crisp_score.to_bits());
}

#[test]
fn zero_income_is_rejected_regardless_of_other_inputs() {
    let engine = engine();
    for (score, debt) in [(750.0, 1000.0), (0.0, 0.0), (400.0, -10.0)] {
        assert_eq!(
            engine.evaluate(score, debt, 0.0),
            Err(InvalidInputError::ZeroIncome)
        );
    }
    assert!(engine.evaluate(f64::NAN, 1000.0, 0.0).is_err());
}

#[test]
fn non_finite_inputs_are_rejected() {
    let engine = engine();
    assert_eq!(
        engine.evaluate(f64::INFINITY, 1000.0, 5000.0),
        Err(InvalidInputError::NonFinite {
            field: "credit_score",
            value: f64::INFINITY
        })
    );
    assert!(matches!(
        engine.evaluate(700.0, f64::NAN, 5000.0),
        Err(InvalidInputError::NonFinite { field: "debt", .. })
    ));
    assert!(matches!(
        engine.evaluate(700.0, 1000.0, f64::NEG_INFINITY),
        Err(InvalidInputError::NonFinite { field: "income", .. })
    ));
    assert!(matches!(
        debt_ratio(f64::MAX, f64::MIN_POSITIVE),
        Err(InvalidInputError::NonFinite {
            field: "debt_ratio",
            ..
        })
    ));
}

#[test]
fn engine_config_validates_partition_order() {
    let mut config = EngineConfig::standard();
    config.debt_ratio.medium = shape(20.0, 60.0);

    let err = EligibilityEngine::new(config).expect_err("low overlaps medium");
    assert!(matches!(err, FuzzyConfigError::Overlap { ref variable, .. } if variable == "debt ratio"));
}

#[test]
fn engine_config_round_trips_through_json() {
    let json = serde_json::to_string(&EngineConfig::standard()).expect("config serializes");
    let config: EngineConfig = serde_json::from_str(&json).expect("config parses");
    assert_eq!(config, EngineConfig::standard());
    assert!(EligibilityEngine::new(config).is_ok());
}

#[test]
fn one_shot_entry_point_uses_standard_engine() {
    let result = evaluate_eligibility(750.0, 1000.0, 5000.0).expect("valid inputs");
    assert_eq!(result.category, EligibilityCategory::High);
    assert_eq!(
        evaluate_eligibility(750.0, 1000.0, 0.0),
        Err(EligibilityError::InvalidInput(InvalidInputError::ZeroIncome))
    );
}

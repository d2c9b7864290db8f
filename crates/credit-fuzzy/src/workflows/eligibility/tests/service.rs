use std::sync::Arc;

use super::common::*;
use crate::workflows::eligibility::defuzzify::EligibilityCategory;
use crate::workflows::eligibility::error::InvalidInputError;
use crate::workflows::eligibility::lookup::{LookupError, StaticScoreTable};
use crate::workflows::eligibility::service::{
    EligibilityService, EligibilityServiceError, NamedAssessmentRequest, ScoreAssessmentRequest,
};

fn named(name: &str, debt: f64, income: f64) -> NamedAssessmentRequest {
    NamedAssessmentRequest {
        name: name.to_string(),
        debt,
        income,
    }
}

#[test]
fn assess_by_name_resolves_score_and_records_history() {
    let (service, history) = build_service();

    let record = service
        .assess_by_name(named("Ahmad Zulfikar", 1000.0, 5000.0))
        .expect("assessment succeeds");

    assert_eq!(record.applicant.as_deref(), Some("Ahmad Zulfikar"));
    assert_eq!(record.credit_score, 750.0);
    assert_eq!(record.assessment.result.category, EligibilityCategory::High);
    assert_eq!(record.display_score(), "90.00");
    assert_eq!(history.len(), 1);
}

#[test]
fn unknown_name_fails_before_evaluation() {
    let (service, history) = build_service();

    let err = service
        .assess_by_name(named("Nobody", 1000.0, 5000.0))
        .expect_err("name unknown");

    assert!(matches!(
        err,
        EligibilityServiceError::Lookup(LookupError::NotFound(_))
    ));
    assert_eq!(history.len(), 0);
}

#[test]
fn invalid_input_is_not_recorded() {
    let (service, history) = build_service();

    let err = service
        .assess_by_name(named("Budi Santoso", 1000.0, 0.0))
        .expect_err("zero income");

    assert!(matches!(
        err,
        EligibilityServiceError::InvalidInput(InvalidInputError::ZeroIncome)
    ));
    assert_eq!(history.len(), 0);
}

#[test]
fn history_lists_newest_first() {
    let (service, _) = build_service();
    service
        .assess_by_name(named("Budi Santoso", 2000.0, 5000.0))
        .expect("first");
    service
        .assess_score(ScoreAssessmentRequest {
            credit_score: 400.0,
            debt: 4000.0,
            income: 5000.0,
        })
        .expect("second");

    let records = service.history(10).expect("history readable");

    assert_eq!(records.len(), 2);
    assert!(records[0].applicant.is_none());
    assert_eq!(records[0].assessment.result.category, EligibilityCategory::Low);
    assert_eq!(records[1].applicant.as_deref(), Some("Budi Santoso"));
    assert_eq!(service.history(1).expect("history readable").len(), 1);
}

#[test]
fn history_failures_propagate() {
    let service = EligibilityService::new(
        Arc::new(StaticScoreTable::sample()),
        Arc::new(UnavailableHistory),
        engine(),
    );

    let err = service
        .assess_by_name(named("Gita Puspita", 1000.0, 5000.0))
        .expect_err("history down");

    assert!(matches!(err, EligibilityServiceError::History(_)));
}

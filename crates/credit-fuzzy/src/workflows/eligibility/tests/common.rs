use std::sync::{Arc, Mutex};

use crate::workflows::eligibility::history::{AssessmentHistory, AssessmentRecord, HistoryError};
use crate::workflows::eligibility::lookup::StaticScoreTable;
use crate::workflows::eligibility::membership::Shape;
use crate::workflows::eligibility::{eligibility_router, EligibilityEngine, EligibilityService};

pub(super) fn shape(lower: f64, upper: f64) -> Shape {
    Shape::new(lower, upper).expect("valid shape")
}

pub(super) fn credit_shapes() -> (Shape, Shape, Shape) {
    (shape(0.0, 500.0), shape(500.0, 750.0), shape(750.0, 850.0))
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::standard().expect("standard engine builds")
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[derive(Default, Clone)]
pub(super) struct MemoryHistory {
    records: Arc<Mutex<Vec<AssessmentRecord>>>,
}

impl MemoryHistory {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("history mutex poisoned").len()
    }
}

impl AssessmentHistory for MemoryHistory {
    fn append(&self, record: AssessmentRecord) -> Result<(), HistoryError> {
        self.records
            .lock()
            .expect("history mutex poisoned")
            .push(record);
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, HistoryError> {
        let guard = self.records.lock().expect("history mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}

pub(super) struct UnavailableHistory;

impl AssessmentHistory for UnavailableHistory {
    fn append(&self, _record: AssessmentRecord) -> Result<(), HistoryError> {
        Err(HistoryError::Unavailable("disk full".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, HistoryError> {
        Err(HistoryError::Unavailable("disk full".to_string()))
    }
}

pub(super) fn build_service() -> (
    Arc<EligibilityService<StaticScoreTable, MemoryHistory>>,
    MemoryHistory,
) {
    let history = MemoryHistory::default();
    let service = Arc::new(EligibilityService::new(
        Arc::new(StaticScoreTable::sample()),
        Arc::new(history.clone()),
        engine(),
    ));
    (service, history)
}

pub(super) fn router() -> axum::Router {
    let (service, _) = build_service();
    eligibility_router(service)
}

use credit_fuzzy::config::ScoringConfig;
use credit_fuzzy::error::AppError;
use credit_fuzzy::workflows::eligibility::{
    AssessmentHistory, AssessmentRecord, HistoryError, StaticScoreTable,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentHistory {
    records: Arc<Mutex<Vec<AssessmentRecord>>>,
}

impl AssessmentHistory for InMemoryAssessmentHistory {
    fn append(&self, record: AssessmentRecord) -> Result<(), HistoryError> {
        let mut guard = self.records.lock().expect("history mutex poisoned");
        guard.push(record);
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<AssessmentRecord>, HistoryError> {
        let guard = self.records.lock().expect("history mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}

impl InMemoryAssessmentHistory {
    pub(crate) fn len(&self) -> usize {
        self.records.lock().expect("history mutex poisoned").len()
    }
}

/// Score table from an explicit path, else the configured path, else the bundled sample.
pub(crate) fn load_score_table(
    override_path: Option<PathBuf>,
    config: &ScoringConfig,
) -> Result<StaticScoreTable, AppError> {
    match override_path.or_else(|| config.score_table.clone()) {
        Some(path) => {
            let table = StaticScoreTable::from_path(&path)?;
            info!(path = %path.display(), entries = table.len(), "loaded credit score table");
            Ok(table)
        }
        None => Ok(StaticScoreTable::sample()),
    }
}

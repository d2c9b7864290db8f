use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::history::AssessmentHistory;
use super::lookup::{LookupError, ScoreLookup};
use super::membership::{CurvePoint, Variable};
use super::service::{
    EligibilityService, EligibilityServiceError, NamedAssessmentRequest, ScoreAssessmentRequest,
};

const DEFAULT_HISTORY_LIMIT: usize = 20;
const DEFAULT_CURVE_STEPS: usize = 51;
const MAX_CURVE_STEPS: usize = 1001;

/// Router builder exposing the eligibility endpoints.
pub fn eligibility_router<L, H>(service: Arc<EligibilityService<L, H>>) -> Router
where
    L: ScoreLookup + 'static,
    H: AssessmentHistory + 'static,
{
    Router::new()
        .route("/api/v1/eligibility", post(assess_by_name_handler::<L, H>))
        .route(
            "/api/v1/eligibility/score",
            post(assess_score_handler::<L, H>),
        )
        .route("/api/v1/eligibility/history", get(history_handler::<L, H>))
        .route("/api/v1/eligibility/curves", get(curves_handler::<L, H>))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct HistoryQuery {
    pub(crate) limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CurveQuery {
    pub(crate) steps: Option<usize>,
}

/// Sampled membership curves of one input variable.
#[derive(Debug, Clone, Serialize)]
pub struct CurveView {
    pub variable: String,
    pub points: Vec<CurvePoint>,
}

impl CurveView {
    pub fn from_variable(variable: &Variable, steps: usize) -> Self {
        Self {
            variable: variable.name().to_string(),
            points: variable.sample_curve(steps),
        }
    }
}

pub(crate) async fn assess_by_name_handler<L, H>(
    State(service): State<Arc<EligibilityService<L, H>>>,
    axum::Json(request): axum::Json<NamedAssessmentRequest>,
) -> Response
where
    L: ScoreLookup + 'static,
    H: AssessmentHistory + 'static,
{
    match service.assess_by_name(request) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn assess_score_handler<L, H>(
    State(service): State<Arc<EligibilityService<L, H>>>,
    axum::Json(request): axum::Json<ScoreAssessmentRequest>,
) -> Response
where
    L: ScoreLookup + 'static,
    H: AssessmentHistory + 'static,
{
    match service.assess_score(request) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn history_handler<L, H>(
    State(service): State<Arc<EligibilityService<L, H>>>,
    Query(query): Query<HistoryQuery>,
) -> Response
where
    L: ScoreLookup + 'static,
    H: AssessmentHistory + 'static,
{
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    match service.history(limit) {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn curves_handler<L, H>(
    State(service): State<Arc<EligibilityService<L, H>>>,
    Query(query): Query<CurveQuery>,
) -> Response
where
    L: ScoreLookup + 'static,
    H: AssessmentHistory + 'static,
{
    let steps = query
        .steps
        .unwrap_or(DEFAULT_CURVE_STEPS)
        .min(MAX_CURVE_STEPS);
    let engine = service.engine();
    let payload = json!({
        "credit_score": CurveView::from_variable(engine.credit_score_variable(), steps),
        "debt_ratio": CurveView::from_variable(engine.debt_ratio_variable(), steps),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

fn error_response(err: EligibilityServiceError) -> Response {
    let status = match &err {
        EligibilityServiceError::Lookup(LookupError::NotFound(_)) => StatusCode::NOT_FOUND,
        EligibilityServiceError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EligibilityServiceError::Lookup(LookupError::Unavailable(_))
        | EligibilityServiceError::History(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({
        "error": err.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}

use crate::cli::ServeArgs;
use crate::infra::{load_score_table, AppState, InMemoryAssessmentHistory};
use crate::routes::with_eligibility_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use credit_fuzzy::config::AppConfig;
use credit_fuzzy::error::AppError;
use credit_fuzzy::telemetry;
use credit_fuzzy::workflows::eligibility::{EligibilityEngine, EligibilityService};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = EligibilityEngine::standard()?;
    let score_table = load_score_table(None, &config.scoring)?;
    let history = Arc::new(InMemoryAssessmentHistory::default());
    let eligibility_service = Arc::new(EligibilityService::new(
        Arc::new(score_table),
        history,
        engine,
    ));

    let app = with_eligibility_routes(eligibility_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "credit eligibility service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

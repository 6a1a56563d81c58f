use crate::cli::ServeArgs;
use crate::infra::{load_cost_index, load_predictor, AppState};
use crate::routes::with_prediction_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use salary_ai::config::AppConfig;
use salary_ai::error::AppError;
use salary_ai::prediction::{install_city_cost_index, SalaryPredictionService};
use salary_ai::telemetry;
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

    telemetry::init(&config.telemetry)?;

    // The override must land before the first read of the process-wide index.
    if let Some(index) = load_cost_index(&config.model)? {
        install_city_cost_index(index)?;
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let predictor = Arc::new(load_predictor(&config.model)?);
    let prediction_service = Arc::new(SalaryPredictionService::new(predictor));

    let app = with_prediction_routes(prediction_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "salary prediction service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use salary_ai::prediction::{prediction_router, SalaryPredictionService, SalaryPredictor};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_prediction_routes<P>(service: Arc<SalaryPredictionService<P>>) -> axum::Router
where
    P: SalaryPredictor + 'static,
{
    prediction_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::demo_artifact;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use salary_ai::prediction::LinearModel;
    use serde_json::Value;
    use tower::ServiceExt;

    fn build_router() -> axum::Router {
        let model = LinearModel::from_artifact(demo_artifact()).expect("demo artifact loads");
        with_prediction_routes(Arc::new(SalaryPredictionService::new(Arc::new(model))))
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let router = build_router();

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024).await.expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(payload.get("status"), Some(&json!("ok")));
    }

    #[tokio::test]
    async fn prediction_route_is_mounted() {
        let router = build_router();
        let body = json!({
            "education": "Bachelor's",
            "location": "Urban",
            "job_title": "Software Engineer",
            "experience_years": 2,
            "age": 24,
            "gender": "Male",
            "current_city": "Pune",
        });

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/salary/predictions")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        assert!(payload.pointer("/result/predicted_salary").is_some());
    }
}

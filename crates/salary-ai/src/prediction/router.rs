use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{Education, Gender, JobTitle, WorkLocation};
use super::predictor::SalaryPredictor;
use super::service::{PredictionRequest, PredictionServiceError, SalaryPredictionService};
use super::whatif::WhatIfScenario;

/// Router builder exposing the prediction pipeline over HTTP.
pub fn prediction_router<P>(service: Arc<SalaryPredictionService<P>>) -> Router
where
    P: SalaryPredictor + 'static,
{
    Router::new()
        .route("/api/v1/salary/predictions", post(predict_handler::<P>))
        .route("/api/v1/salary/catalog", get(catalog_handler::<P>))
        .with_state(service)
}

pub(crate) async fn predict_handler<P>(
    State(service): State<Arc<SalaryPredictionService<P>>>,
    axum::Json(request): axum::Json<PredictionRequest>,
) -> Response
where
    P: SalaryPredictor + 'static,
{
    match service.predict(&request) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(PredictionServiceError::Validation(error)) => {
            let missing: Vec<&str> = error
                .missing_fields()
                .iter()
                .map(|field| field.label())
                .collect();
            let payload = json!({
                "error": error.to_string(),
                "missing_fields": missing,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(PredictionServiceError::Predictor(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

/// Selectable options and known cities, so the external form can populate
/// its controls from one call.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub educations: Vec<&'static str>,
    pub locations: Vec<&'static str>,
    pub job_titles: Vec<&'static str>,
    pub genders: Vec<&'static str>,
    pub scenarios: Vec<WhatIfScenario>,
    pub cities: Vec<CityMultiplierEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CityMultiplierEntry {
    pub city: String,
    pub multiplier: f64,
}

pub(crate) async fn catalog_handler<P>(
    State(service): State<Arc<SalaryPredictionService<P>>>,
) -> axum::Json<CatalogView>
where
    P: SalaryPredictor + 'static,
{
    let cities = service
        .cost_index()
        .cities()
        .map(|(city, multiplier)| CityMultiplierEntry {
            city: city.to_string(),
            multiplier,
        })
        .collect();

    axum::Json(CatalogView {
        educations: Education::ALL.iter().map(|value| value.label()).collect(),
        locations: WorkLocation::ALL.iter().map(|value| value.label()).collect(),
        job_titles: JobTitle::ALL.iter().map(|value| value.label()).collect(),
        genders: Gender::ALL.iter().map(|value| value.label()).collect(),
        scenarios: WhatIfScenario::ALL.to_vec(),
        cities,
    })
}

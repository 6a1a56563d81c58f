use metrics_exporter_prometheus::PrometheusHandle;
use salary_ai::config::ModelConfig;
use salary_ai::error::AppError;
use salary_ai::prediction::{
    CityCostIndex, Education, Gender, JobTitle, LinearModel, ModelArtifact, WhatIfScenario,
    WorkLocation, FEATURE_COLUMNS, FEATURE_SCHEMA_VERSION,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Built-in artifact backing the `predict` subcommand and local development
/// when `MODEL_PATH` is unset. Coefficients are demo data, not a trained
/// model.
pub(crate) fn demo_artifact() -> ModelArtifact {
    ModelArtifact {
        schema_version: FEATURE_SCHEMA_VERSION,
        feature_columns: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
        intercept: 12_000.0,
        coefficients: [6_500.0, 1_800.0, 2_400.0, 3_200.0, 150.0, 0.0],
        feature_importances: [0.35, 0.3, 0.1, 0.2, 0.04, 0.01],
    }
}

pub(crate) fn load_predictor(config: &ModelConfig) -> Result<LinearModel, AppError> {
    match &config.artifact_path {
        Some(path) => {
            let model = LinearModel::from_path(path)?;
            info!(path = %path.display(), "loaded model artifact");
            Ok(model)
        }
        None => {
            warn!("MODEL_PATH not set; using the built-in demo artifact");
            Ok(LinearModel::from_artifact(demo_artifact())?)
        }
    }
}

pub(crate) fn load_cost_index(config: &ModelConfig) -> Result<Option<CityCostIndex>, AppError> {
    match &config.cost_index_path {
        Some(path) => {
            let index = CityCostIndex::from_path(path)?;
            info!(path = %path.display(), cities = index.len(), "loaded cost index override");
            Ok(Some(index))
        }
        None => Ok(None),
    }
}

fn expected(options: &[&str]) -> String {
    options.join(", ")
}

pub(crate) fn parse_education(raw: &str) -> Result<Education, String> {
    Education::ALL
        .iter()
        .copied()
        .find(|value| value.label().eq_ignore_ascii_case(raw.trim()))
        .ok_or_else(|| {
            let labels: Vec<&str> = Education::ALL.iter().map(|value| value.label()).collect();
            format!("unknown education '{raw}' (expected one of: {})", expected(&labels))
        })
}

pub(crate) fn parse_location(raw: &str) -> Result<WorkLocation, String> {
    WorkLocation::ALL
        .iter()
        .copied()
        .find(|value| value.label().eq_ignore_ascii_case(raw.trim()))
        .ok_or_else(|| {
            let labels: Vec<&str> = WorkLocation::ALL.iter().map(|value| value.label()).collect();
            format!("unknown location '{raw}' (expected one of: {})", expected(&labels))
        })
}

pub(crate) fn parse_job_title(raw: &str) -> Result<JobTitle, String> {
    JobTitle::ALL
        .iter()
        .copied()
        .find(|value| value.label().eq_ignore_ascii_case(raw.trim()))
        .ok_or_else(|| {
            let labels: Vec<&str> = JobTitle::ALL.iter().map(|value| value.label()).collect();
            format!("unknown job title '{raw}' (expected one of: {})", expected(&labels))
        })
}

pub(crate) fn parse_gender(raw: &str) -> Result<Gender, String> {
    Gender::ALL
        .iter()
        .copied()
        .find(|value| value.label().eq_ignore_ascii_case(raw.trim()))
        .ok_or_else(|| {
            let labels: Vec<&str> = Gender::ALL.iter().map(|value| value.label()).collect();
            format!("unknown gender '{raw}' (expected one of: {})", expected(&labels))
        })
}

pub(crate) fn parse_scenario(raw: &str) -> Result<WhatIfScenario, String> {
    match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "upgrade_education" => Ok(WhatIfScenario::UpgradeEducation),
        "add_experience" => Ok(WhatIfScenario::AddExperience),
        _ => Err(format!(
            "unknown scenario '{raw}' (expected one of: upgrade_education, add_experience)"
        )),
    }
}

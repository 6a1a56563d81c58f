use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::prediction::artifact::{LinearModel, ModelArtifact};
use crate::prediction::domain::{Education, Gender, JobTitle, ProfileSubmission, WorkLocation};
use crate::prediction::encoding::{
    FeatureVector, FEATURE_COLUMNS, FEATURE_COUNT, FEATURE_SCHEMA_VERSION,
};
use crate::prediction::predictor::{PredictorError, SalaryPredictor};
use crate::prediction::service::{PredictionRequest, SalaryPredictionService};

pub(super) fn submission() -> ProfileSubmission {
    ProfileSubmission {
        education: Some(Education::Bachelors),
        location: Some(WorkLocation::Urban),
        job_title: Some(JobTitle::SoftwareEngineer),
        experience_years: 2,
        age: 24,
        gender: Gender::Male,
        current_city: "Pune".to_string(),
        growth_rate_pct: 7,
    }
}

pub(super) fn request() -> PredictionRequest {
    PredictionRequest {
        profile: submission(),
        target_city: None,
        scenarios: Vec::new(),
    }
}

/// Deterministic predictor returning a fixed salary and counting calls, so
/// tests can assert the predictor is invoked exactly once per submission.
pub(super) struct StubPredictor {
    salary: f64,
    calls: AtomicUsize,
}

impl StubPredictor {
    pub(super) fn returning(salary: f64) -> Self {
        Self {
            salary,
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SalaryPredictor for StubPredictor {
    fn predict(&self, _features: &FeatureVector) -> Result<f64, PredictorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.salary)
    }

    fn feature_importances(&self) -> [f64; FEATURE_COUNT] {
        [0.3, 0.25, 0.15, 0.2, 0.07, 0.03]
    }
}

/// Predictor that always fails, for fatal-propagation assertions.
pub(super) struct FailingPredictor;

impl SalaryPredictor for FailingPredictor {
    fn predict(&self, _features: &FeatureVector) -> Result<f64, PredictorError> {
        Err(PredictorError::NonFinite)
    }

    fn feature_importances(&self) -> [f64; FEATURE_COUNT] {
        [0.0; FEATURE_COUNT]
    }
}

/// Artifact-backed model whose output actually depends on the features, for
/// what-if projections that must move the prediction.
pub(super) fn linear_model() -> LinearModel {
    let artifact = ModelArtifact {
        schema_version: FEATURE_SCHEMA_VERSION,
        feature_columns: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
        intercept: 12_000.0,
        coefficients: [6_500.0, 1_800.0, 2_400.0, 3_200.0, 150.0, 0.0],
        feature_importances: [0.35, 0.3, 0.1, 0.2, 0.04, 0.01],
    };
    LinearModel::from_artifact(artifact).expect("demo artifact matches the feature contract")
}

pub(super) fn stub_service(salary: f64) -> (SalaryPredictionService<StubPredictor>, Arc<StubPredictor>) {
    let predictor = Arc::new(StubPredictor::returning(salary));
    let service = SalaryPredictionService::new(predictor.clone());
    (service, predictor)
}

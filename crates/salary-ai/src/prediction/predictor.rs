use super::encoding::{FeatureVector, FEATURE_COUNT};

/// External regression capability, trained and serialized elsewhere.
///
/// The core calls `predict` exactly once per submission (plus once per
/// requested what-if scenario) and treats any failure as fatal to the
/// request: no retry, no default value.
pub trait SalaryPredictor: Send + Sync {
    /// Predicted monthly salary for the encoded profile.
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictorError>;

    /// Per-feature importances in [`super::encoding::FEATURE_COLUMNS`] order.
    /// Display only; the pipeline never branches on these.
    fn feature_importances(&self) -> [f64; FEATURE_COUNT];
}

#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    #[error("failed to read model artifact: {0}")]
    ArtifactIo(#[from] std::io::Error),
    #[error("invalid model artifact: {0}")]
    ArtifactFormat(#[from] serde_json::Error),
    #[error(
        "model artifact was trained against a different feature contract \
         (expected schema v{expected_version} {expected_columns:?}, \
         found v{found_version} {found_columns:?})"
    )]
    SchemaMismatch {
        expected_version: u32,
        found_version: u32,
        expected_columns: Vec<String>,
        found_columns: Vec<String>,
    },
    #[error("model produced a non-finite prediction")]
    NonFinite,
}

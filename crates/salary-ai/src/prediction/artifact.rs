use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::encoding::{FeatureVector, FEATURE_COLUMNS, FEATURE_COUNT, FEATURE_SCHEMA_VERSION};
use super::predictor::{PredictorError, SalaryPredictor};

/// On-disk representation of the pre-trained regression.
///
/// The numeric content is opaque to this crate: nothing here trains,
/// evaluates, or inspects it beyond the schema handshake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub schema_version: u32,
    pub feature_columns: Vec<String>,
    pub intercept: f64,
    pub coefficients: [f64; FEATURE_COUNT],
    pub feature_importances: [f64; FEATURE_COUNT],
}

/// Pre-trained linear regression loaded from a JSON artifact.
#[derive(Debug, Clone)]
pub struct LinearModel {
    artifact: ModelArtifact,
}

impl LinearModel {
    /// Accept an artifact only if it was trained against the feature
    /// contract this build encodes (`FEATURE_SCHEMA_VERSION` and column
    /// order must both match).
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, PredictorError> {
        let columns_match = artifact.feature_columns.len() == FEATURE_COUNT
            && artifact
                .feature_columns
                .iter()
                .zip(FEATURE_COLUMNS.iter())
                .all(|(found, expected)| found == expected);

        if artifact.schema_version != FEATURE_SCHEMA_VERSION || !columns_match {
            return Err(PredictorError::SchemaMismatch {
                expected_version: FEATURE_SCHEMA_VERSION,
                found_version: artifact.schema_version,
                expected_columns: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
                found_columns: artifact.feature_columns,
            });
        }

        Ok(Self { artifact })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PredictorError> {
        let artifact: ModelArtifact = serde_json::from_reader(reader)?;
        Self::from_artifact(artifact)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PredictorError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }
}

impl SalaryPredictor for LinearModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictorError> {
        let salary = self
            .artifact
            .coefficients
            .iter()
            .zip(features.as_array().iter())
            .map(|(coefficient, value)| coefficient * value)
            .sum::<f64>()
            + self.artifact.intercept;

        if !salary.is_finite() {
            return Err(PredictorError::NonFinite);
        }

        Ok(salary)
    }

    fn feature_importances(&self) -> [f64; FEATURE_COUNT] {
        self.artifact.feature_importances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn artifact() -> ModelArtifact {
        ModelArtifact {
            schema_version: FEATURE_SCHEMA_VERSION,
            feature_columns: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            intercept: 10_000.0,
            coefficients: [5_000.0, 1_000.0, 2_000.0, 3_000.0, 100.0, 0.0],
            feature_importances: [0.35, 0.3, 0.1, 0.2, 0.04, 0.01],
        }
    }

    #[test]
    fn predicts_intercept_plus_weighted_features() {
        let model = LinearModel::from_artifact(artifact()).expect("artifact accepted");
        let features = FeatureVector::from_values([2.0, 3.0, 1.0, 4.0, 30.0, 1.0]);

        let salary = model.predict(&features).expect("prediction succeeds");

        // 10_000 + 10_000 + 3_000 + 2_000 + 12_000 + 3_000 + 0
        assert!((salary - 40_000.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_artifact_with_wrong_schema_version() {
        let mut stale = artifact();
        stale.schema_version = FEATURE_SCHEMA_VERSION + 1;

        match LinearModel::from_artifact(stale) {
            Err(PredictorError::SchemaMismatch { found_version, .. }) => {
                assert_eq!(found_version, FEATURE_SCHEMA_VERSION + 1);
            }
            other => panic!("expected schema mismatch, got {other:?}"),
        }
    }

    #[test]
    fn rejects_artifact_with_reordered_columns() {
        let mut reordered = artifact();
        reordered.feature_columns.swap(0, 1);

        assert!(matches!(
            LinearModel::from_artifact(reordered),
            Err(PredictorError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn loads_from_json_reader() {
        let json = serde_json::to_vec(&artifact()).expect("serialize artifact");
        let model = LinearModel::from_reader(Cursor::new(json)).expect("artifact loads");
        assert_eq!(model.artifact().intercept, 10_000.0);
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = LinearModel::from_path("./does-not-exist.json").expect_err("expected error");
        assert!(matches!(error, PredictorError::ArtifactIo(_)));
    }

    #[test]
    fn non_finite_coefficients_fail_prediction() {
        let mut poisoned = artifact();
        poisoned.coefficients[0] = f64::NAN;
        let model = LinearModel::from_artifact(poisoned).expect("schema still matches");
        let features = FeatureVector::from_values([1.0, 0.0, 1.0, 1.0, 20.0, 0.0]);

        assert!(matches!(
            model.predict(&features),
            Err(PredictorError::NonFinite)
        ));
    }
}

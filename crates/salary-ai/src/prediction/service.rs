use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::banding::SalaryBand;
use super::domain::{PredictionResult, ProfileSubmission};
use super::encoding::encode;
use super::predictor::{PredictorError, SalaryPredictor};
use super::relocation::{city_cost_index, CityCostIndex, RelocationComparison};
use super::report::PredictionReport;
use super::validation::{validate, ValidationError};
use super::whatif::{WhatIfOutcome, WhatIfScenario};

/// One prediction request: the raw profile plus the optional relocation
/// target and the scenarios to project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(flatten)]
    pub profile: ProfileSubmission,
    #[serde(default)]
    pub target_city: Option<String>,
    #[serde(default)]
    pub scenarios: Vec<WhatIfScenario>,
}

/// Everything derived from one submission.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionOutcome {
    pub result: PredictionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relocation: Option<RelocationComparison>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub what_if: Vec<WhatIfOutcome>,
    pub report: PredictionReport,
}

/// Error raised by the prediction pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PredictionServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Predictor(#[from] PredictorError),
}

/// Stateless pipeline over an opaque predictor: validate -> encode ->
/// predict -> band -> relocation / what-if -> report. The only shared data
/// are the read-only constant tables, so concurrent submissions never
/// interact.
pub struct SalaryPredictionService<P> {
    predictor: Arc<P>,
    cost_index: CityCostIndex,
}

impl<P> SalaryPredictionService<P>
where
    P: SalaryPredictor + 'static,
{
    pub fn new(predictor: Arc<P>) -> Self {
        Self::with_cost_index(predictor, city_cost_index().clone())
    }

    pub fn with_cost_index(predictor: Arc<P>, cost_index: CityCostIndex) -> Self {
        Self {
            predictor,
            cost_index,
        }
    }

    pub fn cost_index(&self) -> &CityCostIndex {
        &self.cost_index
    }

    /// Run the full pipeline for one submission.
    ///
    /// Validation failures never reach the predictor; predictor failures are
    /// fatal to the request and propagate untouched.
    pub fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionOutcome, PredictionServiceError> {
        let profile = validate(&request.profile)?;
        let features = encode(&profile);

        let predicted_salary = self.predictor.predict(&features)?;
        let band = SalaryBand::classify(predicted_salary);
        let result = PredictionResult {
            predicted_salary,
            band,
        };
        debug!(
            job_title = profile.job_title.label(),
            predicted_salary, band = band.label(), "prediction computed"
        );

        let relocation = request.target_city.as_deref().map(|destination| {
            self.cost_index
                .compare(predicted_salary, &profile.current_city, destination)
        });

        let mut what_if = Vec::with_capacity(request.scenarios.len());
        for scenario in &request.scenarios {
            let projected = scenario.apply(&features);
            let projected_salary = self.predictor.predict(&projected)?;
            what_if.push(WhatIfOutcome {
                scenario: *scenario,
                scenario_label: scenario.label(),
                predicted_salary: projected_salary,
                band: SalaryBand::classify(projected_salary),
            });
        }

        let report = PredictionReport::build(
            &profile,
            &result,
            relocation.as_ref(),
            &self.predictor.feature_importances(),
        );

        Ok(PredictionOutcome {
            result,
            relocation,
            what_if,
            report,
        })
    }
}

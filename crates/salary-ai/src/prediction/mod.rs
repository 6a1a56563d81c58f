//! Candidate intake, encoding, prediction, and derived insights.
//!
//! The pipeline is a straight line with no state between invocations:
//! validate -> encode -> predict -> band, with relocation comparisons and
//! what-if projections layered on top of the prediction. The regression
//! model sits behind [`SalaryPredictor`] and is consumed as an opaque
//! collaborator.

pub mod advice;
pub mod artifact;
pub mod banding;
pub mod domain;
pub mod encoding;
pub mod predictor;
pub mod relocation;
pub mod report;
pub mod router;
pub mod service;
pub mod validation;
pub mod whatif;

#[cfg(test)]
mod tests;

pub use artifact::{LinearModel, ModelArtifact};
pub use banding::SalaryBand;
pub use domain::{
    CandidateProfile, Education, Gender, JobTitle, PredictionResult, ProfileSubmission,
    WorkLocation,
};
pub use encoding::{encode, FeatureVector, FEATURE_COLUMNS, FEATURE_COUNT, FEATURE_SCHEMA_VERSION};
pub use predictor::{PredictorError, SalaryPredictor};
pub use relocation::{
    city_cost_index, install_city_cost_index, CityCostIndex, CostIndexError, RelocationComparison,
};
pub use report::PredictionReport;
pub use router::{prediction_router, CatalogView};
pub use service::{
    PredictionOutcome, PredictionRequest, PredictionServiceError, SalaryPredictionService,
};
pub use validation::{validate, ProfileField, ValidationError};
pub use whatif::{WhatIfOutcome, WhatIfScenario};

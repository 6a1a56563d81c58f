use serde::{Deserialize, Serialize};

use super::domain::CandidateProfile;

/// Number of features the model consumes.
pub const FEATURE_COUNT: usize = 6;

/// Version of the feature contract between this module and the model
/// artifact. Bump whenever [`FEATURE_COLUMNS`] changes shape or order; an
/// artifact trained against a different version is refused at load time.
pub const FEATURE_SCHEMA_VERSION: u32 = 1;

/// Column names in the exact order the model was trained on. Order is
/// load-bearing: reordering silently corrupts every prediction.
pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] = [
    "education_level",
    "experience",
    "location",
    "job_title",
    "age",
    "gender",
];

/// Human-readable labels for the columns, used by report views.
pub const FEATURE_LABELS: [&str; FEATURE_COUNT] = [
    "Education",
    "Experience",
    "Location",
    "Job Title",
    "Age",
    "Gender",
];

/// Vector slot indices, matching [`FEATURE_COLUMNS`].
pub const EDUCATION_SLOT: usize = 0;
pub const EXPERIENCE_SLOT: usize = 1;
pub const LOCATION_SLOT: usize = 2;
pub const JOB_TITLE_SLOT: usize = 3;
pub const AGE_SLOT: usize = 4;
pub const GENDER_SLOT: usize = 5;

/// Fixed-order numeric encoding of a candidate profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub const fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub const fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Encode a validated profile into the model's feature vector.
///
/// Pure and deterministic. The categorical codes live on the enums
/// themselves, so a value missing from its table is unrepresentable and
/// encoding is total over validated profiles.
pub fn encode(profile: &CandidateProfile) -> FeatureVector {
    FeatureVector([
        profile.education.code() as f64,
        profile.experience_years as f64,
        profile.location.code() as f64,
        profile.job_title.code() as f64,
        profile.age as f64,
        profile.gender.code() as f64,
    ])
}

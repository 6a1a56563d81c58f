use serde::Serialize;

use super::domain::{CandidateProfile, ProfileSubmission};

/// Form selectors that may still hold their placeholder when submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Education,
    WorkLocation,
    JobTitle,
}

impl ProfileField {
    pub const fn label(self) -> &'static str {
        match self {
            ProfileField::Education => "Education",
            ProfileField::WorkLocation => "Work Location",
            ProfileField::JobTitle => "Job Title",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("please fill in the following fields before submitting: {}", join_labels(.0))]
    MissingFields(Vec<ProfileField>),
}

impl ValidationError {
    pub fn missing_fields(&self) -> &[ProfileField] {
        match self {
            ValidationError::MissingFields(fields) => fields,
        }
    }
}

fn join_labels(fields: &[ProfileField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolve a raw submission into a [`CandidateProfile`], or report every
/// unset selector by name in a fixed order. The predictor is never invoked
/// on a rejected submission.
pub fn validate(submission: &ProfileSubmission) -> Result<CandidateProfile, ValidationError> {
    let mut missing = Vec::new();
    if submission.education.is_none() {
        missing.push(ProfileField::Education);
    }
    if submission.location.is_none() {
        missing.push(ProfileField::WorkLocation);
    }
    if submission.job_title.is_none() {
        missing.push(ProfileField::JobTitle);
    }

    if let (Some(education), Some(location), Some(job_title)) = (
        submission.education,
        submission.location,
        submission.job_title,
    ) {
        Ok(CandidateProfile {
            education,
            location,
            job_title,
            experience_years: submission.experience_years,
            age: submission.age,
            gender: submission.gender,
            current_city: submission.current_city.clone(),
            growth_rate_pct: submission.growth_rate_pct,
        })
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

use serde::{Deserialize, Serialize};

use super::banding::SalaryBand;

/// Highest education level a candidate can report.
///
/// Each variant carries the numeric code the regression model was trained on.
/// Code 0 is the form placeholder and is deliberately unrepresentable here;
/// an unset selector is `None` on [`ProfileSubmission`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Education {
    #[serde(rename = "High School")]
    HighSchool,
    #[serde(rename = "Bachelor's")]
    Bachelors,
    #[serde(rename = "Master's")]
    Masters,
    #[serde(rename = "PhD")]
    Doctorate,
}

impl Education {
    pub const ALL: [Education; 4] = [
        Education::HighSchool,
        Education::Bachelors,
        Education::Masters,
        Education::Doctorate,
    ];

    pub const fn code(self) -> u8 {
        match self {
            Education::HighSchool => 1,
            Education::Bachelors => 2,
            Education::Masters => 3,
            Education::Doctorate => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Education::HighSchool => "High School",
            Education::Bachelors => "Bachelor's",
            Education::Masters => "Master's",
            Education::Doctorate => "PhD",
        }
    }
}

/// Work location category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkLocation {
    Rural,
    Suburban,
    Urban,
}

impl WorkLocation {
    pub const ALL: [WorkLocation; 3] = [
        WorkLocation::Rural,
        WorkLocation::Suburban,
        WorkLocation::Urban,
    ];

    pub const fn code(self) -> u8 {
        match self {
            WorkLocation::Rural => 1,
            WorkLocation::Suburban => 2,
            WorkLocation::Urban => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            WorkLocation::Rural => "Rural",
            WorkLocation::Suburban => "Suburban",
            WorkLocation::Urban => "Urban",
        }
    }
}

/// Job titles the model knows about, in code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobTitle {
    Clerk,
    #[serde(rename = "Customer Support")]
    CustomerSupport,
    #[serde(rename = "Data Analyst")]
    DataAnalyst,
    #[serde(rename = "Data Scientist")]
    DataScientist,
    Director,
    #[serde(rename = "HR Manager")]
    HrManager,
    #[serde(rename = "Product Manager")]
    ProductManager,
    #[serde(rename = "Software Engineer")]
    SoftwareEngineer,
    Technician,
}

impl JobTitle {
    pub const ALL: [JobTitle; 9] = [
        JobTitle::Clerk,
        JobTitle::CustomerSupport,
        JobTitle::DataAnalyst,
        JobTitle::DataScientist,
        JobTitle::Director,
        JobTitle::HrManager,
        JobTitle::ProductManager,
        JobTitle::SoftwareEngineer,
        JobTitle::Technician,
    ];

    pub const fn code(self) -> u8 {
        match self {
            JobTitle::Clerk => 1,
            JobTitle::CustomerSupport => 2,
            JobTitle::DataAnalyst => 3,
            JobTitle::DataScientist => 4,
            JobTitle::Director => 5,
            JobTitle::HrManager => 6,
            JobTitle::ProductManager => 7,
            JobTitle::SoftwareEngineer => 8,
            JobTitle::Technician => 9,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            JobTitle::Clerk => "Clerk",
            JobTitle::CustomerSupport => "Customer Support",
            JobTitle::DataAnalyst => "Data Analyst",
            JobTitle::DataScientist => "Data Scientist",
            JobTitle::Director => "Director",
            JobTitle::HrManager => "HR Manager",
            JobTitle::ProductManager => "Product Manager",
            JobTitle::SoftwareEngineer => "Software Engineer",
            JobTitle::Technician => "Technician",
        }
    }
}

/// Gender as collected by the form. Code 0 is a real value here; the
/// placeholder reservation applies only to the three optional selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub const fn code(self) -> u8 {
        match self {
            Gender::Male => 0,
            Gender::Female => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Raw form payload as entered by the candidate.
///
/// The three selector fields stay `None` until the candidate picks a value,
/// so a placeholder can never be encoded by accident. Numeric fields arrive
/// pre-bounded by the presentation layer's sliders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSubmission {
    #[serde(default)]
    pub education: Option<Education>,
    #[serde(default)]
    pub location: Option<WorkLocation>,
    #[serde(default)]
    pub job_title: Option<JobTitle>,
    pub experience_years: u8,
    pub age: u8,
    pub gender: Gender,
    pub current_city: String,
    #[serde(default = "default_growth_rate")]
    pub growth_rate_pct: u8,
}

const fn default_growth_rate() -> u8 {
    7
}

/// Fully-resolved candidate profile, produced by validation. Immutable once
/// built; one instance per prediction request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub education: Education,
    pub location: WorkLocation,
    pub job_title: JobTitle,
    pub experience_years: u8,
    pub age: u8,
    pub gender: Gender,
    pub current_city: String,
    pub growth_rate_pct: u8,
}

/// Model output paired with its qualitative classification. Derived per
/// request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted monthly salary in INR.
    pub predicted_salary: f64,
    pub band: SalaryBand,
}

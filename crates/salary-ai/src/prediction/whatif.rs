use serde::{Deserialize, Serialize};

use super::banding::SalaryBand;
use super::domain::Education;
use super::encoding::{FeatureVector, EDUCATION_SLOT, EXPERIENCE_SLOT};

/// Years of experience added by the `AddExperience` scenario.
pub const ADDED_EXPERIENCE_YEARS: f64 = 5.0;

/// Named re-prediction against a modified copy of the submitted features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhatIfScenario {
    UpgradeEducation,
    AddExperience,
}

impl WhatIfScenario {
    pub const ALL: [WhatIfScenario; 2] =
        [WhatIfScenario::UpgradeEducation, WhatIfScenario::AddExperience];

    pub const fn label(self) -> &'static str {
        match self {
            WhatIfScenario::UpgradeEducation => "With a Master's degree",
            WhatIfScenario::AddExperience => "With 5 more years of experience",
        }
    }

    /// Copy-on-modify: the submitted vector is never touched, and each
    /// scenario starts from the original, not from another scenario's output.
    pub fn apply(self, features: &FeatureVector) -> FeatureVector {
        let mut values = *features.as_array();
        match self {
            WhatIfScenario::UpgradeEducation => {
                values[EDUCATION_SLOT] = Education::Masters.code() as f64;
            }
            WhatIfScenario::AddExperience => {
                values[EXPERIENCE_SLOT] += ADDED_EXPERIENCE_YEARS;
            }
        }
        FeatureVector::from_values(values)
    }
}

/// Outcome of one scenario re-prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhatIfOutcome {
    pub scenario: WhatIfScenario,
    pub scenario_label: &'static str,
    pub predicted_salary: f64,
    pub band: SalaryBand,
}

use serde::{Deserialize, Serialize};

/// Salaries below this are classified as below average.
pub const BELOW_AVERAGE_CEILING: f64 = 30_000.0;
/// Salaries at or above this are classified as above average.
pub const ABOVE_AVERAGE_FLOOR: f64 = 70_000.0;

/// Qualitative classification of a predicted salary against market bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryBand {
    BelowAverage,
    Average,
    AboveAverage,
}

impl SalaryBand {
    /// Total over all salaries; lower bounds closed, upper bounds open.
    pub fn classify(salary: f64) -> Self {
        if salary < BELOW_AVERAGE_CEILING {
            SalaryBand::BelowAverage
        } else if salary < ABOVE_AVERAGE_FLOOR {
            SalaryBand::Average
        } else {
            SalaryBand::AboveAverage
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SalaryBand::BelowAverage => "Below average salary range",
            SalaryBand::Average => "Average salary range",
            SalaryBand::AboveAverage => "Above average salary range",
        }
    }
}

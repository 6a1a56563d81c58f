use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

static CITY_COST_INDEX: OnceLock<CityCostIndex> = OnceLock::new();

/// Cost-of-living multipliers relative to the Pune baseline (1.0).
const BUILT_IN_MULTIPLIERS: &[(&str, f64)] = &[
    ("Mumbai", 1.4),
    ("Bangalore", 1.3),
    ("Delhi", 1.35),
    ("Hyderabad", 1.1),
    ("Pune", 1.0),
    ("Chennai", 1.15),
];

/// Process-wide read-only accessor for the active cost index.
///
/// Defaults to the built-in table; [`install_city_cost_index`] may replace it
/// once at startup, before the first read.
pub fn city_cost_index() -> &'static CityCostIndex {
    CITY_COST_INDEX.get_or_init(CityCostIndex::built_in)
}

/// Install a replacement index (e.g. loaded from `COST_INDEX_PATH`). Fails if
/// the index has already been read or installed.
pub fn install_city_cost_index(index: CityCostIndex) -> Result<(), CostIndexError> {
    CITY_COST_INDEX
        .set(index)
        .map_err(|_| CostIndexError::AlreadyInstalled)
}

#[derive(Debug, thiserror::Error)]
pub enum CostIndexError {
    #[error("failed to read cost index: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid cost index CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("cost index multiplier for '{city}' must be a positive finite number (found {found})")]
    InvalidMultiplier { city: String, found: f64 },
    #[error("cost index contains no cities")]
    Empty,
    #[error("cost index already installed")]
    AlreadyInstalled,
}

/// Fixed mapping from city name to cost-of-living multiplier. Never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CityCostIndex {
    multipliers: BTreeMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct CostIndexRow {
    city: String,
    multiplier: f64,
}

impl CityCostIndex {
    pub fn built_in() -> Self {
        let multipliers = BUILT_IN_MULTIPLIERS
            .iter()
            .map(|(city, multiplier)| (city.to_string(), *multiplier))
            .collect();
        Self { multipliers }
    }

    /// Load a replacement table from `city,multiplier` CSV rows.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CostIndexError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut multipliers = BTreeMap::new();
        for row in csv_reader.deserialize::<CostIndexRow>() {
            let row = row?;
            if !row.multiplier.is_finite() || row.multiplier <= 0.0 {
                return Err(CostIndexError::InvalidMultiplier {
                    city: row.city,
                    found: row.multiplier,
                });
            }
            multipliers.insert(row.city, row.multiplier);
        }

        if multipliers.is_empty() {
            return Err(CostIndexError::Empty);
        }

        Ok(Self { multipliers })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CostIndexError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn multiplier(&self, city: &str) -> Option<f64> {
        self.multipliers.get(city).copied()
    }

    /// Known cities with their multipliers, in name order.
    pub fn cities(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.multipliers
            .iter()
            .map(|(city, multiplier)| (city.as_str(), *multiplier))
    }

    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }

    /// Rescale a salary between two cities. Unknown cities on either side are
    /// cost-neutral: the salary comes back unchanged rather than erroring.
    pub fn adjust(&self, salary: f64, origin: &str, destination: &str) -> f64 {
        match (self.multiplier(origin), self.multiplier(destination)) {
            (Some(origin_multiplier), Some(destination_multiplier)) => {
                salary * destination_multiplier / origin_multiplier
            }
            _ => salary,
        }
    }

    /// Full relocation comparison, including the multipliers actually applied
    /// (both 1.0 on the unknown-city fallback).
    pub fn compare(&self, salary: f64, origin: &str, destination: &str) -> RelocationComparison {
        let (origin_multiplier, destination_multiplier) =
            match (self.multiplier(origin), self.multiplier(destination)) {
                (Some(origin_multiplier), Some(destination_multiplier)) => {
                    (origin_multiplier, destination_multiplier)
                }
                _ => (1.0, 1.0),
            };

        let destination_salary = salary * destination_multiplier / origin_multiplier;
        // Undefined when the origin salary is zero.
        let percent_delta = if salary == 0.0 {
            None
        } else {
            Some((destination_salary - salary) / salary * 100.0)
        };

        RelocationComparison {
            origin_city: origin.to_string(),
            destination_city: destination.to_string(),
            origin_salary: salary,
            destination_salary,
            origin_multiplier,
            destination_multiplier,
            percent_delta,
        }
    }
}

/// Salary equivalence between two cities. Derived per request, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelocationComparison {
    pub origin_city: String,
    pub destination_city: String,
    pub origin_salary: f64,
    pub destination_salary: f64,
    pub origin_multiplier: f64,
    pub destination_multiplier: f64,
    /// `None` when the origin salary is exactly zero (undefined ratio).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_delta: Option<f64>,
}

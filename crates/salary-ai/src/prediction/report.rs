use serde::Serialize;

use super::advice::advice_for;
use super::banding::SalaryBand;
use super::domain::{CandidateProfile, PredictionResult};
use super::encoding::{FEATURE_COUNT, FEATURE_LABELS};
use super::relocation::RelocationComparison;

/// Industry-wide share of salaries per band, in band order.
const INDUSTRY_BAND_SHARES: [u8; 3] = [25, 50, 25];

/// Fixed feature-correlation snapshot shown alongside predictions.
const CORRELATION_LABELS: [&str; 4] = ["Education", "Experience", "Location", "Salary"];
const CORRELATION_ROWS: [[f64; 4]; 4] = [
    [1.0, 0.6, 0.3, 0.5],
    [0.6, 1.0, 0.2, 0.4],
    [0.3, 0.2, 1.0, 0.1],
    [0.5, 0.4, 0.1, 1.0],
];

/// Radar axes comparing the candidate against the ideal profile. The two
/// skill axes are fixed placeholders; the form does not collect skill scores.
const RADAR_AXES: [&str; 4] = ["Education", "Experience", "Technical Skills", "Soft Skills"];
const RADAR_CANDIDATE_SKILLS: [f64; 2] = [70.0, 60.0];
const RADAR_IDEAL: [f64; 4] = [4.0, 10.0, 90.0, 80.0];

/// Candidate echo plus the headline prediction, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummaryView {
    pub education: &'static str,
    pub job_title: &'static str,
    pub location: &'static str,
    pub gender: &'static str,
    pub experience_years: u8,
    pub age: u8,
    pub current_city: String,
    pub growth_rate_pct: u8,
    pub predicted_salary: f64,
    pub band: SalaryBand,
    pub band_label: &'static str,
}

/// One bar of the city salary-comparison chart.
#[derive(Debug, Clone, Serialize)]
pub struct CityComparisonEntry {
    pub city: String,
    pub salary: f64,
}

/// One slice of the industry band-share distribution.
#[derive(Debug, Clone, Serialize)]
pub struct BandShareEntry {
    pub band: SalaryBand,
    pub band_label: &'static str,
    pub share_pct: u8,
}

/// One bar of the feature-importance chart.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureImportanceEntry {
    pub feature: &'static str,
    pub importance: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrixView {
    pub labels: [&'static str; 4],
    pub rows: [[f64; 4]; 4],
}

/// One axis of the candidate-vs-ideal radar chart.
#[derive(Debug, Clone, Serialize)]
pub struct RadarAxisEntry {
    pub axis: &'static str,
    pub candidate: f64,
    pub ideal: f64,
}

/// Everything the external presentation layer needs to render a prediction:
/// the summary card, the chart datasets, and the career guidance lines.
/// Derived per request, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionReport {
    pub summary: ProfileSummaryView,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub city_comparison: Vec<CityComparisonEntry>,
    pub band_shares: Vec<BandShareEntry>,
    pub feature_importances: Vec<FeatureImportanceEntry>,
    pub correlation: CorrelationMatrixView,
    pub radar: Vec<RadarAxisEntry>,
    pub advice: Vec<&'static str>,
}

impl PredictionReport {
    pub fn build(
        profile: &CandidateProfile,
        result: &PredictionResult,
        relocation: Option<&RelocationComparison>,
        importances: &[f64; FEATURE_COUNT],
    ) -> Self {
        let summary = ProfileSummaryView {
            education: profile.education.label(),
            job_title: profile.job_title.label(),
            location: profile.location.label(),
            gender: profile.gender.label(),
            experience_years: profile.experience_years,
            age: profile.age,
            current_city: profile.current_city.clone(),
            growth_rate_pct: profile.growth_rate_pct,
            predicted_salary: result.predicted_salary,
            band: result.band,
            band_label: result.band.label(),
        };

        let city_comparison = relocation
            .map(|comparison| {
                vec![
                    CityComparisonEntry {
                        city: comparison.origin_city.clone(),
                        salary: comparison.origin_salary,
                    },
                    CityComparisonEntry {
                        city: comparison.destination_city.clone(),
                        salary: comparison.destination_salary,
                    },
                ]
            })
            .unwrap_or_default();

        let band_shares = [
            SalaryBand::BelowAverage,
            SalaryBand::Average,
            SalaryBand::AboveAverage,
        ]
        .iter()
        .zip(INDUSTRY_BAND_SHARES.iter())
        .map(|(band, share)| BandShareEntry {
            band: *band,
            band_label: band.label(),
            share_pct: *share,
        })
        .collect();

        let feature_importances = FEATURE_LABELS
            .iter()
            .copied()
            .zip(importances.iter())
            .map(|(feature, importance)| FeatureImportanceEntry {
                feature,
                importance: *importance,
            })
            .collect();

        let candidate_values = [
            profile.education.code() as f64,
            profile.experience_years as f64,
            RADAR_CANDIDATE_SKILLS[0],
            RADAR_CANDIDATE_SKILLS[1],
        ];
        let radar = RADAR_AXES
            .iter()
            .copied()
            .zip(candidate_values.iter().zip(RADAR_IDEAL.iter()))
            .map(|(axis, (candidate, ideal))| RadarAxisEntry {
                axis,
                candidate: *candidate,
                ideal: *ideal,
            })
            .collect();

        Self {
            summary,
            city_comparison,
            band_shares,
            feature_importances,
            correlation: CorrelationMatrixView {
                labels: CORRELATION_LABELS,
                rows: CORRELATION_ROWS,
            },
            radar,
            advice: advice_for(profile.job_title).to_vec(),
        }
    }
}

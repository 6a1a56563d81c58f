use crate::infra::{load_cost_index, load_predictor};
use chrono::Local;
use clap::Args;
use salary_ai::config::AppConfig;
use salary_ai::error::AppError;
use salary_ai::prediction::{
    install_city_cost_index, Education, Gender, JobTitle, PredictionOutcome, PredictionRequest,
    PredictionServiceError, ProfileSubmission, SalaryPredictionService, WhatIfScenario,
    WorkLocation,
};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Education level (e.g. "Bachelor's")
    #[arg(long, value_parser = crate::infra::parse_education)]
    education: Option<Education>,
    /// Job title (e.g. "Software Engineer")
    #[arg(long, value_parser = crate::infra::parse_job_title)]
    job_title: Option<JobTitle>,
    /// Work location (Rural, Suburban, or Urban)
    #[arg(long, value_parser = crate::infra::parse_location)]
    location: Option<WorkLocation>,
    /// Years of experience
    #[arg(long, default_value_t = 2)]
    experience: u8,
    /// Candidate age
    #[arg(long, default_value_t = 24)]
    age: u8,
    /// Gender as collected by the form
    #[arg(long, value_parser = crate::infra::parse_gender)]
    gender: Option<Gender>,
    /// Current city
    #[arg(long, default_value = "Pune")]
    city: String,
    /// Optional relocation target for the cost-of-living comparison
    #[arg(long)]
    target_city: Option<String>,
    /// What-if scenario to project (repeatable): upgrade_education, add_experience
    #[arg(long = "scenario", value_parser = crate::infra::parse_scenario)]
    scenarios: Vec<WhatIfScenario>,
    /// Expected annual salary growth rate (percent), echoed in the summary
    #[arg(long, default_value_t = 7)]
    growth_rate: u8,
    /// Print the raw prediction payload as JSON instead of the rendered report
    #[arg(long)]
    json: bool,
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;

    if let Some(index) = load_cost_index(&config.model)? {
        install_city_cost_index(index)?;
    }

    let predictor = Arc::new(load_predictor(&config.model)?);
    let service = SalaryPredictionService::new(predictor);

    let request = PredictionRequest {
        profile: ProfileSubmission {
            education: Some(args.education.unwrap_or(Education::Bachelors)),
            location: Some(args.location.unwrap_or(WorkLocation::Urban)),
            job_title: Some(args.job_title.unwrap_or(JobTitle::SoftwareEngineer)),
            experience_years: args.experience,
            age: args.age,
            gender: args.gender.unwrap_or(Gender::Male),
            current_city: args.city,
            growth_rate_pct: args.growth_rate,
        },
        target_city: args.target_city,
        scenarios: args.scenarios,
    };

    let outcome = match service.predict(&request) {
        Ok(outcome) => outcome,
        Err(PredictionServiceError::Validation(error)) => {
            println!("Submission rejected: {error}");
            return Ok(());
        }
        Err(PredictionServiceError::Predictor(error)) => return Err(AppError::Predictor(error)),
    };

    if args.json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Prediction payload unavailable: {err}"),
        }
        return Ok(());
    }

    render_outcome(&outcome);
    Ok(())
}

fn render_outcome(outcome: &PredictionOutcome) {
    let summary = &outcome.report.summary;

    println!("Salary prediction demo");
    println!("Generated {}", Local::now().date_naive());
    println!(
        "Candidate: {} | {} | {} | {} yrs experience | age {} | {} | {}",
        summary.job_title,
        summary.education,
        summary.location,
        summary.experience_years,
        summary.age,
        summary.gender,
        summary.current_city
    );

    println!(
        "\nEstimated monthly salary: {} ({})",
        format_inr(outcome.result.predicted_salary),
        summary.band_label
    );
    println!(
        "Projection assumes an expected annual growth rate of {}%",
        summary.growth_rate_pct
    );

    if let Some(relocation) = &outcome.relocation {
        let delta = match relocation.percent_delta {
            Some(delta) => format!("{delta:+.1}%"),
            None => "undefined (zero base salary)".to_string(),
        };
        println!(
            "\nCost-of-living comparison: {} in {} is equivalent to {} in {} ({})",
            format_inr(relocation.origin_salary),
            relocation.origin_city,
            format_inr(relocation.destination_salary),
            relocation.destination_city,
            delta
        );
    }

    if !outcome.what_if.is_empty() {
        println!("\nWhat-if projections");
        for projection in &outcome.what_if {
            println!(
                "- {}: {} ({})",
                projection.scenario_label,
                format_inr(projection.predicted_salary),
                projection.band.label()
            );
        }
    }

    println!("\nWhat factors affect the prediction");
    for entry in &outcome.report.feature_importances {
        println!("- {}: {:.2}", entry.feature, entry.importance);
    }

    println!("\nIndustry distribution");
    for share in &outcome.report.band_shares {
        println!("- {}: {}%", share.band_label, share.share_pct);
    }

    println!("\nCareer advice");
    for line in &outcome.report.advice {
        println!("- {line}");
    }
}

fn format_inr(value: f64) -> String {
    let negative = value < 0.0;
    let mut whole = value.abs().trunc() as u64;
    let mut cents = ((value.abs() - value.abs().trunc()) * 100.0).round() as u64;
    if cents == 100 {
        whole += 1;
        cents = 0;
    }

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}\u{20b9}{grouped}.{cents:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra;

    #[test]
    fn formats_salaries_with_thousands_separators() {
        assert_eq!(format_inr(65_000.0), "\u{20b9}65,000.00");
        assert_eq!(format_inr(1_234_567.5), "\u{20b9}1,234,567.50");
        assert_eq!(format_inr(0.0), "\u{20b9}0.00");
        assert_eq!(format_inr(999.999), "\u{20b9}1,000.00");
    }

    #[test]
    fn scenario_parser_accepts_cli_spellings() {
        assert_eq!(
            infra::parse_scenario("upgrade-education"),
            Ok(WhatIfScenario::UpgradeEducation)
        );
        assert_eq!(
            infra::parse_scenario("ADD_EXPERIENCE"),
            Ok(WhatIfScenario::AddExperience)
        );
        assert!(infra::parse_scenario("win-lottery").is_err());
    }
}

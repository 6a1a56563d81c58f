use std::io::Cursor;

use crate::prediction::relocation::{CityCostIndex, CostIndexError};

fn index() -> CityCostIndex {
    CityCostIndex::built_in()
}

#[test]
fn built_in_table_uses_pune_as_baseline() {
    let index = index();
    assert_eq!(index.len(), 6);
    assert_eq!(index.multiplier("Pune"), Some(1.0));
    assert_eq!(index.multiplier("Mumbai"), Some(1.4));
    assert_eq!(index.multiplier("Atlantis"), None);
}

#[test]
fn adjusts_by_multiplier_ratio() {
    let adjusted = index().adjust(40_000.0, "Pune", "Mumbai");
    assert!((adjusted - 56_000.0).abs() < 1e-6);

    let comparison = index().compare(40_000.0, "Pune", "Mumbai");
    assert!((comparison.destination_salary - 56_000.0).abs() < 1e-6);
    let delta = comparison.percent_delta.expect("delta defined");
    assert!((delta - 40.0).abs() < 1e-6);
}

#[test]
fn same_city_is_identity_for_every_known_city() {
    let index = index();
    for (city, _) in index.cities() {
        let adjusted = index.adjust(50_000.0, city, city);
        assert!(
            (adjusted - 50_000.0).abs() < 1e-9,
            "relocation {city} -> {city} must not change the salary"
        );
    }
}

#[test]
fn unknown_city_falls_back_to_unchanged_salary() {
    let index = index();
    assert_eq!(index.adjust(50_000.0, "Pune", "Atlantis"), 50_000.0);
    assert_eq!(index.adjust(50_000.0, "Atlantis", "Pune"), 50_000.0);

    let comparison = index.compare(50_000.0, "Pune", "Atlantis");
    assert_eq!(comparison.destination_salary, 50_000.0);
    assert_eq!(comparison.origin_multiplier, 1.0);
    assert_eq!(comparison.destination_multiplier, 1.0);
    assert_eq!(comparison.percent_delta, Some(0.0));
}

#[test]
fn zero_salary_reports_undefined_delta() {
    let comparison = index().compare(0.0, "Pune", "Mumbai");
    assert_eq!(comparison.destination_salary, 0.0);
    assert_eq!(comparison.percent_delta, None);
}

#[test]
fn downgrade_relocation_reports_negative_delta() {
    let comparison = index().compare(70_000.0, "Mumbai", "Hyderabad");
    assert!(comparison.destination_salary < 70_000.0);
    let delta = comparison.percent_delta.expect("delta defined");
    assert!(delta < 0.0);
}

#[test]
fn loads_replacement_table_from_csv() {
    let csv = "city,multiplier\nKolkata,1.05\nPune,1.0\n";
    let index = CityCostIndex::from_reader(Cursor::new(csv)).expect("csv parses");

    assert_eq!(index.len(), 2);
    assert_eq!(index.multiplier("Kolkata"), Some(1.05));
    assert_eq!(index.multiplier("Mumbai"), None);
}

#[test]
fn rejects_non_positive_multiplier() {
    let csv = "city,multiplier\nKolkata,0.0\n";
    match CityCostIndex::from_reader(Cursor::new(csv)) {
        Err(CostIndexError::InvalidMultiplier { city, found }) => {
            assert_eq!(city, "Kolkata");
            assert_eq!(found, 0.0);
        }
        other => panic!("expected invalid multiplier, got {other:?}"),
    }
}

#[test]
fn rejects_empty_table() {
    let csv = "city,multiplier\n";
    assert!(matches!(
        CityCostIndex::from_reader(Cursor::new(csv)),
        Err(CostIndexError::Empty)
    ));
}

#[test]
fn rejects_malformed_rows() {
    let csv = "city,multiplier\nKolkata,not-a-number\n";
    assert!(matches!(
        CityCostIndex::from_reader(Cursor::new(csv)),
        Err(CostIndexError::Csv(_))
    ));
}

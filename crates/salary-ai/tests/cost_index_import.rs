//! Integration specifications for cost-index CSV imports.

use std::io::Cursor;

use salary_ai::prediction::{CityCostIndex, CostIndexError};

#[test]
fn import_replaces_the_city_table() {
    let csv = "city,multiplier\nKolkata,1.05\nAhmedabad,0.95\nPune,1.0\n";

    let index = CityCostIndex::from_reader(Cursor::new(csv)).expect("import succeeds");

    assert_eq!(index.len(), 3);
    assert_eq!(index.multiplier("Ahmedabad"), Some(0.95));
    assert_eq!(index.multiplier("Mumbai"), None, "built-in rows are gone");
}

#[test]
fn import_trims_surrounding_whitespace() {
    let csv = "city,multiplier\n  Kolkata , 1.05 \n";

    let index = CityCostIndex::from_reader(Cursor::new(csv)).expect("import succeeds");

    assert_eq!(index.multiplier("Kolkata"), Some(1.05));
}

#[test]
fn imported_table_drives_relocation_adjustments() {
    let csv = "city,multiplier\nKolkata,1.2\nNagpur,0.8\n";
    let index = CityCostIndex::from_reader(Cursor::new(csv)).expect("import succeeds");

    let adjusted = index.adjust(30_000.0, "Nagpur", "Kolkata");
    assert!((adjusted - 45_000.0).abs() < 1e-6);

    // Cities from the replaced built-in table no longer resolve.
    assert_eq!(index.adjust(30_000.0, "Pune", "Kolkata"), 30_000.0);
}

#[test]
fn negative_multiplier_is_rejected() {
    let csv = "city,multiplier\nKolkata,-1.0\n";

    match CityCostIndex::from_reader(Cursor::new(csv)) {
        Err(CostIndexError::InvalidMultiplier { city, .. }) => assert_eq!(city, "Kolkata"),
        other => panic!("expected invalid multiplier, got {other:?}"),
    }
}

#[test]
fn import_from_path_propagates_io_errors() {
    let error =
        CityCostIndex::from_path("./does-not-exist.csv").expect_err("expected io error");

    assert!(matches!(error, CostIndexError::Io(_)));
}

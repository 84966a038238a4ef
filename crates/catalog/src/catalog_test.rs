//! Tests for catalog loading and lookup

use crate::catalog::{Catalog, CatalogError};
use crate::record::CandidateRecord;

#[test]
fn test_builtin_loads() {
    let catalog = Catalog::builtin().unwrap();
    assert!(catalog.len() >= 16, "builtin catalog unexpectedly small");
    assert!(!catalog.is_empty());
}

#[test]
fn test_builtin_contains_reference_candidates() {
    let catalog = Catalog::builtin().unwrap();
    assert!(catalog.get("KIC-8462852 b").is_some());
    assert!(catalog.get("KOI-701.03").is_some());
}

#[test]
fn test_builtin_names_unique() {
    let catalog = Catalog::builtin().unwrap();
    for (i, record) in catalog.records().iter().enumerate() {
        assert!(
            !catalog.records()[..i].iter().any(|r| r.name == record.name),
            "duplicate designation {}",
            record.name
        );
    }
}

#[test]
fn test_duplicate_name_rejected() {
    let records = vec![
        CandidateRecord::named("Kepler-22 b"),
        CandidateRecord::named("Kepler-22 b"),
    ];
    match Catalog::from_records(records) {
        Err(CatalogError::DuplicateName(name)) => assert_eq!(name, "Kepler-22 b"),
        other => panic!("expected DuplicateName, got {:?}", other.map(|c| c.len())),
    }
}

#[test]
fn test_empty_rejected() {
    assert!(matches!(
        Catalog::from_records(Vec::new()),
        Err(CatalogError::Empty)
    ));
}

#[test]
fn test_malformed_json_rejected() {
    assert!(matches!(
        Catalog::from_json("{ not json"),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn test_order_preserved_and_indexed() {
    let records = vec![
        CandidateRecord::named("c"),
        CandidateRecord::named("a"),
        CandidateRecord::named("b"),
    ];
    let catalog = Catalog::from_records(records).unwrap();
    assert_eq!(catalog.records()[0].name, "c");
    assert_eq!(catalog.index_of("a"), Some(1));
    assert_eq!(catalog.index_of("missing"), None);
}

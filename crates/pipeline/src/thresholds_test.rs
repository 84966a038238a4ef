//! Tests for threshold validation and write coalescing

use crate::thresholds::{ThresholdSet, ThresholdStore};

#[test]
fn test_defaults() {
    let thresholds = ThresholdSet::default();
    assert_eq!(thresholds.esi, 0.80);
    assert_eq!(thresholds.signal, 0.50);
    assert_eq!(thresholds.habitability, 0.60);
}

#[test]
fn test_validity() {
    assert!(ThresholdSet::is_valid(0.0));
    assert!(ThresholdSet::is_valid(0.5));
    assert!(ThresholdSet::is_valid(1.0));
    assert!(!ThresholdSet::is_valid(-0.01));
    assert!(!ThresholdSet::is_valid(1.01));
    assert!(!ThresholdSet::is_valid(f64::NAN));
    assert!(!ThresholdSet::is_valid(f64::INFINITY));
    assert!(!ThresholdSet::is_valid(f64::NEG_INFINITY));
}

#[test]
fn test_accepted_write_updates_and_dirties() {
    let mut store = ThresholdStore::new();
    assert!(!store.is_dirty());
    assert!(store.set_esi(0.75));
    assert_eq!(store.current().esi, 0.75);
    assert!(store.is_dirty());
}

#[test]
fn test_rejected_write_retains_prior_value() {
    let mut store = ThresholdStore::new();
    assert!(!store.set_esi(f64::NAN));
    assert!(!store.set_signal(-0.5));
    assert!(!store.set_habitability(2.0));

    // Nothing changed, nothing pending
    assert_eq!(store.current(), ThresholdSet::default());
    assert!(!store.is_dirty());
}

#[test]
fn test_take_dirty_clears() {
    let mut store = ThresholdStore::new();
    store.set_habitability(0.9);
    assert!(store.take_dirty());
    assert!(!store.take_dirty());
    // The value survives the settle
    assert_eq!(store.current().habitability, 0.9);
}

#[test]
fn test_rapid_writes_coalesce_to_one_dirty_mark() {
    let mut store = ThresholdStore::new();
    store.set_esi(0.1);
    store.set_esi(0.2);
    store.set_signal(0.3);
    store.set_habitability(0.4);
    assert!(store.take_dirty());
    assert!(!store.is_dirty());
    assert_eq!(store.current().esi, 0.2);
}

#[test]
fn test_with_explicit_thresholds_starts_clean() {
    let store = ThresholdStore::with(ThresholdSet {
        esi: 0.9,
        signal: 0.1,
        habitability: 0.2,
    });
    assert!(!store.is_dirty());
    assert_eq!(store.current().esi, 0.9);
}

//! Tests for derived views, search, and ordering

use catalog::CandidateRecord;
use similarity::EsiScore;

use crate::analysis::{
    AnalysisOutcome, AnalysisResult, CandidateAnalysis, Stage1Result, Stage2Outcome, Stage2Result,
};
use crate::views::{matches_search, sort_rows, DerivedViews, SortKey, SortOrder, ViewKind};

fn outcome(stage1_passed: bool, stage2_passed: Option<bool>) -> AnalysisOutcome {
    let stage2 = match (stage1_passed, stage2_passed) {
        (true, Some(passed)) => Stage2Outcome::Evaluated(Stage2Result {
            inferred_composition: catalog::AtmosphereComposition::earth(),
            earth_similarity: 0.9,
            habitability_likelihood: if passed { 0.9 } else { 0.3 },
            passed,
        }),
        _ => Stage2Outcome::NotRun,
    };
    AnalysisOutcome::Complete(AnalysisResult {
        stage1: Stage1Result {
            esi: EsiScore {
                radius_score: 1.0,
                flux_score: 1.0,
                aggregate: 1.0,
            },
            signal_score: 0.5,
            passed: stage1_passed,
        },
        stage2,
    })
}

fn row(name: &str, habitability: Option<f64>) -> CandidateAnalysis {
    let stage2 = match habitability {
        Some(likelihood) => Stage2Outcome::Evaluated(Stage2Result {
            inferred_composition: catalog::AtmosphereComposition::earth(),
            earth_similarity: 0.5,
            habitability_likelihood: likelihood,
            passed: likelihood >= 0.6,
        }),
        None => Stage2Outcome::NotRun,
    };
    CandidateAnalysis {
        record: CandidateRecord::named(name),
        outcome: AnalysisOutcome::Complete(AnalysisResult {
            stage1: Stage1Result {
                esi: EsiScore {
                    radius_score: 1.0,
                    flux_score: 1.0,
                    aggregate: 1.0,
                },
                signal_score: 0.5,
                passed: habitability.is_some(),
            },
            stage2,
        }),
    }
}

#[test]
fn test_compute_counts_and_nesting() {
    let outcomes = vec![
        outcome(false, None),
        outcome(true, Some(false)),
        outcome(true, Some(true)),
        outcome(false, None),
        outcome(true, Some(true)),
    ];
    let views = DerivedViews::compute(&outcomes);
    assert_eq!(views.total(), 5);
    assert_eq!(views.stage1_passed_count(), 3);
    assert_eq!(views.stage2_evaluated_count(), 3);
    assert_eq!(views.shortlist_count(), 2);

    assert_eq!(views.indices(ViewKind::All), vec![0, 1, 2, 3, 4]);
    assert_eq!(views.indices(ViewKind::Stage1Passed), vec![1, 2, 4]);
    assert_eq!(views.indices(ViewKind::Stage2Evaluated), vec![1, 2, 4]);
    assert_eq!(views.indices(ViewKind::FinalShortlist), vec![2, 4]);
}

#[test]
fn test_unavailable_outcomes_empty_all_but_all() {
    let outcomes = vec![AnalysisOutcome::Unavailable; 4];
    let views = DerivedViews::compute(&outcomes);
    assert_eq!(views.indices(ViewKind::All).len(), 4);
    assert!(views.indices(ViewKind::Stage1Passed).is_empty());
    assert!(views.indices(ViewKind::Stage2Evaluated).is_empty());
    assert!(views.indices(ViewKind::FinalShortlist).is_empty());
}

#[test]
fn test_view_kind_round_trip() {
    for kind in [
        ViewKind::All,
        ViewKind::Stage1Passed,
        ViewKind::Stage2Evaluated,
        ViewKind::FinalShortlist,
    ] {
        let parsed: ViewKind = kind.to_string().parse().unwrap();
        assert_eq!(parsed, kind);
    }
    assert!("shortlist".parse::<ViewKind>().is_err());
}

#[test]
fn test_search_is_case_insensitive_substring() {
    assert!(matches_search("Kepler-442 b", ""));
    assert!(matches_search("Kepler-442 b", "kepler"));
    assert!(matches_search("Kepler-442 b", "442"));
    assert!(matches_search("KIC-8462852 b", "kic-846"));
    assert!(!matches_search("Kepler-442 b", "trappist"));
}

#[test]
fn test_sort_by_name() {
    let mut rows = vec![row("b", None), row("A", None), row("c", None)];
    sort_rows(&mut rows, SortKey::Name, SortOrder::Ascending);
    let names: Vec<&str> = rows.iter().map(|r| r.record.name.as_str()).collect();
    assert_eq!(names, vec!["A", "b", "c"]);

    sort_rows(&mut rows, SortKey::Name, SortOrder::Descending);
    let names: Vec<&str> = rows.iter().map(|r| r.record.name.as_str()).collect();
    assert_eq!(names, vec!["c", "b", "A"]);
}

#[test]
fn test_sort_missing_values_order_last_in_both_directions() {
    let mut rows = vec![
        row("never-ran", None),
        row("low", Some(0.3)),
        row("high", Some(0.9)),
    ];
    sort_rows(&mut rows, SortKey::HabitabilityLikelihood, SortOrder::Ascending);
    let names: Vec<&str> = rows.iter().map(|r| r.record.name.as_str()).collect();
    assert_eq!(names, vec!["low", "high", "never-ran"]);

    sort_rows(&mut rows, SortKey::HabitabilityLikelihood, SortOrder::Descending);
    let names: Vec<&str> = rows.iter().map(|r| r.record.name.as_str()).collect();
    assert_eq!(names, vec!["high", "low", "never-ran"]);
}

#[test]
fn test_sort_ties_break_by_name() {
    let mut rows = vec![row("zeta", Some(0.5)), row("alpha", Some(0.5))];
    sort_rows(&mut rows, SortKey::HabitabilityLikelihood, SortOrder::Ascending);
    let names: Vec<&str> = rows.iter().map(|r| r.record.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "zeta"]);
}

//! Derived views, ordering, and the status summary
//!
//! The four views are filtered projections of the latest committed run,
//! recomputed in full on every commit. By construction they nest:
//! shortlist ⊆ stage-2 evaluated ⊆ stage-1 passed ⊆ all.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::analysis::{AnalysisOutcome, CandidateAnalysis};

/// The four derived views over an evaluated catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum ViewKind {
    /// Every candidate in the catalog
    All,
    /// Candidates that passed broad screening
    Stage1Passed,
    /// Candidates whose refinement ran (equals stage-1 passed by invariant)
    Stage2Evaluated,
    /// Candidates that passed the habitability gate
    FinalShortlist,
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            ViewKind::All => "all",
            ViewKind::Stage1Passed => "stage1Passed",
            ViewKind::Stage2Evaluated => "stage2Evaluated",
            ViewKind::FinalShortlist => "finalShortlist",
        };
        write!(f, "{}", str)
    }
}

impl FromStr for ViewKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ViewKind::All),
            "stage1Passed" => Ok(ViewKind::Stage1Passed),
            "stage2Evaluated" => Ok(ViewKind::Stage2Evaluated),
            "finalShortlist" => Ok(ViewKind::FinalShortlist),
            other => Err(format!("unknown view: {}", other)),
        }
    }
}

/// Sortable columns of the candidate tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum SortKey {
    /// Candidate designation
    Name,
    /// ESI aggregate
    EsiAggregate,
    /// Simulated signal-plausibility score
    SignalScore,
    /// Habitability likelihood (absent unless refinement ran)
    HabitabilityLikelihood,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "esiAggregate" => Ok(SortKey::EsiAggregate),
            "signalScore" => Ok(SortKey::SignalScore),
            "habitabilityLikelihood" => Ok(SortKey::HabitabilityLikelihood),
            other => Err(format!("unknown sort key: {}", other)),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Index sets of the non-trivial views, recomputed per committed run
///
/// Indices are positions in catalog order, so every view preserves catalog
/// order before any user sort is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedViews {
    total: usize,
    stage1_passed: Vec<usize>,
    stage2_evaluated: Vec<usize>,
    shortlist: Vec<usize>,
}

impl DerivedViews {
    /// Compute all views from a run's outcomes
    pub fn compute(outcomes: &[AnalysisOutcome]) -> Self {
        let mut views = Self {
            total: outcomes.len(),
            ..Self::default()
        };
        for (index, outcome) in outcomes.iter().enumerate() {
            if outcome.stage1_passed() {
                views.stage1_passed.push(index);
            }
            if outcome.stage2_evaluated() {
                views.stage2_evaluated.push(index);
            }
            if outcome.shortlisted() {
                views.shortlist.push(index);
            }
        }
        views
    }

    /// Catalog indices of one view, in catalog order
    pub fn indices(&self, kind: ViewKind) -> Vec<usize> {
        match kind {
            ViewKind::All => (0..self.total).collect(),
            ViewKind::Stage1Passed => self.stage1_passed.clone(),
            ViewKind::Stage2Evaluated => self.stage2_evaluated.clone(),
            ViewKind::FinalShortlist => self.shortlist.clone(),
        }
    }

    /// Candidates in the catalog
    pub fn total(&self) -> usize {
        self.total
    }

    /// Stage-1 survivors
    pub fn stage1_passed_count(&self) -> usize {
        self.stage1_passed.len()
    }

    /// Candidates whose refinement ran
    pub fn stage2_evaluated_count(&self) -> usize {
        self.stage2_evaluated.len()
    }

    /// Final shortlist size
    pub fn shortlist_count(&self) -> usize {
        self.shortlist.len()
    }
}

/// Status-bar summary of the latest committed run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct StatusSummary {
    /// Candidates in the catalog
    pub total: usize,
    /// Stage-1 survivors
    pub stage1_passed_count: usize,
    /// Candidates whose refinement ran
    pub stage2_evaluated_count: usize,
    /// Final shortlist size
    pub shortlist_count: usize,
    /// Whether the run degraded because inference was unavailable
    pub degraded: bool,
}

/// Case-insensitive substring match on the candidate designation
///
/// An empty query matches everything.
pub fn matches_search(name: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Sort rows in place by a key and direction
///
/// Rows missing the key (refinement never ran, or the run degraded) order
/// after present values in either direction; ties break by designation so
/// the display is stable.
pub fn sort_rows(rows: &mut [CandidateAnalysis], key: SortKey, order: SortOrder) {
    rows.sort_by(|a, b| {
        let primary = match key {
            SortKey::Name => {
                let ord = a
                    .record
                    .name
                    .to_lowercase()
                    .cmp(&b.record.name.to_lowercase());
                apply_order(ord, order)
            }
            _ => match (sort_value(a, key), sort_value(b, key)) {
                (Some(x), Some(y)) => {
                    apply_order(x.partial_cmp(&y).unwrap_or(Ordering::Equal), order)
                }
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        };
        primary.then_with(|| a.record.name.cmp(&b.record.name))
    });
}

fn apply_order(ord: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => ord,
        SortOrder::Descending => ord.reverse(),
    }
}

fn sort_value(row: &CandidateAnalysis, key: SortKey) -> Option<f64> {
    match key {
        SortKey::Name => None,
        SortKey::EsiAggregate => row.outcome.esi_aggregate(),
        SortKey::SignalScore => row.outcome.signal_score(),
        SortKey::HabitabilityLikelihood => row.outcome.habitability_likelihood(),
    }
}

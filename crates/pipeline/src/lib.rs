//! Deterministic candidate-evaluation pipeline
//!
//! This crate runs exoplanet candidates through two sequential gates: a
//! broad screen over Earth Similarity Index and simulated signal
//! plausibility, then a targeted refinement over simulated atmospheric
//! inference and habitability likelihood. Every stochastic quantity is drawn
//! from a generator reseeded per candidate, so results are independent of
//! evaluation order and bit-identical across re-runs.
//!
//! The orchestrating [`Engine`] owns the catalog, the gating thresholds and
//! the last committed run, and maintains four derived views (all candidates,
//! stage-1 survivors, stage-2 evaluated, final shortlist) that the view
//! layer consumes.

pub mod analysis;
pub mod engine;
pub mod inference;
pub mod stage1;
pub mod stage2;
pub mod thresholds;
pub mod views;

// Re-export key types at crate root
pub use analysis::{AnalysisOutcome, AnalysisResult, CandidateAnalysis, Stage1Result, Stage2Outcome, Stage2Result};
pub use engine::{Engine, RunTicket};
pub use inference::{InferenceBackend, SyntheticInference, GOLDEN_CANDIDATES};
pub use stage1::evaluate_stage1;
pub use stage2::evaluate_stage2;
pub use thresholds::{ThresholdSet, ThresholdStore};
pub use views::{DerivedViews, SortKey, SortOrder, StatusSummary, ViewKind};

#[cfg(test)]
mod thresholds_test;
#[cfg(test)]
mod views_test;

//! Analysis result types
//!
//! Stage outcomes are tagged variants rather than nullable fields: a
//! candidate whose refinement never ran is `NotRun`, not a bundle of empty
//! options, so downstream handling is exhaustive by construction.

use catalog::{AtmosphereComposition, CandidateRecord};
use serde::{Deserialize, Serialize};
use similarity::EsiScore;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Broad-screening result for one candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Stage1Result {
    /// Earth Similarity Index components and aggregate
    pub esi: EsiScore,
    /// Simulated signal-plausibility score in [0, 1]
    pub signal_score: f64,
    /// Whether both screening gates were met
    pub passed: bool,
}

/// Targeted-refinement result, present only for stage-1 survivors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Stage2Result {
    /// Simulated inferred atmospheric composition
    pub inferred_composition: AtmosphereComposition,
    /// Atmospheric Earth-similarity of the inferred composition
    pub earth_similarity: f64,
    /// Blended habitability likelihood in [0, 1]
    pub habitability_likelihood: f64,
    /// Whether the habitability gate was met
    pub passed: bool,
}

/// Refinement gate outcome
///
/// `Evaluated` exactly when stage 1 passed; the pipeline never constructs
/// anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum Stage2Outcome {
    /// Stage 1 failed, refinement skipped
    NotRun,
    /// Stage 1 passed, refinement ran
    Evaluated(Stage2Result),
}

impl Stage2Outcome {
    /// Whether refinement ran
    pub fn is_evaluated(&self) -> bool {
        matches!(self, Stage2Outcome::Evaluated(_))
    }

    /// The refinement result, if it ran
    pub fn result(&self) -> Option<&Stage2Result> {
        match self {
            Stage2Outcome::NotRun => None,
            Stage2Outcome::Evaluated(result) => Some(result),
        }
    }

    /// Whether the habitability gate was met; `None` when refinement never ran
    pub fn passed(&self) -> Option<bool> {
        self.result().map(|r| r.passed)
    }
}

/// Full per-candidate analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct AnalysisResult {
    /// Broad screening
    pub stage1: Stage1Result,
    /// Targeted refinement
    pub stage2: Stage2Outcome,
}

/// Per-candidate outcome of a pipeline run
///
/// `Unavailable` is the degraded mode of a run whose inference backend could
/// not initialize: reported, non-fatal, and distinct from any score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum AnalysisOutcome {
    /// The evaluation environment was unavailable for this run
    Unavailable,
    /// The pipeline evaluated this candidate
    Complete(AnalysisResult),
}

impl AnalysisOutcome {
    /// The analysis, when the pipeline ran
    pub fn analysis(&self) -> Option<&AnalysisResult> {
        match self {
            AnalysisOutcome::Unavailable => None,
            AnalysisOutcome::Complete(result) => Some(result),
        }
    }

    /// ESI aggregate, when available
    pub fn esi_aggregate(&self) -> Option<f64> {
        self.analysis().map(|a| a.stage1.esi.aggregate)
    }

    /// Signal-plausibility score, when available
    pub fn signal_score(&self) -> Option<f64> {
        self.analysis().map(|a| a.stage1.signal_score)
    }

    /// Habitability likelihood, when refinement ran
    pub fn habitability_likelihood(&self) -> Option<f64> {
        self.analysis()
            .and_then(|a| a.stage2.result())
            .map(|r| r.habitability_likelihood)
    }

    /// Whether stage 1 passed (false when unavailable)
    pub fn stage1_passed(&self) -> bool {
        self.analysis().is_some_and(|a| a.stage1.passed)
    }

    /// Whether stage 2 ran (false when unavailable)
    pub fn stage2_evaluated(&self) -> bool {
        self.analysis().is_some_and(|a| a.stage2.is_evaluated())
    }

    /// Whether the candidate made the final shortlist
    pub fn shortlisted(&self) -> bool {
        self.analysis()
            .is_some_and(|a| a.stage2.passed() == Some(true))
    }
}

/// A candidate together with its latest analysis outcome
///
/// This is both the table-row payload and the drawer detail payload exposed
/// to the view layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct CandidateAnalysis {
    /// Raw observational record
    pub record: CandidateRecord,
    /// Latest pipeline outcome
    pub outcome: AnalysisOutcome,
}

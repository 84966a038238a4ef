//! Stage 2: targeted refinement
//!
//! Runs only for stage-1 survivors: synthesize an inferred atmospheric
//! composition, score its Earth-similarity, and blend with a base
//! likelihood into the final habitability gate. The generator is reseeded
//! from the candidate name — a fresh stream, not a continuation of
//! stage 1's — so the two stages stay independently reproducible.

use catalog::CandidateRecord;
use prng::Lcg32;
use similarity::atmospheric_similarity;

use crate::analysis::Stage2Result;
use crate::inference::InferenceBackend;
use crate::thresholds::ThresholdSet;

/// Weight of the base likelihood in the habitability blend
const BASE_WEIGHT: f64 = 0.6;

/// Weight of the atmospheric Earth-similarity in the habitability blend
const SIMILARITY_WEIGHT: f64 = 0.4;

/// Refine one stage-1 survivor
///
/// The caller is responsible for the precondition that stage 1 passed; this
/// function itself is total over any record.
pub fn evaluate_stage2<B: InferenceBackend>(
    record: &CandidateRecord,
    thresholds: &ThresholdSet,
    backend: &B,
) -> Stage2Result {
    let mut rng = Lcg32::for_name(&record.name);
    let inferred_composition = backend.infer_composition(&record.name, &mut rng);
    let earth_similarity = atmospheric_similarity(&inferred_composition);
    let base = backend.base_habitability(&record.name, &mut rng);
    let habitability_likelihood = base * BASE_WEIGHT + earth_similarity * SIMILARITY_WEIGHT;
    let passed = habitability_likelihood >= thresholds.habitability;
    Stage2Result {
        inferred_composition,
        earth_similarity,
        habitability_likelihood,
        passed,
    }
}

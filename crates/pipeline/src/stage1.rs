//! Stage 1: broad screening
//!
//! Gates every candidate on Earth Similarity Index and simulated signal
//! plausibility. The generator is reseeded from the candidate name before
//! any draw, so the result depends only on the record and the thresholds.

use catalog::CandidateRecord;
use prng::Lcg32;
use similarity::esi_score;

use crate::analysis::Stage1Result;
use crate::inference::InferenceBackend;
use crate::thresholds::ThresholdSet;

/// Screen one candidate
///
/// Both gates must hold: `esi.aggregate >= thresholds.esi` and
/// `signal_score >= thresholds.signal`. Missing radius or flux defaults to
/// the Earth reference inside the scorer.
pub fn evaluate_stage1<B: InferenceBackend>(
    record: &CandidateRecord,
    thresholds: &ThresholdSet,
    backend: &B,
) -> Stage1Result {
    let mut rng = Lcg32::for_name(&record.name);
    let esi = esi_score(record.radius_earth, record.insolation_flux);
    let signal_score = backend.signal_score(&record.name, &mut rng);
    let passed = esi.aggregate >= thresholds.esi && signal_score >= thresholds.signal;
    Stage1Result {
        esi,
        signal_score,
        passed,
    }
}

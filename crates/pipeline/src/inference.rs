//! Simulated-AI inference backend
//!
//! The pipeline's "AI" scores are synthetic stand-ins with a fixed
//! statistical shape: two named golden candidates always draw from high
//! bands, everyone else from background distributions. The shape is the
//! contract — a backend wrapping a real model must still reproduce this
//! synthetic mode for deterministic testing, so the backend is a trait and
//! the synthetic implementation is the default.

use catalog::{AtmosphereComposition, GasSpecies};
use prng::Lcg32;

/// Candidates whose simulated scores are deliberately scripted high
///
/// These are named demonstration pass-throughs, not an accident of the
/// distributions; do not generalize them away.
pub const GOLDEN_CANDIDATES: [&str; 2] = ["KIC-8462852 b", "KOI-701.03"];

/// Signal-plausibility band for golden candidates
const GOLDEN_SIGNAL_BAND: (f64, f64) = (0.95, 0.99);

/// Background signal distribution: floor + draw^shape * span
const SIGNAL_FLOOR: f64 = 0.1;
const SIGNAL_SPAN: f64 = 0.85;
const SIGNAL_SHAPE: f64 = 2.5;

/// Base habitability band for golden candidates
const GOLDEN_BASE_BAND: (f64, f64) = (0.90, 0.95);

/// Base habitability band for everyone else
const BACKGROUND_BASE_BAND: (f64, f64) = (0.2, 0.58);

/// Relative jitter around Earth reference values for golden compositions
const GOLDEN_JITTER: f64 = 0.10;

/// Upper bound of the trace draw for species Earth holds at zero
const TRACE_MAX: f64 = 0.002;

/// Whether a designation is one of the scripted golden candidates
pub fn is_golden(name: &str) -> bool {
    GOLDEN_CANDIDATES.contains(&name)
}

/// Source of the simulated-AI quantities consumed by the two stages
///
/// Implementations must be deterministic given the candidate name and the
/// supplied generator; the evaluators own reseeding, so a backend must not
/// keep generator state of its own.
pub trait InferenceBackend {
    /// Whether the backend can evaluate at all this run
    fn is_available(&self) -> bool {
        true
    }

    /// Signal-plausibility score in [0, 1]
    fn signal_score(&self, name: &str, rng: &mut Lcg32) -> f64;

    /// Synthesize an inferred atmospheric composition
    fn infer_composition(&self, name: &str, rng: &mut Lcg32) -> AtmosphereComposition;

    /// Base habitability likelihood in [0, 1], before blending
    fn base_habitability(&self, name: &str, rng: &mut Lcg32) -> f64;
}

/// The deterministic synthetic backend
///
/// The only shipped implementation. `offline()` models an evaluation
/// environment that failed to initialize, which degrades a run without
/// crashing it.
#[derive(Debug, Clone)]
pub struct SyntheticInference {
    available: bool,
}

impl SyntheticInference {
    /// A working backend
    pub fn new() -> Self {
        Self { available: true }
    }

    /// A backend that reports itself unavailable
    pub fn offline() -> Self {
        Self { available: false }
    }
}

impl Default for SyntheticInference {
    fn default() -> Self {
        Self::new()
    }
}

impl InferenceBackend for SyntheticInference {
    fn is_available(&self) -> bool {
        self.available
    }

    fn signal_score(&self, name: &str, rng: &mut Lcg32) -> f64 {
        if is_golden(name) {
            rng.next_in_range(GOLDEN_SIGNAL_BAND.0, GOLDEN_SIGNAL_BAND.1)
        } else {
            // Skewed toward the floor: most background candidates read as
            // marginal detections
            SIGNAL_FLOOR + rng.next_f64().powf(SIGNAL_SHAPE) * SIGNAL_SPAN
        }
    }

    fn infer_composition(&self, name: &str, rng: &mut Lcg32) -> AtmosphereComposition {
        let golden = is_golden(name);
        let mut composition = AtmosphereComposition::empty();
        // Species order is the draw order; it is part of the contract
        for species in GasSpecies::ALL {
            let value = if golden {
                let reference = species.earth_reference();
                if reference > 0.0 {
                    rng.next_in_range(
                        reference * (1.0 - GOLDEN_JITTER),
                        reference * (1.0 + GOLDEN_JITTER),
                    )
                } else {
                    rng.next_in_range(0.0, TRACE_MAX)
                }
            } else {
                let (min, max) = species.valid_range();
                rng.next_in_range(min, max)
            };
            composition.set(species, value);
        }
        composition
    }

    fn base_habitability(&self, name: &str, rng: &mut Lcg32) -> f64 {
        if is_golden(name) {
            rng.next_in_range(GOLDEN_BASE_BAND.0, GOLDEN_BASE_BAND.1)
        } else {
            rng.next_in_range(BACKGROUND_BASE_BAND.0, BACKGROUND_BASE_BAND.1)
        }
    }
}

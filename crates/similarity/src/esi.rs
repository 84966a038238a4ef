//! Earth Similarity Index
//!
//! Weighted geometric-mean closeness of a candidate's radius and insolation
//! flux to Earth's. Each component is scored
//! `(1 - |x - 1| / (x + 1)) ^ w` against the Earth reference value 1, with
//! the weight exponents from the two-parameter interior/surface split.
//!
//! # References
//! - Schulze-Makuch et al. (2011) - "A Two-Tiered Approach to Assessing the
//!   Habitability of Exoplanets"

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Weight exponent for the radius component
pub const RADIUS_WEIGHT: f64 = 0.57;

/// Weight exponent for the flux component
pub const FLUX_WEIGHT: f64 = 1.07;

/// Earth reference value for both components
const EARTH_REFERENCE: f64 = 1.0;

/// Component and aggregate ESI scores for one candidate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct EsiScore {
    /// Radius closeness in [0, 1]
    pub radius_score: f64,
    /// Flux closeness in [0, 1]
    pub flux_score: f64,
    /// Geometric mean of the two components
    pub aggregate: f64,
}

/// Score one component against the Earth reference
///
/// Negative inputs are clamped to zero before scoring. The denominator guard
/// cannot trigger with the reference at 1 and a nonnegative input, but is
/// required to hold for any reference.
fn component_score(value: f64, weight: f64) -> f64 {
    let value = value.max(0.0);
    let denominator = value + EARTH_REFERENCE;
    if denominator == 0.0 {
        return 0.0;
    }
    (1.0 - (value - EARTH_REFERENCE).abs() / denominator).powf(weight)
}

/// Compute the Earth Similarity Index for a candidate
///
/// Absent observables default to the Earth reference value 1.0, so a
/// candidate with no measured radius or flux scores as Earth-like on the
/// missing component rather than failing.
///
/// # Examples
/// ```
/// use similarity::esi_score;
///
/// // Earth itself scores exactly 1
/// let earth = esi_score(Some(1.0), Some(1.0));
/// assert_eq!(earth.aggregate, 1.0);
///
/// // A hot Jupiter scores near 0
/// let jupiter = esi_score(Some(15.2), Some(1100.0));
/// assert!(jupiter.aggregate < 0.1);
/// ```
pub fn esi_score(radius_earth: Option<f64>, insolation_flux: Option<f64>) -> EsiScore {
    let radius_score = component_score(radius_earth.unwrap_or(EARTH_REFERENCE), RADIUS_WEIGHT);
    let flux_score = component_score(insolation_flux.unwrap_or(EARTH_REFERENCE), FLUX_WEIGHT);
    EsiScore {
        radius_score,
        flux_score,
        aggregate: (radius_score * flux_score).sqrt(),
    }
}

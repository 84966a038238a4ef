//! Candidate record type
//!
//! One entry per exoplanet candidate. Any observable may be absent; absence
//! is data ("not available"), not an error, and downstream formulas document
//! their own defaults.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// A single exoplanet candidate as loaded from the catalog
///
/// The designation is the unique key within a catalog. Records are created
/// at load time and never mutated; analysis results are kept separately and
/// associated by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct CandidateRecord {
    /// Candidate designation, unique within a catalog
    pub name: String,

    /// Planet radius (R⊕)
    #[serde(default)]
    pub radius_earth: Option<f64>,
    /// Incident stellar flux relative to Earth (S⊕)
    #[serde(default)]
    pub insolation_flux: Option<f64>,
    /// Orbital period (days)
    #[serde(default)]
    pub orbital_period_days: Option<f64>,
    /// Equilibrium temperature (K)
    #[serde(default)]
    pub equilibrium_temp_k: Option<f64>,
    /// Planet mass (M⊕)
    #[serde(default)]
    pub mass_earth: Option<f64>,
    /// Bulk density (g/cm³)
    #[serde(default)]
    pub density_g_cm3: Option<f64>,
    /// Orbital semi-major axis (AU)
    #[serde(default)]
    pub semi_major_axis_au: Option<f64>,

    /// Host star effective temperature (K)
    #[serde(default)]
    pub stellar_temp_k: Option<f64>,
    /// Host star radius (R☉)
    #[serde(default)]
    pub stellar_radius_solar: Option<f64>,
    /// Host star mass (M☉)
    #[serde(default)]
    pub stellar_mass_solar: Option<f64>,
    /// Host star luminosity (L☉)
    #[serde(default)]
    pub stellar_luminosity_solar: Option<f64>,

    /// Year of discovery
    #[serde(default)]
    pub discovery_year: Option<i32>,
    /// Discovery method (e.g. "Transit", "Radial Velocity")
    #[serde(default)]
    pub discovery_method: Option<String>,
    /// Discovery facility
    #[serde(default)]
    pub discovery_facility: Option<String>,
}

impl CandidateRecord {
    /// Create a record with only a designation, all observables absent
    ///
    /// Mostly useful for constructing synthetic candidates in tests.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            radius_earth: None,
            insolation_flux: None,
            orbital_period_days: None,
            equilibrium_temp_k: None,
            mass_earth: None,
            density_g_cm3: None,
            semi_major_axis_au: None,
            stellar_temp_k: None,
            stellar_radius_solar: None,
            stellar_mass_solar: None,
            stellar_luminosity_solar: None,
            discovery_year: None,
            discovery_method: None,
            discovery_facility: None,
        }
    }
}

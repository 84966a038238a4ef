//! Atmospheric composition model
//!
//! Composition is tracked as relative abundances over a closed set of eight
//! species. Each species declares a valid abundance range and an Earth
//! reference value; the same model backs both the interactive exploration
//! surface and the simulated inference stage.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// The closed set of tracked atmospheric species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum GasSpecies {
    /// Water vapor (H₂O)
    #[serde(rename = "H2O")]
    WaterVapor,
    /// Molecular oxygen (O₂)
    #[serde(rename = "O2")]
    Oxygen,
    /// Carbon dioxide (CO₂)
    #[serde(rename = "CO2")]
    CarbonDioxide,
    /// Ozone (O₃)
    #[serde(rename = "O3")]
    Ozone,
    /// Methane (CH₄)
    #[serde(rename = "CH4")]
    Methane,
    /// Carbon monoxide (CO)
    #[serde(rename = "CO")]
    CarbonMonoxide,
    /// Sulfur dioxide (SO₂)
    #[serde(rename = "SO2")]
    SulfurDioxide,
    /// Ammonia (NH₃)
    #[serde(rename = "NH3")]
    Ammonia,
}

impl GasSpecies {
    /// All species in canonical draw order
    ///
    /// Simulated inference draws per-gas values in exactly this order, so
    /// the ordering is part of the reproducibility contract.
    pub const ALL: [GasSpecies; 8] = [
        GasSpecies::WaterVapor,
        GasSpecies::Oxygen,
        GasSpecies::CarbonDioxide,
        GasSpecies::Ozone,
        GasSpecies::Methane,
        GasSpecies::CarbonMonoxide,
        GasSpecies::SulfurDioxide,
        GasSpecies::Ammonia,
    ];

    /// Chemical formula without markup (stable identifier)
    pub fn formula(&self) -> &'static str {
        match self {
            GasSpecies::WaterVapor => "H2O",
            GasSpecies::Oxygen => "O2",
            GasSpecies::CarbonDioxide => "CO2",
            GasSpecies::Ozone => "O3",
            GasSpecies::Methane => "CH4",
            GasSpecies::CarbonMonoxide => "CO",
            GasSpecies::SulfurDioxide => "SO2",
            GasSpecies::Ammonia => "NH3",
        }
    }

    /// Declared valid abundance range (inclusive bounds)
    ///
    /// Exploration sliders and uniform inference draws both span exactly
    /// this range.
    pub fn valid_range(&self) -> (f64, f64) {
        match self {
            GasSpecies::WaterVapor => (0.0, 10.0),
            GasSpecies::Oxygen => (0.0, 30.0),
            GasSpecies::CarbonDioxide => (0.0, 1.0),
            GasSpecies::Ozone => (0.0, 0.1),
            GasSpecies::Methane => (0.0, 0.1),
            GasSpecies::CarbonMonoxide => (0.0, 0.1),
            GasSpecies::SulfurDioxide => (0.0, 0.1),
            GasSpecies::Ammonia => (0.0, 0.1),
        }
    }

    /// Earth reference abundance
    pub fn earth_reference(&self) -> f64 {
        match self {
            GasSpecies::WaterVapor => 1.0,
            GasSpecies::Oxygen => 21.0,
            GasSpecies::CarbonDioxide => 0.04,
            GasSpecies::Ozone => 0.01,
            GasSpecies::Methane => 0.01,
            GasSpecies::CarbonMonoxide => 0.0,
            GasSpecies::SulfurDioxide => 0.0,
            GasSpecies::Ammonia => 0.0,
        }
    }

    /// Whether the species counts toward the toxicity penalty
    pub fn is_toxic(&self) -> bool {
        matches!(
            self,
            GasSpecies::CarbonMonoxide | GasSpecies::SulfurDioxide | GasSpecies::Ammonia
        )
    }
}

impl fmt::Display for GasSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formula = match self {
            GasSpecies::WaterVapor => "H₂O",
            GasSpecies::Oxygen => "O₂",
            GasSpecies::CarbonDioxide => "CO₂",
            GasSpecies::Ozone => "O₃",
            GasSpecies::Methane => "CH₄",
            GasSpecies::CarbonMonoxide => "CO",
            GasSpecies::SulfurDioxide => "SO₂",
            GasSpecies::Ammonia => "NH₃",
        };
        write!(f, "{}", formula)
    }
}

/// Relative abundances for the eight tracked species
///
/// Values are clamped to each species' declared valid range on construction
/// and on every set, so a composition is always in-range by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct AtmosphereComposition {
    /// Water vapor abundance
    pub h2o: f64,
    /// Oxygen abundance
    pub o2: f64,
    /// Carbon dioxide abundance
    pub co2: f64,
    /// Ozone abundance
    pub o3: f64,
    /// Methane abundance
    pub ch4: f64,
    /// Carbon monoxide abundance
    pub co: f64,
    /// Sulfur dioxide abundance
    pub so2: f64,
    /// Ammonia abundance
    pub nh3: f64,
}

impl AtmosphereComposition {
    /// Create a composition, clamping each abundance into its valid range
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        h2o: f64,
        o2: f64,
        co2: f64,
        o3: f64,
        ch4: f64,
        co: f64,
        so2: f64,
        nh3: f64,
    ) -> Self {
        let mut composition = Self::empty();
        composition.set(GasSpecies::WaterVapor, h2o);
        composition.set(GasSpecies::Oxygen, o2);
        composition.set(GasSpecies::CarbonDioxide, co2);
        composition.set(GasSpecies::Ozone, o3);
        composition.set(GasSpecies::Methane, ch4);
        composition.set(GasSpecies::CarbonMonoxide, co);
        composition.set(GasSpecies::SulfurDioxide, so2);
        composition.set(GasSpecies::Ammonia, nh3);
        composition
    }

    /// All abundances zero (airless)
    pub fn empty() -> Self {
        Self {
            h2o: 0.0,
            o2: 0.0,
            co2: 0.0,
            o3: 0.0,
            ch4: 0.0,
            co: 0.0,
            so2: 0.0,
            nh3: 0.0,
        }
    }

    /// Earth reference composition
    pub fn earth() -> Self {
        Self {
            h2o: 1.0,
            o2: 21.0,
            co2: 0.04,
            o3: 0.01,
            ch4: 0.01,
            co: 0.0,
            so2: 0.0,
            nh3: 0.0,
        }
    }

    /// Abundance of one species
    pub fn get(&self, species: GasSpecies) -> f64 {
        match species {
            GasSpecies::WaterVapor => self.h2o,
            GasSpecies::Oxygen => self.o2,
            GasSpecies::CarbonDioxide => self.co2,
            GasSpecies::Ozone => self.o3,
            GasSpecies::Methane => self.ch4,
            GasSpecies::CarbonMonoxide => self.co,
            GasSpecies::SulfurDioxide => self.so2,
            GasSpecies::Ammonia => self.nh3,
        }
    }

    /// Set one species' abundance, clamped into its valid range
    ///
    /// Non-finite input is treated as the range minimum.
    pub fn set(&mut self, species: GasSpecies, value: f64) {
        let (min, max) = species.valid_range();
        let clamped = if value.is_finite() {
            value.clamp(min, max)
        } else {
            min
        };
        match species {
            GasSpecies::WaterVapor => self.h2o = clamped,
            GasSpecies::Oxygen => self.o2 = clamped,
            GasSpecies::CarbonDioxide => self.co2 = clamped,
            GasSpecies::Ozone => self.o3 = clamped,
            GasSpecies::Methane => self.ch4 = clamped,
            GasSpecies::CarbonMonoxide => self.co = clamped,
            GasSpecies::SulfurDioxide => self.so2 = clamped,
            GasSpecies::Ammonia => self.nh3 = clamped,
        }
    }
}

impl Default for AtmosphereComposition {
    fn default() -> Self {
        Self::earth()
    }
}

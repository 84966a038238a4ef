//! Gating thresholds and the write-coalescing store
//!
//! Thresholds are the process-wide configuration with a single writer (user
//! input). Invalid writes are rejected at the boundary and the prior value
//! retained; valid writes mark the store dirty, and the engine settles all
//! pending writes into at most one pipeline run per commit.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Default ESI gate
pub const DEFAULT_ESI_THRESHOLD: f64 = 0.80;

/// Default signal-plausibility gate
pub const DEFAULT_SIGNAL_THRESHOLD: f64 = 0.50;

/// Default habitability gate
pub const DEFAULT_HABITABILITY_THRESHOLD: f64 = 0.60;

/// The three pipeline gates, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ThresholdSet {
    /// Minimum ESI aggregate to pass stage 1
    pub esi: f64,
    /// Minimum signal-plausibility score to pass stage 1
    pub signal: f64,
    /// Minimum habitability likelihood to pass stage 2
    pub habitability: f64,
}

impl ThresholdSet {
    /// Whether a value is acceptable as a threshold
    ///
    /// Rejects NaN, infinities, and anything outside [0, 1].
    pub fn is_valid(value: f64) -> bool {
        value.is_finite() && (0.0..=1.0).contains(&value)
    }
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            esi: DEFAULT_ESI_THRESHOLD,
            signal: DEFAULT_SIGNAL_THRESHOLD,
            habitability: DEFAULT_HABITABILITY_THRESHOLD,
        }
    }
}

/// Write-coalescing threshold store
///
/// Setters validate and mark the store dirty; [`ThresholdStore::take_dirty`]
/// clears the mark, which is how the engine guarantees at most one pipeline
/// run per settling interval no matter how many writes landed in between.
#[derive(Debug, Clone, Default)]
pub struct ThresholdStore {
    current: ThresholdSet,
    dirty: bool,
}

impl ThresholdStore {
    /// A store at the default thresholds, not dirty
    pub fn new() -> Self {
        Self::default()
    }

    /// A store at explicit thresholds, not dirty
    pub fn with(current: ThresholdSet) -> Self {
        Self {
            current,
            dirty: false,
        }
    }

    /// The current thresholds
    pub fn current(&self) -> ThresholdSet {
        self.current
    }

    /// Whether writes are pending
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Consume the dirty mark, returning whether writes were pending
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Update the ESI gate; returns false (retaining the prior value) on
    /// invalid input
    pub fn set_esi(&mut self, value: f64) -> bool {
        Self::write(&mut self.current.esi, value, &mut self.dirty, "esi")
    }

    /// Update the signal gate
    pub fn set_signal(&mut self, value: f64) -> bool {
        Self::write(&mut self.current.signal, value, &mut self.dirty, "signal")
    }

    /// Update the habitability gate
    pub fn set_habitability(&mut self, value: f64) -> bool {
        Self::write(
            &mut self.current.habitability,
            value,
            &mut self.dirty,
            "habitability",
        )
    }

    fn write(slot: &mut f64, value: f64, dirty: &mut bool, gate: &str) -> bool {
        if !ThresholdSet::is_valid(value) {
            tracing::debug!(gate, value, "rejected threshold write");
            return false;
        }
        *slot = value;
        *dirty = true;
        true
    }
}

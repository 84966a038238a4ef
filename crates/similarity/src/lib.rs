//! Physics-based similarity scoring
//!
//! Pure scoring functions used by the evaluation pipeline: the Earth
//! Similarity Index over radius and insolation flux, and a weighted
//! atmospheric Earth-similarity over the eight tracked gas species. Both
//! scorers are deterministic functions of their inputs with no internal
//! state, so the interactive exploration surface and the simulated inference
//! stage share them unchanged.

pub mod atmosphere;
pub mod esi;

// Re-export key items at crate root
pub use atmosphere::atmospheric_similarity;
pub use esi::{esi_score, EsiScore};

#[cfg(test)]
mod esi_test;

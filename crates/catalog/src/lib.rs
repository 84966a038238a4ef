//! Exoplanet candidate catalog
//!
//! This crate provides the candidate records the evaluation pipeline runs
//! over: optional physical observables, stellar context, and provenance
//! metadata, plus the closed atmospheric-composition model shared by live
//! exploration and simulated inference. Catalogs are loaded once, validated,
//! and never mutated afterwards.

pub mod catalog;
pub mod composition;
pub mod record;

// Re-export key types at crate root
pub use catalog::{Catalog, CatalogError};
pub use composition::{AtmosphereComposition, GasSpecies};
pub use record::CandidateRecord;

#[cfg(test)]
mod catalog_test;

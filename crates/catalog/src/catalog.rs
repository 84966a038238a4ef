//! Catalog loading and lookup
//!
//! A catalog is an ordered, immutable collection of candidate records with
//! unique designations, loaded once at startup from a local JSON source.

use thiserror::Error;

use crate::record::CandidateRecord;

/// Builtin candidate dataset compiled into the library
///
/// The browser build and the examples run against this fixed local catalog;
/// there is no network loading.
const BUILTIN_JSON: &str = include_str!("../data/candidates.json");

/// Errors surfaced while loading a catalog
///
/// Loading is the only fallible boundary of this crate; once constructed, a
/// catalog never fails.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The JSON source could not be parsed into candidate records
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share a designation
    #[error("duplicate candidate designation: {0}")]
    DuplicateName(String),

    /// The source contained no records
    #[error("catalog contains no candidates")]
    Empty,
}

/// An immutable, ordered collection of candidate records
///
/// Record order is the catalog source order; lookups by designation are
/// linear, which is fine at catalog sizes in the low thousands.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<CandidateRecord>,
}

impl Catalog {
    /// Build a catalog from records, validating designation uniqueness
    pub fn from_records(records: Vec<CandidateRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|r| r.name == record.name) {
                return Err(CatalogError::DuplicateName(record.name.clone()));
            }
        }
        tracing::debug!(count = records.len(), "catalog loaded");
        Ok(Self { records })
    }

    /// Parse a catalog from a JSON array of records
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<CandidateRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Load the builtin dataset
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_JSON)
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty (never true for a constructed catalog)
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in catalog order
    pub fn records(&self) -> &[CandidateRecord] {
        &self.records
    }

    /// Iterate over records in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &CandidateRecord> {
        self.records.iter()
    }

    /// Look up a record by designation
    pub fn get(&self, name: &str) -> Option<&CandidateRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Index of a record by designation
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name == name)
    }
}

//! # Strict Load Search
//!
//! Applies up to three filters to a catalog, in a fixed order, each over the
//! survivors of the previous one:
//!
//! 1. **origin**: record origin (lowercased) contains the query (trimmed,
//!    lowercased);
//! 2. **destination**: same containment rule on the destination;
//! 3. **equipment type**: record equipment type (lowercased) equals the
//!    query (trimmed, lowercased). No partial match: `"Dry Van Plus"` does
//!    not match `"Dry Van"`.
//!
//! Filters combine with AND. A filter whose criterion is absent or empty
//! passes everything. Survivors keep catalog order and are truncated to the
//! requested cap. No ranking, no fuzzy fallback: when nothing matches the
//! result is empty.

use crate::error::ValidationError;
use crate::load::LoadRecord;

/// Cap on the number of loads returned by one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxResults(u8);

impl MaxResults {
    /// Smallest accepted cap.
    pub const MIN: u8 = 1;
    /// Largest accepted cap.
    pub const MAX: u8 = 20;
    /// Cap used when the caller does not supply one.
    pub const DEFAULT: u8 = 5;

    /// Validate a caller-supplied cap.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MaxResultsOutOfRange`] outside `1..=20`.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(ValidationError::MaxResultsOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        // Range-checked above.
        Ok(Self(value as u8))
    }

    /// The cap as a collection length.
    pub fn get(self) -> usize {
        usize::from(self.0)
    }
}

impl Default for MaxResults {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Search criteria for [`search_loads`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadQuery {
    /// Origin substring (case-insensitive).
    pub origin: Option<String>,
    /// Destination substring (case-insensitive).
    pub destination: Option<String>,
    /// Exact equipment type (case-insensitive).
    pub equipment_type: Option<String>,
    /// Result cap.
    pub max_results: MaxResults,
}

/// Run the strict conjunctive filter over `catalog`.
pub fn search_loads(catalog: Vec<LoadRecord>, query: &LoadQuery) -> Vec<LoadRecord> {
    let mut results = catalog;

    if let Some(needle) = criterion(query.origin.as_deref()) {
        results.retain(|load| load.origin.to_lowercase().contains(&needle));
        tracing::debug!(filter = "origin", %needle, remaining = results.len(), "applied load filter");
    }

    if let Some(needle) = criterion(query.destination.as_deref()) {
        results.retain(|load| load.destination.to_lowercase().contains(&needle));
        tracing::debug!(filter = "destination", %needle, remaining = results.len(), "applied load filter");
    }

    if let Some(wanted) = criterion(query.equipment_type.as_deref()) {
        results.retain(|load| load.equipment_type.to_lowercase() == wanted);
        tracing::debug!(filter = "equipment_type", %wanted, remaining = results.len(), "applied load filter");
    }

    if results.is_empty() {
        tracing::debug!(?query, "no loads matched search criteria");
        return results;
    }

    results.truncate(query.max_results.get());
    results
}

/// Normalize a criterion; `None` means the filter is skipped.
fn criterion(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.is_empty())
        .map(|s| s.trim().to_lowercase())
}

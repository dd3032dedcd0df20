//! Normalized facet bucket record.
//!
//! This module defines the uniform bucket shape produced by the response
//! normalizer and consumed by the consolidation merger.

use serde::{Deserialize, Serialize};

/// One observed value of an entity-identifying field within one facet.
///
/// Buckets are constructed fresh from each raw aggregation response, tagged
/// with the facet that produced them, and discarded after consolidation.
///
/// # Fields
///
/// - `facet`: Name of the aggregation this bucket came from
/// - `key`: The observed value (an actor name for the actor facets, a
///   country name for the country breakdown)
/// - `doc_count`: Number of documents where the facet field equals `key`
/// - `sample_titles`: Representative film titles drawn from matching
///   documents, in backend order; a missing title is represented by the
///   `"N/A"` sentinel rather than being dropped, and duplicates are kept
///   (deduplication belongs to the merger)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetBucket {
    pub facet: String,
    pub key: String,
    pub doc_count: u64,
    pub sample_titles: Vec<String>,
}

impl FacetBucket {
    /// Create a new bucket tagged with its originating facet.
    pub fn new(
        facet: impl Into<String>,
        key: impl Into<String>,
        doc_count: u64,
        sample_titles: Vec<String>,
    ) -> Self {
        Self {
            facet: facet.into(),
            key: key.into(),
            doc_count,
            sample_titles,
        }
    }
}

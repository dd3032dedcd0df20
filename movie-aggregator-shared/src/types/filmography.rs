//! Consolidated filmography types.
//!
//! This module defines the merged per-actor record and the ranked result
//! list returned by the aggregation pipeline.

use serde::{Deserialize, Serialize};

/// The merged view of one actor across all facets.
///
/// `total_films` is strictly additive: a document contributing to two actor
/// facets for the same name counts twice, reflecting the backend's
/// independent facet computation. `films` is deduplicated: the same title
/// listed under multiple facets appears once, in first-seen order. The two
/// fields serve different audit purposes and must not be conflated.
///
/// The serde field names (`actor_name`, `total_films`, `films`) are the
/// stable export contract consumed downstream and must not change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActorFilmography {
    /// The actor's display name, unique within a consolidation run.
    pub actor_name: String,
    /// Sum of bucket `doc_count` across every facet the actor appeared in.
    pub total_films: u64,
    /// Unique film titles in first-seen order across facets.
    pub films: Vec<String>,
}

/// Ordered sequence of [`ActorFilmography`], sorted by `total_films`
/// descending. Actors with equal totals retain their first-seen order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct RankedList {
    entries: Vec<ActorFilmography>,
}

impl RankedList {
    /// Create a ranked list from entries already in ranking order.
    pub fn new(entries: Vec<ActorFilmography>) -> Self {
        Self { entries }
    }

    /// Create an empty ranked list.
    ///
    /// An empty list is a valid, reportable result and is also the degenerate
    /// output when the upstream query produced no usable response.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries in this list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over entries in ranking order.
    pub fn iter(&self) -> std::slice::Iter<'_, ActorFilmography> {
        self.entries.iter()
    }

    /// The entries in ranking order.
    pub fn entries(&self) -> &[ActorFilmography] {
        &self.entries
    }

    /// Number of entries omitted by a bounded display of size `limit`.
    ///
    /// `None` (or a limit covering the whole list) omits nothing.
    pub fn omitted_by(&self, limit: Option<usize>) -> usize {
        match limit {
            Some(limit) => self.entries.len().saturating_sub(limit),
            None => 0,
        }
    }
}

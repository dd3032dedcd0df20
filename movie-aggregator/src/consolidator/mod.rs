//! Consolidation merger.
//!
//! Folds the normalized bucket stream into one record per actor. Counts are
//! strictly additive across facets while film titles are deduplicated; the
//! asymmetry is intentional (the backend computes each facet independently,
//! so a document contributing to two actor fields for the same name counts
//! twice, but the same film must not be listed twice).
//!
//! Plain hash maps do not guarantee iteration order, so the merger keeps an
//! explicit entry vector alongside a name-to-position index: the vector
//! preserves the first-seen order that the ranker's stable sort relies on
//! for tie-breaking.

use std::collections::HashMap;

use movie_aggregator_shared::{ActorFilmography, FacetBucket};

/// Accumulates facet buckets into per-actor filmographies.
///
/// The fold is total: any well-formed bucket sequence consolidates without
/// error, and an empty input yields an empty output. State lives only for
/// one consolidation run.
#[derive(Debug, Default)]
pub struct Consolidator {
    entries: Vec<ActorFilmography>,
    positions: HashMap<String, usize>,
}

impl Consolidator {
    /// Create an empty consolidator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb one bucket into the consolidation state.
    ///
    /// On first sighting of an actor a new entry is created; on every
    /// subsequent sighting the count is accumulated and unseen titles are
    /// appended in order.
    pub fn absorb(&mut self, bucket: FacetBucket) {
        match self.positions.get(&bucket.key) {
            Some(&position) => {
                let entry = &mut self.entries[position];
                entry.total_films += bucket.doc_count;
                for title in bucket.sample_titles {
                    if !entry.films.contains(&title) {
                        entry.films.push(title);
                    }
                }
            }
            None => {
                let mut films = Vec::with_capacity(bucket.sample_titles.len());
                for title in bucket.sample_titles {
                    if !films.contains(&title) {
                        films.push(title);
                    }
                }

                self.positions
                    .insert(bucket.key.clone(), self.entries.len());
                self.entries.push(ActorFilmography {
                    actor_name: bucket.key,
                    total_films: bucket.doc_count,
                    films,
                });
            }
        }
    }

    /// Finalize the consolidation, returning entries in first-seen order.
    pub fn into_entries(self) -> Vec<ActorFilmography> {
        self.entries
    }
}

/// Consolidate a normalized bucket sequence into per-actor records.
pub fn consolidate(buckets: Vec<FacetBucket>) -> Vec<ActorFilmography> {
    let mut consolidator = Consolidator::new();
    for bucket in buckets {
        consolidator.absorb(bucket);
    }
    consolidator.into_entries()
}

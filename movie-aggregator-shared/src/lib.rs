//! # Movie Aggregator Shared
//!
//! This crate defines shared data structures and types used across the movie
//! facet aggregation system. It includes the normalized facet bucket record,
//! the consolidated per-actor filmography, the ranked result list, and the
//! fixed facet declaration shared by the query builder and the normalizer.

pub mod facets;
pub mod types;

pub use types::actor_search::{ActorMovieSearch, CountryCount};
pub use types::facet_bucket::FacetBucket;
pub use types::filmography::{ActorFilmography, RankedList};

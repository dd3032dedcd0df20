//! This module defines the core data structures used across the movie
//! aggregation pipeline. It re-exports the main record types.

pub mod actor_search;
pub mod facet_bucket;
pub mod filmography;

pub use actor_search::{ActorMovieSearch, CountryCount};
pub use facet_bucket::FacetBucket;
pub use filmography::{ActorFilmography, RankedList};

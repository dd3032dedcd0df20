//! Actor movie search summary types.
//!
//! This module defines the response shape for the "movies featuring an
//! actor" search, which matches the actor name across all three actor
//! fields and breaks the matching movies down by production country.

use serde::{Deserialize, Serialize};

/// Movie count for one production country.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryCount {
    /// The country name as indexed.
    pub country: String,
    /// Number of matching movies produced in this country.
    pub movie_count: u64,
}

/// Summary of a search for movies featuring one actor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActorMovieSearch {
    /// The actor name the search matched against.
    pub actor_name: String,
    /// Total number of movies featuring the actor in any of the actor fields.
    pub total_matches: u64,
    /// Per-country movie counts, in backend (descending count) order.
    pub countries: Vec<CountryCount>,
}

impl ActorMovieSearch {
    /// Create an empty summary for an actor with no matches.
    pub fn empty(actor_name: impl Into<String>) -> Self {
        Self {
            actor_name: actor_name.into(),
            total_matches: 0,
            countries: Vec::new(),
        }
    }
}

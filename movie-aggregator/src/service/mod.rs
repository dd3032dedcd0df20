//! Filmography service.
//!
//! Coordinates the query-executor collaborator with the consolidation
//! pipeline. Each operation starts from fresh consolidation state; the
//! service itself holds nothing but the injected provider, so concurrent
//! invocations are isolated by construction.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::{consolidator, normalizer, ranker};
use movie_aggregator_repository::FacetQueryProvider;
use movie_aggregator_shared::facets::COUNTRY_FACET;
use movie_aggregator_shared::{ActorMovieSearch, CountryCount, RankedList};

/// High-level operations over the movie index.
///
/// The provider is the collaborator boundary: its errors are logged and
/// degrade to empty results rather than failing the run, so the pipeline
/// never turns an upstream failure into a fatal error. Callers that need to
/// distinguish "zero entities" from "backend down" use
/// [`FilmographyService::verify_connection`] as the status signal.
pub struct FilmographyService {
    provider: Arc<dyn FacetQueryProvider>,
}

impl FilmographyService {
    /// Create a new service over the given provider.
    pub fn new(provider: Arc<dyn FacetQueryProvider>) -> Self {
        Self { provider }
    }

    /// Check whether the search backend is reachable and healthy.
    ///
    /// This is the collaborator's status signal; a `false` here explains an
    /// empty result from the other operations.
    pub async fn verify_connection(&self) -> bool {
        match self.provider.ping().await {
            Ok(true) => true,
            Ok(false) => {
                warn!("Search backend reported itself unhealthy");
                false
            }
            Err(e) => {
                warn!(error = %e, "Search backend unreachable");
                false
            }
        }
    }

    /// Consolidate the three actor facets into a ranked filmography list.
    ///
    /// A provider failure yields `RankedList::empty()` after logging, the
    /// degenerate-but-valid result.
    pub async fn actor_filmographies(&self) -> RankedList {
        let response = match self.provider.actor_facets().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Actor facet aggregation failed, returning empty result");
                return RankedList::empty();
            }
        };

        consolidate_response(&response)
    }

    /// Search for movies featuring one actor, with a per-country breakdown.
    ///
    /// A provider failure yields an empty summary after logging.
    pub async fn movies_featuring(&self, actor_name: &str) -> ActorMovieSearch {
        let response = match self.provider.search_by_actor(actor_name).await {
            Ok(response) => response,
            Err(e) => {
                warn!(actor = %actor_name, error = %e, "Actor search failed, returning empty summary");
                return ActorMovieSearch::empty(actor_name);
            }
        };

        let total_matches = response["hits"]["total"]["value"].as_u64().unwrap_or(0);
        let countries = normalizer::normalize_facets(&response, &[COUNTRY_FACET])
            .into_iter()
            .map(|bucket| CountryCount {
                country: bucket.key,
                movie_count: bucket.doc_count,
            })
            .collect();

        ActorMovieSearch {
            actor_name: actor_name.to_string(),
            total_matches,
            countries,
        }
    }
}

/// Run the pure consolidation pipeline over a raw aggregation response.
///
/// Normalize, merge, rank: total over any input, including an empty or
/// unusable response (which yields an empty list).
pub fn consolidate_response(response: &Value) -> RankedList {
    let buckets = normalizer::normalize_actor_facets(response);
    debug!(bucket_count = buckets.len(), "Normalized facet response");

    let entries = consolidator::consolidate(buckets);
    debug!(actor_count = entries.len(), "Consolidated facet buckets");

    ranker::rank(entries)
}

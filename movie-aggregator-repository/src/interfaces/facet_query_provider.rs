//! Facet query provider trait definition.
//!
//! This module defines the abstract interface for the query-executor
//! collaborator, allowing for different backend implementations
//! (OpenSearch, Elasticsearch, etc.) and mock providers in tests.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::FacetQueryError;

/// Abstracts the search backend that computes the facet aggregations.
///
/// Implementations own connection setup, authentication, and query
/// construction. The consolidation pipeline consumes only the raw response
/// values returned here; a provider error is the collaborator's failure
/// signal and the pipeline degrades to an empty result instead of aborting.
///
/// All methods return `Result<T, FacetQueryError>` for consistent error
/// handling across backend implementations.
#[async_trait]
pub trait FacetQueryProvider: Send + Sync {
    /// Check whether the backend cluster is reachable and responding.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The cluster answered the ping
    /// * `Ok(false)` - The cluster was reached but reported itself unhealthy
    /// * `Err(FacetQueryError)` - The cluster could not be reached
    async fn ping(&self) -> Result<bool, FacetQueryError>;

    /// Execute the three-facet actor aggregation and return the raw response.
    ///
    /// The response is keyed by the three known facet names, each mapping to
    /// `{buckets: [{key, doc_count, movies: {hits: {hits: [...]}}}]}`. One or
    /// more facets may be absent when the backend returned no aggregation
    /// for that name; the normalizer recovers from that silently.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The raw aggregation response body
    /// * `Err(FacetQueryError)` - If the request fails or cannot be parsed
    async fn actor_facets(&self) -> Result<Value, FacetQueryError>;

    /// Search for movies featuring the given actor in any of the three actor
    /// fields, with a per-country breakdown aggregation.
    ///
    /// # Arguments
    ///
    /// * `actor_name` - The actor name to match; must not be blank
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The raw search response body
    /// * `Err(FacetQueryError)` - If validation or the request fails
    async fn search_by_actor(&self, actor_name: &str) -> Result<Value, FacetQueryError>;
}

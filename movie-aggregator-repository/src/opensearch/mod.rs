//! OpenSearch implementation of the facet query provider.
//!
//! This module provides a concrete implementation of `FacetQueryProvider`
//! using OpenSearch as the backend.

mod provider;
mod queries;

pub use provider::OpenSearchFacetProvider;
pub use queries::{actor_facets_query, search_by_actor_query};

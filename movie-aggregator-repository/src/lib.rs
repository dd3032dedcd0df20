//! # Movie Aggregator Repository
//!
//! This crate provides the query-executor boundary for the movie facet
//! aggregation: an abstract `FacetQueryProvider` trait plus a concrete
//! OpenSearch implementation that owns connection setup, authentication,
//! and query construction. The core pipeline only ever sees the raw
//! aggregation response this crate returns.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;

pub use config::{BackendConfig, BackendCredentials};
pub use errors::FacetQueryError;
pub use interfaces::FacetQueryProvider;
pub use opensearch::OpenSearchFacetProvider;

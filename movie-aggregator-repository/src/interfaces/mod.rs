//! Interface definitions for the query executor.
//!
//! This module defines the abstract `FacetQueryProvider` trait that allows
//! for dependency injection and swappable search backend implementations.

mod facet_query_provider;

pub use facet_query_provider::FacetQueryProvider;

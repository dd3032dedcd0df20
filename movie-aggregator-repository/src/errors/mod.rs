//! Error types for the query executor.
//!
//! This module provides a unified error type for all backend query operations.

mod facet_query_error;

pub use facet_query_error::FacetQueryError;

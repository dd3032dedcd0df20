//! Query executor error types.
//!
//! This module defines the unified error type for all query-executor
//! operations against the search backend.

use thiserror::Error;

/// Unified errors from query-executor operations.
///
/// Used by the `FacetQueryProvider` trait for all backend interactions.
/// These errors belong to the collaborator boundary: the consolidation core
/// itself never raises them, it only degrades to smaller or empty result
/// sets when the collaborator reports a failure.
#[derive(Debug, Clone, Error)]
pub enum FacetQueryError {
    /// Failed to establish or use the connection to the search backend.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The backend rejected or failed the search request.
    #[error("Query error: {0}")]
    QueryError(String),

    /// Failed to parse the response from the search backend.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid request input (e.g., an empty actor name).
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl FacetQueryError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}

//! Error types for the movie aggregator.

use thiserror::Error;

use movie_aggregator_repository::FacetQueryError;

/// Errors that can occur during aggregator initialization or execution.
///
/// The consolidation pipeline itself is total over any well-formed input;
/// these errors cover the edges around it (wiring, the collaborator
/// boundary, and the export sink).
#[derive(Error, Debug)]
pub enum AggregationError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error from the query-executor collaborator.
    #[error("Query error: {0}")]
    QueryError(#[from] FacetQueryError),

    /// Error writing the export artifact.
    #[error("Export error: {0}")]
    ExportError(String),
}

impl AggregationError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create an export error.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::ExportError(msg.into())
    }
}

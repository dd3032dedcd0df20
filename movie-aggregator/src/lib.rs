//! # Movie Aggregator
//!
//! Consolidates the faceted actor aggregation of the movie index into a
//! single ranked view: one record per actor with their total film count and
//! a deduplicated film-title list.
//!
//! ## Architecture
//!
//! The pipeline follows a Normalizer-Merger-Ranker flow over one query
//! invocation:
//!
//! 1. **Normalizer**: Flattens the raw aggregation response into a uniform
//!    stream of facet buckets
//! 2. **Consolidator**: Folds the stream into one record per actor,
//!    accumulating counts and deduplicating titles
//! 3. **Ranker**: Orders the consolidated records by total film count
//! 4. **Presenter/Exporter**: Renders a bounded display and writes the full
//!    JSON artifact
//!
//! Data flows one way and no component holds state beyond a single
//! invocation. The search backend is an injected collaborator behind the
//! `FacetQueryProvider` trait; its failures degrade to empty results rather
//! than aborting the run.
//!
//! ## Modules
//!
//! - [`config`]: Configuration and dependency initialization
//! - [`normalizer`]: Flattens raw aggregation responses
//! - [`consolidator`]: Merges buckets into per-actor records
//! - [`ranker`]: Orders consolidated records
//! - [`presenter`]: Human-readable rendering
//! - [`export`]: JSON artifact export
//! - [`service`]: Coordinates the collaborator and the pipeline
//! - [`errors`]: Error types for the aggregator

pub mod config;
pub mod consolidator;
pub mod errors;
pub mod export;
pub mod normalizer;
pub mod presenter;
pub mod ranker;
pub mod service;

pub use config::Dependencies;
pub use errors::AggregationError;
pub use service::FilmographyService;

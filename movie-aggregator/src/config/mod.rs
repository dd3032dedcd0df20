//! Configuration and dependency initialization for the aggregator.

mod dependencies;

pub use dependencies::{Dependencies, RunSettings};

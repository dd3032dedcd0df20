//! JSON export of the ranked aggregation.
//!
//! Serializes the entire ranked list to a structured artifact: an ordered
//! JSON array of objects with the stable `actor_name` / `total_films` /
//! `films` fields. No truncation is applied; an empty list exports as an
//! empty array.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use tracing::info;

use crate::errors::AggregationError;
use movie_aggregator_shared::RankedList;

/// Write the full ranked list to `path` as pretty-printed JSON.
///
/// Parent directories are created if missing.
///
/// # Arguments
///
/// * `ranking` - The ranked filmographies to export
/// * `path` - Destination file path
///
/// # Returns
///
/// * `Ok(())` - If the artifact was written
/// * `Err(AggregationError)` - If the file cannot be created or written
pub fn export_to_json(ranking: &RankedList, path: &Path) -> Result<(), AggregationError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                AggregationError::export(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(path).map_err(|e| {
        AggregationError::export(format!("Failed to create {}: {}", path.display(), e))
    })?;

    serde_json::to_writer_pretty(BufWriter::new(file), ranking).map_err(|e| {
        AggregationError::export(format!("Failed to write {}: {}", path.display(), e))
    })?;

    info!(path = %path.display(), entries = ranking.len(), "Exported aggregation results");
    Ok(())
}

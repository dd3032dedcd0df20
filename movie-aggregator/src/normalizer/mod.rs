//! Facet response normalizer.
//!
//! Flattens a raw faceted-aggregation response into a uniform stream of
//! [`FacetBucket`] records tagged with their originating facet name.
//!
//! Facets are visited in the declared order so that the first-seen order of
//! keys (and therefore the tie-break in the ranked output) is deterministic.
//! Within a facet, buckets keep the order supplied by the backend. The
//! normalizer never fails: a missing or structurally malformed facet is
//! treated as absent, and a completely unusable response yields an empty
//! sequence.

use serde_json::Value;

use movie_aggregator_shared::facets::{ACTOR_FACETS, MISSING_TITLE, SAMPLE_AGGREGATION, TITLE_FIELD};
use movie_aggregator_shared::FacetBucket;

/// Flatten the named facets of a raw aggregation response.
///
/// # Arguments
///
/// * `response` - The raw search response body
/// * `facets` - Facet names to visit, in order
pub fn normalize_facets(response: &Value, facets: &[&str]) -> Vec<FacetBucket> {
    let mut normalized = Vec::new();

    let Some(aggregations) = response.get("aggregations") else {
        return normalized;
    };

    for facet in facets {
        let Some(buckets) = aggregations
            .get(*facet)
            .and_then(|agg| agg.get("buckets"))
            .and_then(Value::as_array)
        else {
            // Facet absent from this response, skip without error.
            continue;
        };

        for bucket in buckets {
            let Some(key) = bucket.get("key").and_then(Value::as_str) else {
                continue;
            };
            let doc_count = bucket.get("doc_count").and_then(Value::as_u64).unwrap_or(0);

            normalized.push(FacetBucket::new(
                *facet,
                key,
                doc_count,
                sample_titles(bucket),
            ));
        }
    }

    normalized
}

/// Flatten the three actor facets in their canonical order.
pub fn normalize_actor_facets(response: &Value) -> Vec<FacetBucket> {
    normalize_facets(response, &ACTOR_FACETS)
}

/// Extract the sampled film titles from one raw bucket.
///
/// A sample document lacking the title field yields the sentinel value
/// instead of being dropped, preserving position-count parity with the
/// backend's sample list. Buckets without a sample sub-aggregation (plain
/// terms facets) yield an empty list.
fn sample_titles(bucket: &Value) -> Vec<String> {
    let Some(hits) = bucket
        .get(SAMPLE_AGGREGATION)
        .and_then(|agg| agg.get("hits"))
        .and_then(|outer| outer.get("hits"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    hits.iter()
        .map(|hit| {
            hit.get("_source")
                .and_then(|source| source.get(TITLE_FIELD))
                .and_then(Value::as_str)
                .unwrap_or(MISSING_TITLE)
                .to_string()
        })
        .collect()
}

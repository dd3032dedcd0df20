//! Fixed facet declaration for the actor aggregation.
//!
//! The aggregation is computed independently over the three equivalent
//! actor-name fields of the movie document type. Both the query builder and
//! the response normalizer must agree on the facet names and on the visit
//! order: the normalizer walks facets in the order declared here so that the
//! first-seen order of actors (and therefore the tie-break in the ranked
//! output) is deterministic.

/// Aggregation names for the three actor facets, in canonical visit order.
pub const ACTOR_FACETS: [&str; 3] = [
    "actor_1_aggregation",
    "actor_2_aggregation",
    "actor_3_aggregation",
];

/// Document fields backing each facet in [`ACTOR_FACETS`], position for position.
pub const ACTOR_FIELDS: [&str; 3] = ["actor_1_name", "actor_2_name", "actor_3_name"];

/// Name of the sample-hits sub-aggregation carried by each actor bucket.
pub const SAMPLE_AGGREGATION: &str = "movies";

/// Document field holding the film title extracted from sample hits.
pub const TITLE_FIELD: &str = "movie_title";

/// Sentinel substituted for a sample document that lacks the title field.
///
/// The sentinel keeps position-count parity with the backend's sample list
/// instead of silently dropping the malformed sample.
pub const MISSING_TITLE: &str = "N/A";

/// Aggregation name for the country breakdown of the actor movie search.
pub const COUNTRY_FACET: &str = "by_country";

//! Query bodies for the movie index.
//!
//! This module builds the JSON request bodies sent to the search backend.
//! Query construction is entirely the responsibility of this crate; the
//! consolidation core only ever sees the responses.

use serde_json::{json, Map, Value};

use movie_aggregator_shared::facets::{
    ACTOR_FACETS, ACTOR_FIELDS, COUNTRY_FACET, SAMPLE_AGGREGATION, TITLE_FIELD,
};

/// Maximum number of distinct actor values returned per facet.
const TERMS_SIZE: u32 = 10_000;

/// Maximum number of sample movie documents carried per actor bucket.
const SAMPLE_SIZE: u32 = 100;

/// Maximum number of countries in the actor-search breakdown.
const COUNTRY_TERMS_SIZE: u32 = 50;

/// Build the three-facet actor aggregation query.
///
/// Each facet is a `terms` aggregation over one actor-name keyword field
/// with a `top_hits` sub-aggregation sampling up to [`SAMPLE_SIZE`] movie
/// titles per actor. The request itself returns no hits (`size: 0`); all
/// information flows through the aggregations.
pub fn actor_facets_query() -> Value {
    let mut aggs = Map::new();
    for (facet, field) in ACTOR_FACETS.iter().zip(ACTOR_FIELDS.iter()) {
        aggs.insert(
            facet.to_string(),
            json!({
                "terms": {
                    "field": format!("{}.keyword", field),
                    "size": TERMS_SIZE
                },
                "aggs": {
                    (SAMPLE_AGGREGATION): {
                        "top_hits": {
                            "size": SAMPLE_SIZE,
                            "_source": [TITLE_FIELD, field]
                        }
                    }
                }
            }),
        );
    }

    json!({
        "size": 0,
        "aggs": aggs
    })
}

/// Build the "movies featuring an actor" query.
///
/// Matches the actor name against any of the three actor fields
/// (`minimum_should_match: 1`) and aggregates the matching movies by
/// production country.
pub fn search_by_actor_query(actor_name: &str) -> Value {
    let should: Vec<Value> = ACTOR_FIELDS
        .iter()
        .map(|field| json!({ "match": { (*field): actor_name } }))
        .collect();

    json!({
        "size": 0,
        "track_total_hits": true,
        "query": {
            "bool": {
                "should": should,
                "minimum_should_match": 1
            }
        },
        "aggs": {
            (COUNTRY_FACET): {
                "terms": {
                    "field": "country",
                    "size": COUNTRY_TERMS_SIZE
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_facets_query_declares_all_facets() {
        let query = actor_facets_query();

        assert_eq!(query["size"], 0);
        for facet in ACTOR_FACETS {
            assert!(
                query["aggs"][facet].is_object(),
                "missing facet {} in query",
                facet
            );
        }
    }

    #[test]
    fn test_actor_facets_query_terms_fields_use_keyword() {
        let query = actor_facets_query();

        assert_eq!(
            query["aggs"]["actor_1_aggregation"]["terms"]["field"],
            "actor_1_name.keyword"
        );
        assert_eq!(
            query["aggs"]["actor_3_aggregation"]["terms"]["field"],
            "actor_3_name.keyword"
        );
    }

    #[test]
    fn test_actor_facets_query_samples_titles() {
        let query = actor_facets_query();
        let top_hits = &query["aggs"]["actor_2_aggregation"]["aggs"]["movies"]["top_hits"];

        assert_eq!(top_hits["size"], 100);
        assert_eq!(top_hits["_source"][0], "movie_title");
        assert_eq!(top_hits["_source"][1], "actor_2_name");
    }

    #[test]
    fn test_search_by_actor_query_matches_all_fields() {
        let query = search_by_actor_query("Vin Diesel");
        let should = query["query"]["bool"]["should"].as_array().unwrap();

        assert_eq!(should.len(), 3);
        assert_eq!(should[0]["match"]["actor_1_name"], "Vin Diesel");
        assert_eq!(should[2]["match"]["actor_3_name"], "Vin Diesel");
        assert_eq!(query["query"]["bool"]["minimum_should_match"], 1);
    }

    #[test]
    fn test_search_by_actor_query_country_breakdown() {
        let query = search_by_actor_query("Vin Diesel");

        assert_eq!(query["aggs"]["by_country"]["terms"]["field"], "country");
        assert_eq!(query["aggs"]["by_country"]["terms"]["size"], 50);
    }
}

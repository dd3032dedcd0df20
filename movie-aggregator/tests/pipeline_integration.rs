//! Integration tests for the aggregation pipeline.
//!
//! These tests run the real FilmographyService against a mock
//! FacetQueryProvider returning canned aggregation responses, covering the
//! full normalize-consolidate-rank flow plus presentation and export.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use movie_aggregator::{export, presenter, FilmographyService};
use movie_aggregator_repository::{FacetQueryError, FacetQueryProvider};

/// Mock provider serving a fixed response.
struct MockProvider {
    response: Value,
    healthy: bool,
}

impl MockProvider {
    fn new(response: Value) -> Self {
        Self {
            response,
            healthy: true,
        }
    }

    fn unhealthy() -> Self {
        Self {
            response: Value::Null,
            healthy: false,
        }
    }
}

#[async_trait]
impl FacetQueryProvider for MockProvider {
    async fn ping(&self) -> Result<bool, FacetQueryError> {
        Ok(self.healthy)
    }

    async fn actor_facets(&self) -> Result<Value, FacetQueryError> {
        if self.healthy {
            Ok(self.response.clone())
        } else {
            Err(FacetQueryError::connection("connection refused"))
        }
    }

    async fn search_by_actor(&self, _actor_name: &str) -> Result<Value, FacetQueryError> {
        if self.healthy {
            Ok(self.response.clone())
        } else {
            Err(FacetQueryError::connection("connection refused"))
        }
    }
}

fn facet(buckets: Value) -> Value {
    json!({ "buckets": buckets })
}

fn bucket(key: &str, doc_count: u64, titles: &[&str]) -> Value {
    let hits: Vec<Value> = titles
        .iter()
        .map(|title| json!({ "_source": { "movie_title": title } }))
        .collect();
    json!({
        "key": key,
        "doc_count": doc_count,
        "movies": { "hits": { "hits": hits } }
    })
}

#[tokio::test]
async fn test_full_pipeline_consolidates_and_ranks() {
    let response = json!({
        "aggregations": {
            "actor_1_aggregation": facet(json!([
                bucket("Vin Diesel", 3, &["Fast Five", "xXx"]),
                bucket("Paul Walker", 4, &["Fast Five"])
            ])),
            "actor_2_aggregation": facet(json!([
                bucket("Vin Diesel", 2, &["xXx", "Riddick"])
            ])),
            "actor_3_aggregation": facet(json!([]))
        }
    });

    let service = FilmographyService::new(Arc::new(MockProvider::new(response)));
    let ranking = service.actor_filmographies().await;

    assert_eq!(ranking.len(), 2);

    // Vin Diesel: 3 + 2 = 5 films, titles deduplicated across facets.
    let top = &ranking.entries()[0];
    assert_eq!(top.actor_name, "Vin Diesel");
    assert_eq!(top.total_films, 5);
    assert_eq!(top.films, vec!["Fast Five", "xXx", "Riddick"]);

    let second = &ranking.entries()[1];
    assert_eq!(second.actor_name, "Paul Walker");
    assert_eq!(second.total_films, 4);
}

#[tokio::test]
async fn test_tied_totals_keep_facet_scan_order() {
    // "A" is first seen in facet 1, "B" only in facet 2; with equal totals
    // "A" must rank first on every run.
    let response = json!({
        "aggregations": {
            "actor_1_aggregation": facet(json!([bucket("A", 5, &[])])),
            "actor_2_aggregation": facet(json!([bucket("B", 5, &[])]))
        }
    });

    let service = FilmographyService::new(Arc::new(MockProvider::new(response)));

    for _ in 0..3 {
        let ranking = service.actor_filmographies().await;
        let names: Vec<&str> = ranking.iter().map(|e| e.actor_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}

#[tokio::test]
async fn test_missing_facets_and_titles_are_recovered() {
    let response = json!({
        "aggregations": {
            "actor_3_aggregation": facet(json!([
                {
                    "key": "Uncredited",
                    "doc_count": 1,
                    "movies": { "hits": { "hits": [ { "_source": {} } ] } }
                }
            ]))
        }
    });

    let service = FilmographyService::new(Arc::new(MockProvider::new(response)));
    let ranking = service.actor_filmographies().await;

    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking.entries()[0].films, vec!["N/A"]);
}

#[tokio::test]
async fn test_unreachable_backend_yields_empty_ranking() {
    let service = FilmographyService::new(Arc::new(MockProvider::unhealthy()));

    assert!(!service.verify_connection().await);

    let ranking = service.actor_filmographies().await;
    assert!(ranking.is_empty());
    assert_eq!(
        presenter::render_filmographies(&ranking, Some(20), "movie_idx"),
        "No results found.\n"
    );
}

#[tokio::test]
async fn test_bounded_display_accounts_for_omitted_entries() {
    let buckets: Vec<Value> = (0..5)
        .map(|i| bucket(&format!("Actor {}", i), 10 - i as u64, &[]))
        .collect();
    let response = json!({
        "aggregations": { "actor_1_aggregation": facet(json!(buckets)) }
    });

    let service = FilmographyService::new(Arc::new(MockProvider::new(response)));
    let ranking = service.actor_filmographies().await;

    let out = presenter::render_filmographies(&ranking, Some(2), "movie_idx");
    assert!(out.contains("1. Actor: Actor 0"));
    assert!(out.contains("2. Actor: Actor 1"));
    assert!(out.contains("... and 3 more actors"));
}

#[tokio::test]
async fn test_export_artifact_matches_ranking() {
    let response = json!({
        "aggregations": {
            "actor_1_aggregation": facet(json!([
                bucket("Vin Diesel", 2, &["Fast Five", "xXx"])
            ]))
        }
    });

    let service = FilmographyService::new(Arc::new(MockProvider::new(response)));
    let ranking = service.actor_filmographies().await;

    let path = std::env::temp_dir().join(format!(
        "movie-aggregator-integration-{}.json",
        std::process::id()
    ));
    export::export_to_json(&ranking, &path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();
    let parsed: Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(parsed[0]["actor_name"], "Vin Diesel");
    assert_eq!(parsed[0]["total_films"], 2);
    assert_eq!(parsed[0]["films"], json!(["Fast Five", "xXx"]));
}

#[tokio::test]
async fn test_movies_featuring_breaks_down_by_country() {
    let response = json!({
        "hits": { "total": { "value": 12 } },
        "aggregations": {
            "by_country": facet(json!([
                { "key": "USA", "doc_count": 10 },
                { "key": "UK", "doc_count": 2 }
            ]))
        }
    });

    let service = FilmographyService::new(Arc::new(MockProvider::new(response)));
    let summary = service.movies_featuring("Vin Diesel").await;

    assert_eq!(summary.actor_name, "Vin Diesel");
    assert_eq!(summary.total_matches, 12);
    assert_eq!(summary.countries.len(), 2);
    assert_eq!(summary.countries[0].country, "USA");
    assert_eq!(summary.countries[0].movie_count, 10);
}

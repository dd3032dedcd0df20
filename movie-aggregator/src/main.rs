//! Movie Aggregator Main Entry Point
//!
//! Runs the faceted actor aggregation against the movie index, prints the
//! bounded ranked display, and exports the full result list as JSON. An
//! optional first argument names an actor to additionally search for, with
//! a per-country breakdown of their movies.

use std::env;

use dotenv::dotenv;
use movie_aggregator::{presenter, AggregationError, Dependencies};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging.
fn init_tracing() -> Result<(), AggregationError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("movie_aggregator=info,movie_aggregator_repository=info"));

    let axiom_token = env::var("AXIOM_TOKEN").ok();

    if axiom_token.is_some() {
        // With Axiom token, use JSON format for structured logging
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .init();

        info!(
            service_name = "movie-aggregator",
            service_version = env!("CARGO_PKG_VERSION"),
            "Tracing initialized with JSON format"
        );
    } else {
        // Without Axiom, use pretty console output
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .init();

        info!(
            service_name = "movie-aggregator",
            service_version = env!("CARGO_PKG_VERSION"),
            "Tracing initialized with console output"
        );
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), AggregationError> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize tracing
    init_tracing()?;

    info!("Starting movie aggregator");

    let deps = match Dependencies::new() {
        Ok(deps) => {
            info!("Dependencies initialized successfully");
            deps
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    // The connection check is the collaborator's status signal: without it
    // an empty result below would be indistinguishable from "no data".
    if !deps.service.verify_connection().await {
        error!("Could not connect to the search backend, aborting");
        return Ok(());
    }

    info!("Search backend connection established");

    let ranking = deps.service.actor_filmographies().await;
    presenter::print_filmographies(&ranking, deps.settings.display_limit, &deps.settings.index);

    movie_aggregator::export::export_to_json(&ranking, &deps.settings.export_path)?;

    // Optional supplemental search: movies featuring one actor.
    if let Some(actor_name) = env::args().nth(1) {
        let summary = deps.service.movies_featuring(&actor_name).await;
        presenter::print_actor_search(&summary);
    }

    info!("Movie aggregator completed successfully");
    Ok(())
}

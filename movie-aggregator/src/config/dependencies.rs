//! Dependency initialization and wiring for the aggregator.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::service::FilmographyService;
use crate::AggregationError;
use movie_aggregator_repository::{BackendConfig, BackendCredentials, OpenSearchFacetProvider};

/// Default search backend URL.
const DEFAULT_OPENSEARCH_URL: &str = "http://localhost:9200";

/// Default movie index name.
const DEFAULT_MOVIE_INDEX: &str = "movie_idx";

/// Default number of actors shown in the bounded display.
const DEFAULT_DISPLAY_LIMIT: usize = 20;

/// Default path of the exported JSON artifact.
const DEFAULT_EXPORT_PATH: &str = "actor_films_aggregation.json";

/// Runtime settings for one aggregator invocation.
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// The queried index name, shown in the display header.
    pub index: String,
    /// Bounded display size; `None` renders all entries.
    pub display_limit: Option<usize>,
    /// Destination of the full JSON export.
    pub export_path: PathBuf,
}

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured service ready to run queries.
    pub service: FilmographyService,
    /// Settings for presentation and export.
    pub settings: RunSettings,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OPENSEARCH_URL`: Search backend URL (default: http://localhost:9200)
    /// - `MOVIE_INDEX`: Movie index name (default: "movie_idx")
    /// - `OPENSEARCH_API_KEY_ID` / `OPENSEARCH_API_KEY`: API key; preferred when set
    /// - `OPENSEARCH_USERNAME` / `OPENSEARCH_PASSWORD`: Basic auth fallback
    /// - `DISPLAY_LIMIT`: Bounded display size; 0 renders all (default: 20)
    /// - `EXPORT_PATH`: JSON artifact path (default: actor_films_aggregation.json)
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(AggregationError)` - If provider construction fails
    pub fn new() -> Result<Self, AggregationError> {
        let url = env::var("OPENSEARCH_URL").unwrap_or_else(|_| DEFAULT_OPENSEARCH_URL.to_string());
        let index = env::var("MOVIE_INDEX").unwrap_or_else(|_| DEFAULT_MOVIE_INDEX.to_string());
        let credentials = Self::credentials_from_env();
        let settings = RunSettings {
            index: index.clone(),
            display_limit: Self::display_limit_from_env(),
            export_path: PathBuf::from(
                env::var("EXPORT_PATH").unwrap_or_else(|_| DEFAULT_EXPORT_PATH.to_string()),
            ),
        };

        info!(
            url = %url,
            index = %index,
            authenticated = credentials.is_some(),
            display_limit = ?settings.display_limit,
            export_path = %settings.export_path.display(),
            "Initializing dependencies"
        );

        let mut config = BackendConfig::new(url, index);
        if let Some(credentials) = credentials {
            config = config.with_credentials(credentials);
        }

        let provider = OpenSearchFacetProvider::new(config).map_err(|e| {
            AggregationError::config(format!("Failed to create search provider: {}", e))
        })?;

        Ok(Self {
            service: FilmographyService::new(Arc::new(provider)),
            settings,
        })
    }

    /// Read backend credentials from the environment.
    ///
    /// An API key takes precedence over basic credentials when both are set.
    fn credentials_from_env() -> Option<BackendCredentials> {
        if let (Ok(id), Ok(key)) = (
            env::var("OPENSEARCH_API_KEY_ID"),
            env::var("OPENSEARCH_API_KEY"),
        ) {
            if !id.is_empty() && !key.is_empty() {
                return Some(BackendCredentials::ApiKey { id, key });
            }
        }

        match (
            env::var("OPENSEARCH_USERNAME"),
            env::var("OPENSEARCH_PASSWORD"),
        ) {
            (Ok(username), Ok(password)) if !username.is_empty() => {
                Some(BackendCredentials::Basic { username, password })
            }
            _ => None,
        }
    }

    /// Read the bounded display size from the environment.
    ///
    /// `0` renders all entries; an unparseable value falls back to the
    /// default with a warning.
    fn display_limit_from_env() -> Option<usize> {
        match env::var("DISPLAY_LIMIT") {
            Err(_) => Some(DEFAULT_DISPLAY_LIMIT),
            Ok(raw) => match raw.parse::<usize>() {
                Ok(0) => None,
                Ok(limit) => Some(limit),
                Err(_) => {
                    warn!(value = %raw, "Invalid DISPLAY_LIMIT, using default");
                    Some(DEFAULT_DISPLAY_LIMIT)
                }
            },
        }
    }
}

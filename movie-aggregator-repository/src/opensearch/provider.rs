//! OpenSearch provider implementation.
//!
//! This module provides the concrete implementation of `FacetQueryProvider`
//! using the OpenSearch Rust crate.

use async_trait::async_trait;
use opensearch::auth::Credentials;
use opensearch::http::transport::{SingleNodeConnectionPool, TransportBuilder};
use opensearch::{OpenSearch, SearchParts};
use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

use crate::config::{BackendConfig, BackendCredentials};
use crate::errors::FacetQueryError;
use crate::interfaces::FacetQueryProvider;
use crate::opensearch::queries;

/// OpenSearch query executor.
///
/// Owns the connection to the cluster and the construction of the facet
/// aggregation queries against the configured movie index.
///
/// # Example
///
/// ```ignore
/// use movie_aggregator_repository::{BackendConfig, OpenSearchFacetProvider};
///
/// let config = BackendConfig::new("http://localhost:9200", "movie_idx");
/// let provider = OpenSearchFacetProvider::new(config)?;
/// let response = provider.actor_facets().await?;
/// ```
pub struct OpenSearchFacetProvider {
    client: OpenSearch,
    config: BackendConfig,
}

impl OpenSearchFacetProvider {
    /// Create a new provider from the given backend configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Backend URL, target index, and optional credentials
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchFacetProvider)` - A new provider instance
    /// * `Err(FacetQueryError)` - If connection setup fails
    pub fn new(config: BackendConfig) -> Result<Self, FacetQueryError> {
        let parsed_url =
            Url::parse(&config.url).map_err(|e| FacetQueryError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let mut builder = TransportBuilder::new(conn_pool).disable_proxy();

        if let Some(ref credentials) = config.credentials {
            builder = builder.auth(match credentials {
                BackendCredentials::Basic { username, password } => {
                    Credentials::Basic(username.clone(), password.clone())
                }
                BackendCredentials::ApiKey { id, key } => {
                    Credentials::ApiKey(id.clone(), key.clone())
                }
            });
        }

        let transport = builder
            .build()
            .map_err(|e| FacetQueryError::connection(e.to_string()))?;
        let client = OpenSearch::new(transport);

        info!(
            url = %config.url,
            index = %config.index,
            authenticated = config.credentials.is_some(),
            "Created OpenSearch facet provider"
        );

        Ok(Self { client, config })
    }

    /// Send a search request against the configured index and return the
    /// parsed response body.
    async fn search(&self, body: Value) -> Result<Value, FacetQueryError> {
        let response = self
            .client
            .search(SearchParts::Index(&[self.config.index.as_str()]))
            .body(body)
            .send()
            .await
            .map_err(|e| FacetQueryError::query(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Search request failed");
            return Err(FacetQueryError::query(format!(
                "Search failed with status {}: {}",
                status, error_body
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FacetQueryError::parse(e.to_string()))
    }
}

#[async_trait]
impl FacetQueryProvider for OpenSearchFacetProvider {
    async fn ping(&self) -> Result<bool, FacetQueryError> {
        let response = self
            .client
            .ping()
            .send()
            .await
            .map_err(|e| FacetQueryError::connection(e.to_string()))?;

        let healthy = response.status_code().is_success();
        debug!(healthy, "Pinged search backend");
        Ok(healthy)
    }

    async fn actor_facets(&self) -> Result<Value, FacetQueryError> {
        debug!(index = %self.config.index, "Executing actor facet aggregation");
        self.search(queries::actor_facets_query()).await
    }

    async fn search_by_actor(&self, actor_name: &str) -> Result<Value, FacetQueryError> {
        if actor_name.trim().is_empty() {
            return Err(FacetQueryError::validation(
                "Actor name must not be blank".to_string(),
            ));
        }

        debug!(index = %self.config.index, actor = %actor_name, "Searching movies by actor");
        self.search(queries::search_by_actor_query(actor_name))
            .await
    }
}

//! Backend configuration for the query executor.
//!
//! Connection details and credentials are passed explicitly at provider
//! construction time. Nothing in this crate reads the environment; the
//! binary's dependency wiring decides where the values come from.

/// Credentials for the search backend.
///
/// When both an API key and basic credentials are available, callers should
/// prefer the API key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCredentials {
    /// HTTP basic authentication.
    Basic {
        /// The username.
        username: String,
        /// The password.
        password: String,
    },
    /// An API key, as its id and secret parts.
    ApiKey {
        /// The API key id.
        id: String,
        /// The API key secret.
        key: String,
    },
}

/// Configuration for the search backend connection.
///
/// # Fields
///
/// - `url`: The backend server URL (e.g., "http://localhost:9200")
/// - `index`: The movie index to query
/// - `credentials`: Optional authentication; `None` connects anonymously
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub url: String,
    pub index: String,
    pub credentials: Option<BackendCredentials>,
}

/// Default movie index name.
pub const DEFAULT_INDEX: &str = "movie_idx";

impl BackendConfig {
    /// Create an unauthenticated configuration for the given URL and index.
    pub fn new(url: impl Into<String>, index: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            index: index.into(),
            credentials: None,
        }
    }

    /// Attach credentials to this configuration.
    pub fn with_credentials(mut self, credentials: BackendCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config_is_anonymous() {
        let config = BackendConfig::new("http://localhost:9200", DEFAULT_INDEX);
        assert_eq!(config.url, "http://localhost:9200");
        assert_eq!(config.index, "movie_idx");
        assert!(config.credentials.is_none());
    }

    #[test]
    fn test_with_credentials() {
        let config = BackendConfig::new("http://localhost:9200", "movie_idx").with_credentials(
            BackendCredentials::Basic {
                username: "elastic".to_string(),
                password: "secret".to_string(),
            },
        );

        assert!(matches!(
            config.credentials,
            Some(BackendCredentials::Basic { .. })
        ));
    }
}

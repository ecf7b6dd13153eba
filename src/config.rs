//! Backend connection settings.
//!
//! The base URL is environment-configurable: `GENSTACK_API_URL` (also read
//! from a `.env` file via dotenvy), defaulting to `http://localhost:8000`.

use thiserror::Error;
use url::Url;

/// Environment variable naming the backend base URL.
pub const BASE_URL_ENV: &str = "GENSTACK_API_URL";

/// Backend base URL used when no environment override is present.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid backend base URL {value:?}: {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Connection settings for [`BackendClient`](crate::client::BackendClient).
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: Url,
}

impl ClientConfig {
    /// Resolves the base URL from the environment, falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let value =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(&value)
    }

    /// Builds a configuration from an explicit base URL.
    pub fn with_base_url(value: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(value).map_err(|source| ConfigError::InvalidBaseUrl {
            value: value.to_string(),
            source,
        })?;
        Ok(Self { base_url })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url.as_str(), "http://localhost:8000/");
    }

    #[test]
    fn rejects_malformed_base_url() {
        let err = ClientConfig::with_base_url("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }
}

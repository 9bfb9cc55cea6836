//! Client configuration.

use std::time::Duration;

use crate::error::ConfigError;

/// Production JSON endpoint of the Nova Poshta API.
pub const DEFAULT_API_URL: &str = "https://api.novaposhta.ua/v2.0/json/";

/// Deadline applied to every HTTP exchange.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const API_KEY_VAR: &str = "NOVA_POSHTA_API_KEY";
pub const API_URL_VAR: &str = "NOVA_POSHTA_API_URL";

/// API key and endpoint used by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    api_key: String,
    api_url: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Reads `NOVA_POSHTA_API_KEY` and, if set, `NOVA_POSHTA_API_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| ConfigError::MissingVar(API_KEY_VAR))?;
        let config = Self::new(api_key);
        Ok(match std::env::var(API_URL_VAR) {
            Ok(url) if !url.is_empty() => config.with_api_url(url),
            _ => config,
        })
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_endpoint() {
        let config = Config::new("test_api_key");
        assert_eq!(config.api_key(), "test_api_key");
        assert_eq!(config.api_url(), "https://api.novaposhta.ua/v2.0/json/");
    }

    #[test]
    fn api_key_can_be_replaced() {
        let mut config = Config::new("old");
        config.set_api_key("new");
        assert_eq!(config.api_key(), "new");
    }

    #[test]
    fn api_url_override() {
        let config = Config::new("k").with_api_url("http://127.0.0.1:3000/v2.0/json/");
        assert_eq!(config.api_url(), "http://127.0.0.1:3000/v2.0/json/");
    }

    #[test]
    fn from_env_reads_key_and_optional_url() {
        // One test so the cases don't race on the process environment.
        std::env::remove_var(API_KEY_VAR);
        std::env::remove_var(API_URL_VAR);
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(API_KEY_VAR)));
        assert_eq!(
            err.to_string(),
            "environment variable NOVA_POSHTA_API_KEY is not set"
        );

        std::env::set_var(API_KEY_VAR, "env_api_key");
        let config = Config::from_env().unwrap();
        assert_eq!(config.api_key(), "env_api_key");
        assert_eq!(config.api_url(), DEFAULT_API_URL);

        std::env::set_var(API_URL_VAR, "http://127.0.0.1:3000/v2.0/json/");
        let config = Config::from_env().unwrap();
        assert_eq!(config.api_key(), "env_api_key");
        assert_eq!(config.api_url(), "http://127.0.0.1:3000/v2.0/json/");

        std::env::remove_var(API_KEY_VAR);
        std::env::remove_var(API_URL_VAR);
    }
}

//! Client configuration.

use std::time::Duration;

use crate::error::{SkaldError, SkaldResult};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.useskald.com";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "SKALD_API_KEY";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "SKALD_BASE_URL";

/// Connection configuration for [`crate::SkaldClient`].
///
/// # Example
///
/// ```ignore
/// use skald::ClientConfig;
///
/// let config = ClientConfig::new("sk_live_...")
///     .with_base_url("https://skald.internal/")
///     .with_timeout(Duration::from_secs(60));
/// assert_eq!(config.base_url, "https://skald.internal");
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    /// Bearer credential sent on every request
    pub api_key: String,
    /// API root without trailing slashes
    pub base_url: String,
    /// Per-request timeout for the default transport
    pub timeout: Duration,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration for the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the API root. Trailing slashes are stripped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load from `SKALD_API_KEY` and, if set, `SKALD_BASE_URL`.
    pub fn from_env() -> SkaldResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| SkaldError::Config(format!("{} is not set", API_KEY_ENV)))?;

        let config = Self::new(api_key);
        Ok(match std::env::var(BASE_URL_ENV) {
            Ok(base_url) if !base_url.trim().is_empty() => config.with_base_url(base_url),
            _ => config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("test-key");
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "https://api.useskald.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_trailing_slashes_removed() {
        let config = ClientConfig::new("k").with_base_url("https://api.test.com///");
        assert_eq!(config.base_url, "https://api.test.com");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ClientConfig::new("sk_secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk_secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    #[serial]
    fn test_from_env() {
        std::env::set_var(API_KEY_ENV, "env-key");
        std::env::set_var(BASE_URL_ENV, "http://localhost:8000/");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.base_url, "http://localhost:8000");

        std::env::remove_var(API_KEY_ENV);
        std::env::remove_var(BASE_URL_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_missing_key() {
        std::env::remove_var(API_KEY_ENV);

        let result = ClientConfig::from_env();
        assert!(matches!(result, Err(SkaldError::Config(_))));
    }

    #[test]
    #[serial]
    fn test_from_env_default_base_url() {
        std::env::set_var(API_KEY_ENV, "env-key");
        std::env::remove_var(BASE_URL_ENV);

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);

        std::env::remove_var(API_KEY_ENV);
    }
}

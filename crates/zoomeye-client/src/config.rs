//! Client configuration types.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use zoomeye_core::QueryStyle;

/// The ZoomEye API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.zoomeye.org";

/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Settings for a [`ZoomEyeClient`](crate::ZoomEyeClient).
///
/// Deserializable so callers can keep it in their own config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API origin every endpoint path is appended to
    pub base_url: String,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,

    /// Value of the User-Agent header
    pub user_agent: String,

    /// How filter terms are joined in the query string
    pub query_style: QueryStyle,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: format!("zoomeye-rust/{}", env!("CARGO_PKG_VERSION")),
            query_style: QueryStyle::default(),
        }
    }
}

impl ClientConfig {
    /// Request timeout as a [`Duration`]
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.zoomeye.org");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.user_agent.starts_with("zoomeye-rust/"));
        assert_eq!(config.query_style, QueryStyle::Legacy);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "http://localhost:8080", "query_style": "spaced"}"#)
                .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.query_style, QueryStyle::Spaced);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_sub_second_timeout() {
        let config: ClientConfig = serde_json::from_str(r#"{"timeout_ms": 750}"#).unwrap();
        assert_eq!(config.timeout(), Duration::from_millis(750));
    }
}

//! Client configuration.

use std::time::Duration;

/// Default base URL of the read API.
pub const DEFAULT_BASE_URL: &str = "https://nvdbapiles-v3.atlas.vegvesen.no";

/// Media type selecting the API revision this client understands.
pub const DEFAULT_API_REVISION: &str = "application/vnd.vegvesen.nvdb-v3-rev1+json";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the road network API client.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Sent as `User-Agent`
    pub user_agent: String,
    /// Sent as `X-Client`; identifies the calling application
    pub client_name: String,
    /// Pin responses to a datakatalog version, if set
    pub datakatalog_version: Option<String>,
    /// Ask for gzip/deflate responses
    pub enable_compression: bool,
    /// Sent as `Accept`
    pub api_revision: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create a new config identifying the caller as `client_name`.
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("nvdb-client/{}", env!("CARGO_PKG_VERSION")),
            client_name: client_name.into(),
            datakatalog_version: None,
            enable_compression: true,
            api_revision: DEFAULT_API_REVISION.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Build a config from `NVDB_*` environment variables.
    ///
    /// Unset variables keep their defaults. `NVDB_CLIENT_NAME` falls back
    /// to the crate name.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config =
            Self::new(lookup("NVDB_CLIENT_NAME").unwrap_or_else(|| "nvdb-client".to_string()));

        if let Some(url) = lookup("NVDB_BASE_URL") {
            config = config.with_base_url(url);
        }
        if let Some(agent) = lookup("NVDB_USER_AGENT") {
            config = config.with_user_agent(agent);
        }
        if let Some(version) = lookup("NVDB_DATAKATALOG_VERSION") {
            config = config.with_datakatalog_version(version);
        }
        if let Some(flag) = lookup("NVDB_COMPRESSION") {
            config = config.with_compression(!matches!(flag.as_str(), "0" | "false" | "off"));
        }
        if let Some(secs) = lookup("NVDB_TIMEOUT_SECS").and_then(|s| s.parse().ok()) {
            config = config.with_timeout(secs);
        }

        config
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    pub fn with_datakatalog_version(mut self, version: impl Into<String>) -> Self {
        self.datakatalog_version = Some(version.into());
        self
    }

    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.enable_compression = enabled;
        self
    }

    pub fn with_api_revision(mut self, revision: impl Into<String>) -> Self {
        self.api_revision = revision.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn config_defaults() {
        let config = ClientConfig::new("my-app");

        assert_eq!(config.client_name, "my-app");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_revision, DEFAULT_API_REVISION);
        assert!(config.user_agent.starts_with("nvdb-client/"));
        assert!(config.enable_compression);
        assert!(config.datakatalog_version.is_none());
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn config_builder() {
        let config = ClientConfig::new("my-app")
            .with_base_url("http://localhost:8080/")
            .with_datakatalog_version("2.31")
            .with_compression(false)
            .with_timeout(5);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.datakatalog_version.as_deref(), Some("2.31"));
        assert!(!config.enable_compression);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn config_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("NVDB_CLIENT_NAME", "env-app"),
            ("NVDB_BASE_URL", "http://mock"),
            ("NVDB_COMPRESSION", "off"),
            ("NVDB_TIMEOUT_SECS", "not a number"),
        ]);
        let config = ClientConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.client_name, "env-app");
        assert_eq!(config.base_url, "http://mock");
        assert!(!config.enable_compression);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.datakatalog_version.is_none());
    }

    #[test]
    fn config_from_empty_lookup() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config, ClientConfig::new("nvdb-client"));
    }
}

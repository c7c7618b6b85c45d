//! Configuration for the triage coordinator.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Environment variable overriding the configured service URL.
pub const SERVICE_URL_ENV: &str = "TRIAGE_SERVICE_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageConfig {
    /// Remote classification/assignment service.
    #[serde(default)]
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the remote service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds. Transport-level only; the
    /// coordinator itself imposes no timeout.
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".into()
}

fn default_timeout() -> u64 {
    30_000
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout(),
        }
    }
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
        }
    }
}

impl TriageConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Resolve the effective service URL: explicit env var wins over the
    /// configured value.
    pub fn resolve_service_url(&self) -> String {
        std::env::var(SERVICE_URL_ENV)
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| self.service.base_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_localhost() {
        let config = TriageConfig::default();
        assert_eq!(config.service.base_url, "http://localhost:8000");
        assert_eq!(config.service.timeout_ms, 30_000);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: TriageConfig = toml::from_str(
            r#"
            [service]
            base_url = "http://triage.internal:9000"
            "#,
        )
        .unwrap();
        assert_eq!(config.service.base_url, "http://triage.internal:9000");
        assert_eq!(config.service.timeout_ms, 30_000);
    }

    #[test]
    fn empty_toml_is_valid() {
        let config: TriageConfig = toml::from_str("").unwrap();
        assert_eq!(config.service.base_url, default_base_url());
    }
}

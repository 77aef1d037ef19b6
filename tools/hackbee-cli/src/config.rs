//! CLI configuration.

use anyhow::{Context, Result};
use hackbee_layout::SineWaveOptions;
use hackbee_observability::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};

/// Environment variable overriding `api.base_url`.
pub const BASE_URL_ENV: &str = "HACKBEE_BASE_URL";

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// API configuration.
    #[serde(default)]
    pub api: ApiConfig,

    /// Token storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Default level path layout.
    #[serde(default)]
    pub layout: SineWaveOptions,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse config content; `.json` paths are JSON, everything else TOML.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Apply an override for the base URL, typically from the environment.
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|url| !url.is_empty()) {
            self.api.base_url = url;
        }
        self
    }
}

/// API endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Prepended verbatim to every endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Endpoint returning the current user's progress.
    #[serde(default = "default_progress_endpoint")]
    pub progress_endpoint: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_progress_endpoint() -> String {
    "/users/me/progress".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            progress_endpoint: default_progress_endpoint(),
        }
    }
}

/// Token storage settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage file path (default: `~/.local/share/hackbee/storage.json`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level written.
    #[serde(default = "default_level")]
    pub level: LogLevel,

    /// Output format.
    #[serde(default = "default_format")]
    pub format: LogFormat,
}

fn default_level() -> LogLevel {
    LogLevel::Warn
}

fn default_format() -> LogFormat {
    LogFormat::Human
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

/// Generate a default hackbee.toml config file.
pub fn generate_default_config() -> String {
    r#"# HackBee client configuration

[api]
base_url = "http://localhost:8000"
progress_endpoint = "/users/me/progress"

[storage]
# path = "/home/me/.local/share/hackbee/storage.json"

[logging]
level = "warn"
format = "human"

[layout]
amplitude = 80.0
vertical_gap = 130.0
start_y = 50.0
phase_offset = 0.0
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = CliConfig::parse("hackbee.toml", "").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.progress_endpoint, "/users/me/progress");
        assert!(config.storage.path.is_none());
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.logging.format, LogFormat::Human);
        assert_eq!(config.layout, SineWaveOptions::default());
    }

    #[test]
    fn test_generated_config_parses() {
        let config = CliConfig::parse("hackbee.toml", &generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.layout, SineWaveOptions::default());
    }

    #[test]
    fn test_partial_sections() {
        let content = r#"
[api]
base_url = "https://api.hackbee.dev"

[logging]
level = "debug"
format = "json"

[layout]
amplitude = 40
"#;
        let config = CliConfig::parse("hackbee.toml", content).unwrap();
        assert_eq!(config.api.base_url, "https://api.hackbee.dev");
        assert_eq!(config.api.progress_endpoint, "/users/me/progress");
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.layout.amplitude, 40.0);
        assert_eq!(config.layout.vertical_gap, 130.0);
    }

    #[test]
    fn test_json_config() {
        let content = r#"{"api": {"base_url": "http://10.0.0.2:9000"}, "storage": {"path": "/tmp/s.json"}}"#;
        let config = CliConfig::parse("hackbee.json", content).unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.2:9000");
        assert_eq!(config.storage.path.as_deref(), Some("/tmp/s.json"));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(CliConfig::parse("hackbee.toml", "[api\nbase_url =").is_err());
    }

    #[test]
    fn test_base_url_override() {
        let config = CliConfig::default()
            .with_base_url_override(Some("http://override".to_string()));
        assert_eq!(config.api.base_url, "http://override");

        let config = CliConfig::default().with_base_url_override(Some(String::new()));
        assert_eq!(config.api.base_url, "http://localhost:8000");

        let config = CliConfig::default().with_base_url_override(None);
        assert_eq!(config.api.base_url, "http://localhost:8000");
    }
}

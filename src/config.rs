//! Configuration System
//!
//! Handles loading configuration from files and environment variables,
//! and resolving the single API base URL every request is issued against.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// API base URL embedded at build time, if `SARO_API_URL` was set for the build.
pub const BUILD_TIME_API_URL: Option<&str> = option_env!("SARO_API_URL");

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Backend base URL. Empty means "not configured".
    #[serde(default)]
    pub url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Overview dashboard configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    #[serde(default = "default_persona")]
    pub persona: String,
}

fn default_poll_interval() -> u64 {
    30
}

fn default_persona() -> String {
    "enabler".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval(),
            persona: default_persona(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("saro").join("config.toml")),
            Some(PathBuf::from("/etc/saro/config.toml")),
            Some(PathBuf::from("./saro.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Resolve the API base URL: `runtime_override` (e.g. a `--api-url` flag)
    /// wins over the configured `api.url`, which wins over the build-time value.
    pub fn resolve_api_base(&self, runtime_override: Option<&str>) -> ApiBase {
        let runtime = runtime_override
            .filter(|url| !url.trim().is_empty())
            .or(Some(self.api.url.as_str()));
        ApiBase::resolve(runtime, BUILD_TIME_API_URL)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("SARO_API_URL") {
            self.api.url = url;
        }
        if let Ok(timeout) = std::env::var("SARO_REQUEST_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.api.request_timeout_secs = t;
            }
        }

        if let Ok(interval) = std::env::var("SARO_POLL_INTERVAL_SECS") {
            if let Ok(i) = interval.parse() {
                self.dashboard.poll_interval_secs = i;
            }
        }
        if let Ok(persona) = std::env::var("SARO_PERSONA") {
            self.dashboard.persona = persona;
        }

        if let Ok(level) = std::env::var("SARO_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("SARO_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// The resolved backend base URL.
///
/// Set once at startup and read-only afterwards. An empty value means the
/// deployment never configured a backend; requests then fail with
/// [`crate::api::ClientError::ConfigurationMissing`] instead of guessing a host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiBase(String);

impl ApiBase {
    /// Resolve in priority order: runtime-injected value, build-time value,
    /// then unset. Blank candidates are skipped and one trailing `/` is
    /// stripped. Never fails; logs the outcome.
    pub fn resolve(runtime: Option<&str>, build_time: Option<&str>) -> Self {
        let chosen = [runtime, build_time]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|candidate| !candidate.is_empty())
            .unwrap_or_default();

        let base = Self::new(chosen);
        if base.is_configured() {
            tracing::info!(api_base = %base, "Resolved API base URL");
        } else {
            tracing::warn!("API base URL not set; requests will fail until it is configured");
        }
        base
    }

    /// Wrap a URL without consulting any other source.
    pub fn new(url: &str) -> Self {
        let url = url.trim();
        Self(url.strip_suffix('/').unwrap_or(url).to_string())
    }

    /// The unset sentinel.
    pub fn unset() -> Self {
        Self(String::new())
    }

    pub fn is_configured(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Absolute URL for `path`; a missing leading `/` is inserted.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.0, path)
        } else {
            format!("{}/{}", self.0, path)
        }
    }
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# SARO Configuration
#
# Environment variables override these settings:
# - SARO_API_URL
# - SARO_REQUEST_TIMEOUT_SECS
# - SARO_POLL_INTERVAL_SECS
# - SARO_PERSONA
# - SARO_LOG_LEVEL
# - SARO_LOG_FORMAT

[api]
# Backend base URL, e.g. "https://api.saro.example.com".
# Leave empty to force an explicit choice; requests fail until it is set.
url = ""

# Request timeout in seconds
request_timeout_secs = 30

[dashboard]
# How often the overview summary is refreshed (seconds)
poll_interval_secs = 30

# Default persona: forecaster, autopsier, enabler, evangelist
persona = "enabler"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_runtime_value_wins() {
        let base = ApiBase::resolve(
            Some("https://runtime.example.com"),
            Some("https://build.example.com"),
        );
        assert_eq!(base.as_str(), "https://runtime.example.com");
    }

    #[test]
    fn test_build_time_fallback() {
        let base = ApiBase::resolve(Some("  "), Some("https://build.example.com/"));
        assert_eq!(base.as_str(), "https://build.example.com");

        let base = ApiBase::resolve(None, Some("https://build.example.com"));
        assert_eq!(base.as_str(), "https://build.example.com");
    }

    #[test]
    fn test_unset_when_nothing_configured() {
        let base = ApiBase::resolve(None, None);
        assert!(!base.is_configured());
        assert_eq!(base, ApiBase::unset());

        let base = ApiBase::resolve(Some(""), Some(""));
        assert!(!base.is_configured());
    }

    #[test]
    fn test_strips_single_trailing_slash() {
        assert_eq!(ApiBase::new("https://api.example.com/").as_str(), "https://api.example.com");
        assert_eq!(ApiBase::new("https://api.example.com//").as_str(), "https://api.example.com/");
    }

    #[test]
    fn test_url_for_has_no_double_slash() {
        let base = ApiBase::new("https://api.example.com/");
        assert_eq!(base.url_for("/api/v1/health"), "https://api.example.com/api/v1/health");
        assert_eq!(base.url_for("api/v1/health"), "https://api.example.com/api/v1/health");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nurl = \"https://api.example.com\"\n\n[dashboard]\npoll_interval_secs = 10"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.url, "https://api.example.com");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.dashboard.poll_interval_secs, 10);
        assert_eq!(config.dashboard.persona, "enabler");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nurl = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_default_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.url, "");
        assert_eq!(config.dashboard.poll_interval_secs, 30);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_flag_overrides_config_url() {
        let mut config = Config::default();
        config.api.url = "https://configured.example.com".to_string();

        let base = config.resolve_api_base(Some("https://flag.example.com/"));
        assert_eq!(base.as_str(), "https://flag.example.com");

        let base = config.resolve_api_base(None);
        assert_eq!(base.as_str(), "https://configured.example.com");
    }
}

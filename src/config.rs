//! Configuration System
//!
//! Loads CLI configuration from a TOML file with environment variable
//! overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_API_BASE;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Where the login token is kept between CLI runs
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_token_path")]
    pub token_path: String,
}

fn default_token_path() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("artzy").join("token").to_string_lossy().to_string())
        .unwrap_or_else(|| "./.artzy_token".to_string())
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_path: default_token_path(),
        }
    }
}

impl SessionConfig {
    /// Token path with a leading `~/` expanded
    pub fn resolved_token_path(&self) -> PathBuf {
        match (self.token_path.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(&self.token_path),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
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

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("artzy").join("config.toml")),
            Some(PathBuf::from("./artzy.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::debug!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("ARTZY_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(timeout) = std::env::var("ARTZY_REQUEST_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.api.request_timeout_secs = t;
            }
        }
        if let Ok(path) = std::env::var("ARTZY_TOKEN_PATH") {
            self.session.token_path = path;
        }
        if let Ok(level) = std::env::var("ARTZY_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("ARTZY_LOG_FORMAT") {
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

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Artzy CLI Configuration
#
# Environment variables override these settings:
# - ARTZY_API_URL
# - ARTZY_REQUEST_TIMEOUT
# - ARTZY_TOKEN_PATH
# - ARTZY_LOG_LEVEL
# - ARTZY_LOG_FORMAT

[api]
# Gallery backend
base_url = "https://artzybackend.vercel.app"

# Request timeout in seconds
request_timeout_secs = 30

[session]
# File holding the login token
token_path = "~/.local/share/artzy/token"

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty or json
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://artzybackend.vercel.app");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.logging.format, "pretty");
        assert!(config.session.token_path.ends_with("token"));
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_BASE);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"http://localhost:5000\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_token_path_expansion() {
        let session = SessionConfig {
            token_path: "/tmp/artzy/token".to_string(),
        };
        assert_eq!(session.resolved_token_path(), PathBuf::from("/tmp/artzy/token"));

        let session = SessionConfig {
            token_path: "~/artzy/token".to_string(),
        };
        if let Some(home) = dirs::home_dir() {
            assert_eq!(session.resolved_token_path(), home.join("artzy/token"));
        }
    }

    #[test]
    fn test_bad_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nbase_url = 1").unwrap();
        assert!(matches!(Config::load(file.path()), Err(ConfigError::Parse { .. })));

        let missing = Path::new("/definitely/not/here.toml");
        assert!(matches!(Config::load(missing), Err(ConfigError::Io { .. })));
    }
}

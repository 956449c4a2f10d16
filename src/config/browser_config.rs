use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "atlas.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file {path:?}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BrowserConfig {
    /// Base URL of the REST Countries API (without the `/all` endpoint)
    pub api_base_url: String,

    /// Fields requested from the API
    pub fields: Vec<String>,

    /// Number of entries revealed per page of the visible window
    pub page_size: usize,

    /// How far below the viewport the load-more sentinel starts triggering (logical px)
    pub proximity_margin_px: f64,

    pub request_timeout_secs: u64,

    /// Serve the built-in sample countries instead of calling the API
    pub offline: bool,

    pub window_title: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://restcountries.com/v3.1".to_string(),
            fields: ["cca3", "flags", "name", "population", "region", "capital"]
                .into_iter()
                .map(String::from)
                .collect(),
            page_size: 20,
            proximity_margin_px: 300.0,
            request_timeout_secs: 30,
            offline: false,
            window_title: "Where in the world?".to_string(),
        }
    }
}

impl BrowserConfig {
    /// Load from the file named by `ATLAS_CONFIG` (or `atlas.toml`), then
    /// apply environment overrides. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("ATLAS_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            tracing::debug!(?path, "no config file, using defaults");
            Self::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(url) = std::env::var("ATLAS_API_URL") {
            self.api_base_url = url;
        }
        if let Ok(raw) = std::env::var("ATLAS_PAGE_SIZE") {
            self.page_size = raw.parse().map_err(|_| ConfigError::Invalid {
                field: "ATLAS_PAGE_SIZE",
                reason: format!("'{}' is not a positive integer", raw),
            })?;
        }
        if let Ok(raw) = std::env::var("ATLAS_OFFLINE") {
            self.offline = matches!(raw.to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "page_size",
                reason: "must be at least 1".to_string(),
            });
        }
        if !self.proximity_margin_px.is_finite() || self.proximity_margin_px < 0.0 {
            return Err(ConfigError::Invalid {
                field: "proximity_margin_px",
                reason: format!("{} is not a non-negative distance", self.proximity_margin_px),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "request_timeout_secs",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// The `all` endpoint, e.g. `https://restcountries.com/v3.1/all`.
    pub fn all_endpoint(&self) -> String {
        format!("{}/all", self.api_base_url.trim_end_matches('/'))
    }
}

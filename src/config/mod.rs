mod browser_config;

pub use browser_config::{BrowserConfig, ConfigError, DEFAULT_CONFIG_FILE};

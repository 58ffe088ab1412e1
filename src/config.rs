//! Configuration management for the circdesk shell
//!
//! The desk core takes no configuration; everything here is presentation
//! concern. Every key has a default, so the binary runs with no config file
//! and no environment at all.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    /// Symbol prefixed to rendered fine amounts.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Banner printed above the main menu.
    #[serde(default = "default_banner")]
    pub banner: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            banner: default_banner(),
        }
    }
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_banner() -> String {
    "Library Management System".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix CIRCDESK_)
            .add_source(
                Environment::with_prefix("CIRCDESK")
                    .separator("_")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

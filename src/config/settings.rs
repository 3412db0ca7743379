//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};
use crate::models::PricePolicy;

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
}

/// Events API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Absent means requests wait for the transport to give up
    pub timeout_seconds: Option<u64>,
    pub user_agent: String,
    /// Ask the server for date-ordered listings (`?sortBy=date`)
    pub sort_by_date: bool,
}

/// Presentation configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiConfig {
    pub placeholder_image_url: String,
    pub currency_symbol: String,
    pub notification_ttl_seconds: u64,
    pub confirm_deletes: bool,
}

/// Form validation configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub price_policy: PricePolicy,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_file("config")
    }

    /// Load settings from a specific file (extension optional) layered under
    /// `EVENT_BOARD__*` environment variables
    pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("EVENT_BOARD").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::EventBoardError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            ui: UiConfig::default(),
            validation: ValidationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_seconds: None,
            user_agent: format!("EventBoard/{}", env!("CARGO_PKG_VERSION")),
            sort_by_date: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            placeholder_image_url: "https://via.placeholder.com/300x200".to_string(),
            currency_symbol: "$".to_string(),
            notification_ttl_seconds: 5,
            confirm_deletes: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
        }
    }
}

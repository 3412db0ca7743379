//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{EventBoardError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_ui_config(&settings.ui)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate events API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(EventBoardError::Config(
            "API base URL is required".to_string()
        ));
    }

    let parsed = url::Url::parse(&config.base_url)?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(EventBoardError::Config(
            format!("API base URL must use http or https, got {}", parsed.scheme())
        ));
    }

    if config.timeout_seconds == Some(0) {
        return Err(EventBoardError::Config(
            "API timeout must be greater than 0 when set".to_string()
        ));
    }

    Ok(())
}

/// Validate presentation configuration
fn validate_ui_config(config: &super::UiConfig) -> Result<()> {
    if config.placeholder_image_url.is_empty() {
        return Err(EventBoardError::Config(
            "Placeholder image URL is required".to_string()
        ));
    }

    if config.notification_ttl_seconds == 0 {
        return Err(EventBoardError::Config(
            "Notification TTL must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(EventBoardError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(EventBoardError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let mut settings = Settings::default();
        settings.api.base_url = "not a url".to_string();
        assert_matches!(validate_settings(&settings), Err(EventBoardError::UrlParse(_)));

        settings.api.base_url = "ftp://events.local".to_string();
        assert_matches!(validate_settings(&settings), Err(EventBoardError::Config(_)));

        settings.api.base_url = String::new();
        assert_matches!(validate_settings(&settings), Err(EventBoardError::Config(_)));
    }

    #[test]
    fn test_rejects_zero_durations() {
        let mut settings = Settings::default();
        settings.api.timeout_seconds = Some(0);
        assert_matches!(validate_settings(&settings), Err(EventBoardError::Config(_)));

        let mut settings = Settings::default();
        settings.ui.notification_ttl_seconds = 0;
        assert_matches!(validate_settings(&settings), Err(EventBoardError::Config(_)));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert_matches!(validate_settings(&settings), Err(EventBoardError::Config(msg)) if msg.contains("verbose"));
    }
}

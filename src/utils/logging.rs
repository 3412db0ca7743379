//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the EventBoard client. Diagnostics go to stderr so they never interleave
//! with the rendered event cards on stdout.

use tracing::{debug, error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{EventBoardError, Operation, Result};

/// Initialize logging based on configuration
///
/// The returned guard must be held for the lifetime of the program when a
/// log file is configured, otherwise buffered lines are dropped.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| EventBoardError::Config(format!("Invalid log filter: {}", e)))?;

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let guard = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "event_board.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
                .try_init()
                .map_err(|e| EventBoardError::Config(format!("Logging already initialized: {}", e)))?;

            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .try_init()
                .map_err(|e| EventBoardError::Config(format!("Logging already initialized: {}", e)))?;

            None
        }
    };

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an outgoing API request
pub fn log_api_request(method: &str, url: &str) {
    debug!(method = method, url = url, "Sending API request");
}

/// Log an API failure with the attempted operation
pub fn log_api_error(operation: Operation, error: &EventBoardError) {
    error!(
        operation = %operation,
        error = %error,
        "API error occurred"
    );
}

/// Log completed event actions
pub fn log_event_action(event_id: Option<i64>, operation: Operation, details: Option<&str>) {
    info!(
        event_id = event_id,
        action = %operation,
        details = details,
        "Event action performed"
    );
}

//! Error handling for EventBoard
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for EventBoard
#[derive(Error, Debug)]
pub enum EventBoardError {
    #[error("{}: {source}", .operation.failure_message())]
    OperationFailed {
        operation: Operation,
        #[source]
        source: ApiError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Failures talking to the events API.
///
/// All three kinds surface identically to the user; the variant only
/// matters for the operator log.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Operations the controller reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Add,
    Update,
    Delete,
    Fetch,
}

impl Operation {
    /// User-facing text shown when the operation fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Load => "Error loading events",
            Operation::Add => "Error adding event",
            Operation::Update => "Error updating event",
            Operation::Delete => "Error deleting event",
            Operation::Fetch => "Error fetching event",
        }
    }

    /// User-facing text shown when a mutation succeeds
    pub fn success_message(&self) -> Option<&'static str> {
        match self {
            Operation::Add => Some("Event added successfully!"),
            Operation::Update => Some("Event updated successfully!"),
            Operation::Delete => Some("Event deleted successfully!"),
            Operation::Load | Operation::Fetch => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Load => "load",
            Operation::Add => "add",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::Fetch => "fetch",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result type alias for EventBoard operations
pub type Result<T> = std::result::Result<T, EventBoardError>;

/// Result type alias for raw API calls
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl EventBoardError {
    /// Wrap an API failure with the operation that was attempted
    pub fn operation(operation: Operation, source: ApiError) -> Self {
        EventBoardError::OperationFailed { operation, source }
    }

    /// Check if the error is recoverable by re-triggering the action
    pub fn is_recoverable(&self) -> bool {
        match self {
            EventBoardError::OperationFailed { .. } => true,
            EventBoardError::Http(_) => true,
            EventBoardError::Io(_) => true,
            EventBoardError::InvalidInput(_) => true,
            EventBoardError::EventNotFound { .. } => true,
            EventBoardError::Config(_) => false,
            EventBoardError::UrlParse(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EventBoardError::Config(_) => ErrorSeverity::Critical,
            EventBoardError::UrlParse(_) => ErrorSeverity::Critical,
            EventBoardError::InvalidInput(_) => ErrorSeverity::Info,
            EventBoardError::EventNotFound { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

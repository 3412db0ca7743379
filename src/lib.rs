//! EventBoard
//!
//! A client for the event booking REST API. It mirrors the server's event
//! collection in memory, renders it as cards, filters it locally, and sends
//! create, update and delete requests, reloading the whole list after every
//! successful write.

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod view;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{EventBoardError, Result};

// Re-export main components for easy access
pub use services::{EventApi, EventListController, HttpEventApi, NotificationCenter};
pub use view::{Confirm, EventView};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}

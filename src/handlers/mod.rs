//! Terminal handlers module
//!
//! This module maps lines typed at the terminal to controller operations.

pub mod commands;

// Re-export commonly used handler functions
pub use commands::{handle_command, Command, Flow};

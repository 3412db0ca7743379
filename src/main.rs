//! EventBoard terminal client
//!
//! Main application entry point

use std::sync::Arc;
use anyhow::Context;
use tracing::{error, info, warn};

use event_board::{
    config::Settings,
    handlers::{handle_command, Command, Flow},
    services::build_controller,
    utils::logging,
    view::{TerminalConfirm, TerminalInput, TerminalView},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate().context("invalid configuration")?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!(version = event_board::VERSION, api = %settings.api.base_url, "Starting {}", event_board::info());

    // The controller is built once here and handed to the input loop by reference
    let input = TerminalInput::new();
    let view = Arc::new(TerminalView::new());
    let confirm = Arc::new(TerminalConfirm::new(input.clone()));
    let controller = build_controller(&settings, view.clone(), confirm)?;

    controller.start().await;
    println!("Type 'help' for a list of commands.");

    loop {
        let line = match input.read_line("> ").await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!(error = %e, "Failed to read input");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let cmd = match line.parse::<Command>() {
            Ok(cmd) => cmd,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match handle_command(cmd, &controller, &view, &input).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) if e.is_recoverable() => {
                warn!(error = %e, severity = %e.severity(), "Command failed")
            }
            Err(e) => {
                error!(error = %e, severity = %e.severity(), "Unrecoverable error, shutting down");
                return Err(e.into());
            }
        }
    }

    info!("EventBoard has been shut down.");
    Ok(())
}

//! Command handlers module
//!
//! This module parses terminal input lines into commands and dispatches
//! them to the event list controller.

pub mod events;
pub mod help;

use std::str::FromStr;
use crate::services::EventListController;
use crate::utils::errors::{EventBoardError, Result};
use crate::view::{TerminalInput, TerminalView};

/// All available terminal commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    Reload,
    Search(String),
    Add,
    Edit(i64),
    Cancel,
    Delete(i64),
    Show(i64),
    Notifications,
    Dismiss(usize),
    Quit,
}

/// Whether the input loop keeps running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl FromStr for Command {
    type Err = EventBoardError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "help" | "?" => Ok(Command::Help),
            "list" | "ls" => Ok(Command::List),
            "reload" => Ok(Command::Reload),
            "search" | "find" => Ok(Command::Search(rest.to_string())),
            "add" | "new" => Ok(Command::Add),
            "edit" => parse_id(rest).map(Command::Edit),
            "cancel" => Ok(Command::Cancel),
            "delete" | "rm" => parse_id(rest).map(Command::Delete),
            "show" => parse_id(rest).map(Command::Show),
            "notifications" => Ok(Command::Notifications),
            "dismiss" => parse_position(rest).map(Command::Dismiss),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "" => Err(EventBoardError::InvalidInput("Empty command".to_string())),
            other => Err(EventBoardError::InvalidInput(format!(
                "Unknown command: {}. Type 'help' for a list of commands",
                other
            ))),
        }
    }
}

fn parse_id(raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|_| EventBoardError::InvalidInput(format!("Expected an event id, got '{}'", raw)))
}

/// 1-based position in the `notifications` listing
fn parse_position(raw: &str) -> Result<usize> {
    match raw.parse::<usize>() {
        Ok(position) if position > 0 => Ok(position),
        _ => Err(EventBoardError::InvalidInput(format!(
            "Expected a notification number, got '{}'",
            raw
        ))),
    }
}

/// Main command dispatcher
pub async fn handle_command(
    cmd: Command,
    controller: &EventListController,
    view: &TerminalView,
    input: &TerminalInput,
) -> Result<Flow> {
    match cmd {
        Command::Help => help::handle_help(),
        Command::List => controller.render().await,
        Command::Reload => events::handle_reload(controller).await,
        Command::Search(term) => events::handle_search(controller, &term).await,
        Command::Add => events::handle_add(controller, view, input).await?,
        Command::Edit(id) => events::handle_edit(controller, view, input, id).await?,
        Command::Cancel => controller.cancel_edit(),
        Command::Delete(id) => {
            controller.delete_event(id).await;
        }
        Command::Show(id) => {
            controller.show_event(id).await;
        }
        Command::Notifications => events::handle_notifications(controller),
        Command::Dismiss(position) => events::handle_dismiss(controller, position),
        Command::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

//! View layer
//!
//! The controller never touches a concrete display. It talks to an
//! [`EventView`] for output and a [`Confirm`] prompt for destructive actions;
//! both are injected at construction time.

pub mod cards;
pub mod terminal;

pub use cards::{build_cards, CardAction, CardOptions, EventCard};
pub use terminal::{TerminalConfirm, TerminalInput, TerminalView};

use async_trait::async_trait;
use uuid::Uuid;
use crate::models::EventForm;
use crate::services::notification::Notification;

/// What a submitted form will do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// Output surface driven by the controller
pub trait EventView: Send + Sync {
    /// Replace everything previously rendered with these cards
    fn render(&self, cards: &[EventCard]);

    /// Show a single record, e.g. after a fresh fetch
    fn show_event(&self, card: &EventCard);

    fn show_notification(&self, notification: &Notification);

    /// Take down a notification that expired or was dismissed
    fn dismiss_notification(&self, id: Uuid);

    /// Pre-fill the entry form
    fn fill_form(&self, form: &EventForm, mode: FormMode);

    /// Clear the entry form back to an empty create form
    fn reset_form(&self);
}

/// Interactive yes/no gate
#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

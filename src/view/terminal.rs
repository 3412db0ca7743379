//! Terminal implementations of the view seams

use std::io::Write;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::warn;
use uuid::Uuid;
use crate::models::EventForm;
use crate::services::notification::{Notification, NotificationKind};
use crate::utils::helpers::truncate_text;
use super::{CardAction, Confirm, EventCard, EventView, FormMode};

const DESCRIPTION_PREVIEW_CHARS: usize = 120;

/// Shared line reader over stdin
///
/// Commands and prompts read from the same stream; callers take turns.
#[derive(Clone)]
pub struct TerminalInput {
    lines: Arc<tokio::sync::Mutex<Lines<BufReader<Stdin>>>>,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            lines: Arc::new(tokio::sync::Mutex::new(BufReader::new(tokio::io::stdin()).lines())),
        }
    }

    /// Print `prompt` and read one line. `None` on end of input.
    pub async fn read_line(&self, prompt: &str) -> std::io::Result<Option<String>> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut lines = self.lines.lock().await;
        lines.next_line().await
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

/// `y`/`N` prompt on the terminal
#[derive(Clone)]
pub struct TerminalConfirm {
    input: TerminalInput,
}

impl TerminalConfirm {
    pub fn new(input: TerminalInput) -> Self {
        Self { input }
    }
}

#[async_trait]
impl Confirm for TerminalConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        match self.input.read_line(&format!("{} [y/N] ", prompt)).await {
            Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "Failed to read confirmation");
                false
            }
        }
    }
}

/// Plain-text card renderer writing to stdout
///
/// Also holds the current entry form so a failed submission can be
/// corrected instead of retyped.
#[derive(Default)]
pub struct TerminalView {
    form: Mutex<(EventForm, Option<i64>)>,
    visible: Mutex<Vec<Notification>>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications still on screen, newest first
    pub fn visible_notifications(&self) -> Vec<Notification> {
        self.visible.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }

    /// Current form contents and the id being edited, if any
    pub fn form(&self) -> (EventForm, FormMode) {
        let guard = self.form.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mode = guard.1.map(FormMode::Edit).unwrap_or(FormMode::Create);
        (guard.0.clone(), mode)
    }

    /// Remember what the user typed before it is submitted
    pub fn store_form(&self, form: &EventForm) {
        let mut guard = self.form.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.0 = form.clone();
    }

    fn format_card(card: &EventCard) -> String {
        let actions: Vec<String> = card
            .actions
            .iter()
            .map(|action| match action {
                CardAction::Edit(id) => format!("edit {}", id),
                CardAction::Delete(id) => format!("delete {}", id),
            })
            .collect();

        format!(
            "┌ {}\n│ @ {}\n│ {}\n│ {}\n│ {}\n│ image: {}\n└ [{}]",
            card.name,
            card.venue,
            card.starts_at,
            truncate_text(&card.description, DESCRIPTION_PREVIEW_CHARS),
            card.price,
            card.image_url,
            actions.join("] ["),
        )
    }
}

impl EventView for TerminalView {
    fn render(&self, cards: &[EventCard]) {
        let mut out = String::from("\n==================== Events ====================\n");
        if cards.is_empty() {
            out.push_str("(no events)\n");
        }
        for card in cards {
            out.push_str(&Self::format_card(card));
            out.push('\n');
        }
        print!("{}", out);
    }

    fn show_event(&self, card: &EventCard) {
        println!("{}", Self::format_card(card));
    }

    fn show_notification(&self, notification: &Notification) {
        let marker = match notification.kind {
            NotificationKind::Success => "✔",
            NotificationKind::Danger => "✖",
        };
        println!("{} {}", marker, notification.message);
        self.visible
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(0, notification.clone());
    }

    fn dismiss_notification(&self, id: Uuid) {
        self.visible
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .retain(|shown| shown.id != id);
    }

    fn fill_form(&self, form: &EventForm, mode: FormMode) {
        let mut guard = self.form.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.0 = form.clone();
        guard.1 = match mode {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        };
    }

    fn reset_form(&self) {
        let mut guard = self.form.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = (EventForm::default(), None);
    }
}

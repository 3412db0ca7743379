//! Test doubles for the view seams
//!
//! `RecordingView` keeps everything the controller asked it to display and
//! `ScriptedConfirm` answers confirmation prompts with a fixed value.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use async_trait::async_trait;
use uuid::Uuid;
use event_board::models::EventForm;
use event_board::services::{Notification, NotificationKind};
use event_board::view::{Confirm, EventCard, EventView, FormMode};

#[derive(Debug, Default)]
pub struct ViewLog {
    pub renders: Vec<Vec<EventCard>>,
    pub shown: Vec<EventCard>,
    pub notifications: Vec<(String, NotificationKind)>,
    pub on_screen: Vec<Notification>,
    pub dismissed: Vec<Uuid>,
    pub filled: Vec<(EventForm, FormMode)>,
    pub form_resets: usize,
}

#[derive(Debug, Default)]
pub struct RecordingView {
    log: Mutex<ViewLog>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log<T>(&self, f: impl FnOnce(&ViewLog) -> T) -> T {
        f(&self.log.lock().unwrap())
    }

    pub fn render_count(&self) -> usize {
        self.with_log(|log| log.renders.len())
    }

    pub fn last_render(&self) -> Vec<EventCard> {
        self.with_log(|log| log.renders.last().cloned().unwrap_or_default())
    }

    pub fn notifications(&self) -> Vec<(String, NotificationKind)> {
        self.with_log(|log| log.notifications.clone())
    }

    /// Messages shown and not yet taken down, newest first
    pub fn on_screen(&self) -> Vec<String> {
        self.with_log(|log| log.on_screen.iter().map(|n| n.message.clone()).collect())
    }

    pub fn dismissed(&self) -> Vec<Uuid> {
        self.with_log(|log| log.dismissed.clone())
    }

    pub fn form_resets(&self) -> usize {
        self.with_log(|log| log.form_resets)
    }
}

impl EventView for RecordingView {
    fn render(&self, cards: &[EventCard]) {
        self.log.lock().unwrap().renders.push(cards.to_vec());
    }

    fn show_event(&self, card: &EventCard) {
        self.log.lock().unwrap().shown.push(card.clone());
    }

    fn show_notification(&self, notification: &Notification) {
        let mut log = self.log.lock().unwrap();
        log.notifications
            .push((notification.message.clone(), notification.kind));
        log.on_screen.insert(0, notification.clone());
    }

    fn dismiss_notification(&self, id: Uuid) {
        let mut log = self.log.lock().unwrap();
        log.on_screen.retain(|shown| shown.id != id);
        log.dismissed.push(id);
    }

    fn fill_form(&self, form: &EventForm, mode: FormMode) {
        self.log.lock().unwrap().filled.push((form.clone(), mode));
    }

    fn reset_form(&self) {
        self.log.lock().unwrap().form_resets += 1;
    }
}

/// Confirmation prompt with a fixed answer
#[derive(Debug)]
pub struct ScriptedConfirm {
    answer: bool,
    asked: AtomicUsize,
}

impl ScriptedConfirm {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: AtomicUsize::new(0),
        }
    }

    pub fn times_asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Confirm for ScriptedConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

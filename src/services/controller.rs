//! Event list controller
//!
//! Owns the in-memory mirror of the server's event collection and turns user
//! actions into API calls. Every successful write is followed by a full
//! reload: the local list is never patched, only replaced by what the server
//! returns. Overlapping operations are not serialized, so when two reloads
//! race the one that completes last is what stays on screen.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;
use crate::config::Settings;
use crate::models::{Event, EventForm, PricePolicy};
use crate::services::api::EventApi;
use crate::services::notification::{NotificationCenter, NotificationKind};
use crate::services::search;
use crate::utils::errors::{ApiError, EventBoardError, Operation, Result};
use crate::utils::logging::{log_api_error, log_event_action};
use crate::view::{build_cards, CardOptions, Confirm, EventCard, EventView, FormMode};

const DELETE_PROMPT: &str = "Are you sure you want to delete this event?";

/// What happened to a user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    /// The API call failed; the user was notified
    Failed,
    /// The user declined the confirmation prompt
    Cancelled,
    /// The form did not pass the configured validation policy
    Rejected(String),
}

impl ActionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ActionOutcome::Completed)
    }
}

/// Controller behavior switches, usually taken from [`Settings`]
#[derive(Debug, Clone)]
pub struct ControllerOptions {
    pub cards: CardOptions,
    pub price_policy: PricePolicy,
    pub confirm_deletes: bool,
    pub notification_ttl: Duration,
}

impl From<&Settings> for ControllerOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            cards: CardOptions::from(&settings.ui),
            price_policy: settings.validation.price_policy,
            confirm_deletes: settings.ui.confirm_deletes,
            notification_ttl: Duration::from_secs(settings.ui.notification_ttl_seconds),
        }
    }
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

pub struct EventListController {
    api: Arc<dyn EventApi>,
    view: Arc<dyn EventView>,
    confirm: Arc<dyn Confirm>,
    notifications: NotificationCenter,
    options: ControllerOptions,
    events: RwLock<Vec<Event>>,
    editing: Mutex<Option<i64>>,
}

impl EventListController {
    pub fn new(
        api: Arc<dyn EventApi>,
        view: Arc<dyn EventView>,
        confirm: Arc<dyn Confirm>,
        options: ControllerOptions,
    ) -> Self {
        let notifications = NotificationCenter::new(options.notification_ttl, view.clone());

        Self {
            api,
            view,
            confirm,
            notifications,
            options,
            events: RwLock::new(Vec::new()),
            editing: Mutex::new(None),
        }
    }

    /// Initial load followed by the first render
    pub async fn start(&self) -> ActionOutcome {
        let outcome = self.load_events().await;
        self.render().await;
        outcome
    }

    /// Replace the local list with the server's collection.
    ///
    /// On failure the previous list is left untouched.
    pub async fn load_events(&self) -> ActionOutcome {
        match self.api.list_events().await {
            Ok(events) => {
                debug!(count = events.len(), "Replacing event list");
                *self.events.write().await = events;
                ActionOutcome::Completed
            }
            Err(e) => self.report_failure(Operation::Load, e),
        }
    }

    /// Create an event from the submitted form
    ///
    /// The form is only reset on success.
    pub async fn add_event(&self, form: &EventForm) -> ActionOutcome {
        let draft = match form.to_draft(self.options.price_policy) {
            Ok(draft) => draft,
            Err(e) => return self.reject(e),
        };

        match self.api.create_event(&draft).await {
            Ok(()) => {
                log_event_action(None, Operation::Add, Some(&draft.name));
                self.after_write(Operation::Add, true).await;
                ActionOutcome::Completed
            }
            Err(e) => self.report_failure(Operation::Add, e),
        }
    }

    /// Replace the event `id` with the submitted form contents
    pub async fn update_event(&self, id: i64, form: &EventForm) -> ActionOutcome {
        let draft = match form.to_draft(self.options.price_policy) {
            Ok(draft) => draft,
            Err(e) => return self.reject(e),
        };

        match self.api.update_event(id, &draft).await {
            Ok(()) => {
                log_event_action(Some(id), Operation::Update, Some(&draft.name));
                self.after_write(Operation::Update, true).await;
                ActionOutcome::Completed
            }
            Err(e) => self.report_failure(Operation::Update, e),
        }
    }

    /// Delete the event `id` after the user confirms
    ///
    /// The form is left alone unless it was editing the deleted record.
    pub async fn delete_event(&self, id: i64) -> ActionOutcome {
        if self.options.confirm_deletes && !self.confirm.confirm(DELETE_PROMPT).await {
            debug!(event_id = id, "Delete cancelled by user");
            return ActionOutcome::Cancelled;
        }

        match self.api.delete_event(id).await {
            Ok(()) => {
                log_event_action(Some(id), Operation::Delete, None);
                self.abandon_edit_of(id);
                self.after_write(Operation::Delete, false).await;
                ActionOutcome::Completed
            }
            Err(e) => self.report_failure(Operation::Delete, e),
        }
    }

    /// Render the subset of loaded events matching `term` without touching
    /// the stored list or the server
    pub async fn filter_by_search(&self, term: &str) -> Vec<Event> {
        let filtered = {
            let events = self.events.read().await;
            search::filter_by_search(&events, term)
        };
        self.render_list(&filtered);
        filtered
    }

    /// Render the full stored list
    pub async fn render(&self) {
        let events = self.events.read().await;
        self.render_list(&events);
    }

    /// Render an arbitrary list, replacing previous output
    pub fn render_list(&self, events: &[Event]) {
        let cards = build_cards(events, &self.options.cards);
        self.view.render(&cards);
    }

    /// Fetch one event fresh from the server and show it
    pub async fn show_event(&self, id: i64) -> ActionOutcome {
        match self.api.fetch_event(id).await {
            Ok(event) => {
                self.view.show_event(&EventCard::from_event(&event, &self.options.cards));
                ActionOutcome::Completed
            }
            Err(e) => self.report_failure(Operation::Fetch, e),
        }
    }

    /// Open the form pre-filled with the stored record `id`
    ///
    /// Subsequent [`submit_form`](Self::submit_form) calls update this
    /// record until the edit completes or is cancelled.
    pub async fn begin_edit(&self, id: i64) -> Result<EventForm> {
        let form = {
            let events = self.events.read().await;
            events
                .iter()
                .find(|event| event.id == Some(id))
                .map(EventForm::from)
                .ok_or(EventBoardError::EventNotFound { event_id: id })?
        };

        *self.lock_editing() = Some(id);
        self.view.fill_form(&form, FormMode::Edit(id));
        debug!(event_id = id, "Editing event");
        Ok(form)
    }

    /// Drop any edit in progress and clear the form
    pub fn cancel_edit(&self) {
        self.reset_form();
    }

    /// Submit the form as an update while editing, otherwise as a create
    pub async fn submit_form(&self, form: &EventForm) -> ActionOutcome {
        let editing = *self.lock_editing();
        match editing {
            Some(id) => self.update_event(id, form).await,
            None => self.add_event(form).await,
        }
    }

    /// Show a transient message on top of any others
    pub fn notify(&self, message: &str, kind: NotificationKind) {
        self.notifications.notify(message, kind);
    }

    /// Remove a notification before it expires
    pub fn dismiss_notification(&self, id: Uuid) -> bool {
        self.notifications.dismiss(id)
    }

    /// Snapshot of the stored list
    pub async fn events(&self) -> Vec<Event> {
        self.events.read().await.clone()
    }

    pub fn editing(&self) -> Option<i64> {
        *self.lock_editing()
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    async fn after_write(&self, operation: Operation, reset_form: bool) {
        self.load_events().await;
        self.render().await;
        if reset_form {
            self.reset_form();
        }
        if let Some(message) = operation.success_message() {
            self.notify(message, NotificationKind::Success);
        }
        info!(action = %operation, "Event list refreshed after write");
    }

    fn report_failure(&self, operation: Operation, source: ApiError) -> ActionOutcome {
        let error = EventBoardError::operation(operation, source);
        log_api_error(operation, &error);
        self.notify(operation.failure_message(), NotificationKind::Danger);
        ActionOutcome::Failed
    }

    fn reject(&self, error: EventBoardError) -> ActionOutcome {
        let message = match error {
            EventBoardError::InvalidInput(message) => message,
            other => other.to_string(),
        };
        debug!(reason = %message, "Form rejected");
        self.notify(&message, NotificationKind::Danger);
        ActionOutcome::Rejected(message)
    }

    /// The edit state and the view's form are always cleared together
    fn reset_form(&self) {
        *self.lock_editing() = None;
        self.view.reset_form();
    }

    fn abandon_edit_of(&self, id: i64) {
        let editing = *self.lock_editing();
        if editing == Some(id) {
            debug!(event_id = id, "Edited event was deleted");
            self.reset_form();
        }
    }

    fn lock_editing(&self) -> std::sync::MutexGuard<'_, Option<i64>> {
        self.editing.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

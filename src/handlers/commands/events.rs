//! Event command handlers

use tracing::debug;
use crate::models::EventForm;
use crate::services::EventListController;
use crate::utils::errors::Result;
use crate::view::{FormMode, TerminalInput, TerminalView};

/// Marker that empties a field while filling a form
const CLEAR_FIELD: &str = "-";

/// Handle `reload`
pub async fn handle_reload(controller: &EventListController) {
    controller.load_events().await;
    controller.render().await;
}

/// Handle `search <term>`
pub async fn handle_search(controller: &EventListController, term: &str) {
    let matches = controller.filter_by_search(term).await;
    debug!(term = term, matches = matches.len(), "Search applied");
}

/// Handle `add`: fill the create form and submit it
pub async fn handle_add(
    controller: &EventListController,
    view: &TerminalView,
    input: &TerminalInput,
) -> Result<()> {
    if controller.editing().is_some() {
        controller.cancel_edit();
    }

    // A previously failed create keeps its contents
    let (current, _) = view.form();
    submit(controller, view, input, current).await
}

/// Handle `edit <id>`: fill the form from the record and submit an update
pub async fn handle_edit(
    controller: &EventListController,
    view: &TerminalView,
    input: &TerminalInput,
    id: i64,
) -> Result<()> {
    let current = match view.form() {
        (form, FormMode::Edit(editing)) if editing == id && controller.editing() == Some(id) => form,
        _ => match controller.begin_edit(id).await {
            Ok(form) => form,
            Err(e) => {
                println!("{}", e);
                return Ok(());
            }
        },
    };

    submit(controller, view, input, current).await
}

/// Handle `notifications`
pub fn handle_notifications(controller: &EventListController) {
    let active = controller.notifications().active();
    if active.is_empty() {
        println!("No notifications");
        return;
    }
    for (position, notification) in active.iter().enumerate() {
        println!("{}. [{}] {}", position + 1, notification.kind.as_str(), notification.message);
    }
}

/// Handle `dismiss <n>`, numbered as in `notifications`
pub fn handle_dismiss(controller: &EventListController, position: usize) {
    let active = controller.notifications().active();
    match position.checked_sub(1).and_then(|index| active.get(index)) {
        Some(notification) => {
            controller.dismiss_notification(notification.id);
        }
        None => println!("No notification number {}", position),
    }
}

async fn submit(
    controller: &EventListController,
    view: &TerminalView,
    input: &TerminalInput,
    current: EventForm,
) -> Result<()> {
    let Some(form) = prompt_form(input, current).await? else {
        return Ok(());
    };

    view.store_form(&form);
    controller.submit_form(&form).await;
    Ok(())
}

/// Ask for every field, showing the current value as the default.
///
/// Returns `None` if input ends before the form is complete.
pub async fn prompt_form(input: &TerminalInput, current: EventForm) -> Result<Option<EventForm>> {
    let mut form = current;

    let fields: [(&str, &mut String); 7] = [
        ("Name", &mut form.name),
        ("Description", &mut form.description),
        ("Start (YYYY-MM-DDTHH:MM)", &mut form.start_date_time),
        ("End (YYYY-MM-DDTHH:MM)", &mut form.end_date_time),
        ("Venue", &mut form.venue),
        ("Price", &mut form.price),
        ("Image URL (optional)", &mut form.image_url),
    ];

    for (label, value) in fields {
        let prompt = if value.is_empty() {
            format!("{}: ", label)
        } else {
            format!("{} [{}]: ", label, value)
        };

        let Some(line) = input.read_line(&prompt).await? else {
            return Ok(None);
        };

        apply_answer(value, &line);
    }

    Ok(Some(form))
}

fn apply_answer(value: &mut String, answer: &str) {
    match answer.trim() {
        "" => {}
        CLEAR_FIELD => value.clear(),
        typed => *value = typed.to_string(),
    }
}

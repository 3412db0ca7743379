//! Client-side search over the loaded events

use crate::models::Event;

/// Events whose name, description or venue contains `term`, ignoring case.
///
/// Order is preserved and an empty term keeps everything.
pub fn filter_by_search(events: &[Event], term: &str) -> Vec<Event> {
    let term = term.to_lowercase();
    events
        .iter()
        .filter(|event| event.matches_lowercase(&term))
        .cloned()
        .collect()
}

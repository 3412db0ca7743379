//! Projection of event records into display cards

use crate::config::UiConfig;
use crate::models::Event;
use crate::utils::helpers::{format_local_datetime, format_price};

/// Action control shown on a card, keyed by record id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Edit(i64),
    Delete(i64),
}

/// Display-ready view of one event
#[derive(Debug, Clone, PartialEq)]
pub struct EventCard {
    pub id: Option<i64>,
    pub image_url: String,
    pub name: String,
    pub venue: String,
    pub starts_at: String,
    pub description: String,
    pub price: String,
    pub actions: Vec<CardAction>,
}

/// Settings the projection depends on
#[derive(Debug, Clone)]
pub struct CardOptions {
    pub placeholder_image_url: String,
    pub currency_symbol: String,
}

impl From<&UiConfig> for CardOptions {
    fn from(config: &UiConfig) -> Self {
        Self {
            placeholder_image_url: config.placeholder_image_url.clone(),
            currency_symbol: config.currency_symbol.clone(),
        }
    }
}

impl EventCard {
    pub fn from_event(event: &Event, options: &CardOptions) -> Self {
        let image_url = event
            .image()
            .unwrap_or(options.placeholder_image_url.as_str())
            .to_string();

        let actions = event
            .id
            .map(|id| vec![CardAction::Edit(id), CardAction::Delete(id)])
            .unwrap_or_default();

        Self {
            id: event.id,
            image_url,
            name: event.name.clone(),
            venue: event.venue.clone(),
            starts_at: format_local_datetime(&event.start_date_time),
            description: event.description.clone(),
            price: format_price(event.price, &options.currency_symbol),
            actions,
        }
    }
}

/// Map events to cards in the given order
pub fn build_cards(events: &[Event], options: &CardOptions) -> Vec<EventCard> {
    events
        .iter()
        .map(|event| EventCard::from_event(event, options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> CardOptions {
        CardOptions::from(&UiConfig::default())
    }

    fn event(id: i64, image_url: Option<&str>) -> Event {
        Event {
            id: Some(id),
            name: format!("Event {}", id),
            description: "Something happening".to_string(),
            start_date_time: "2024-06-01T20:00:00".to_string(),
            end_date_time: "2024-06-01T23:00:00".to_string(),
            venue: "Hall A".to_string(),
            price: Some(25.5),
            image_url: image_url.map(str::to_string),
        }
    }

    #[test]
    fn test_placeholder_when_image_missing_or_empty() {
        let cards = build_cards(&[event(1, None), event(2, Some(""))], &options());
        assert_eq!(cards[0].image_url, "https://via.placeholder.com/300x200");
        assert_eq!(cards[1].image_url, "https://via.placeholder.com/300x200");
    }

    #[test]
    fn test_image_kept_verbatim_when_set() {
        let card = EventCard::from_event(&event(3, Some("https://cdn.example/x.jpg?s=1")), &options());
        assert_eq!(card.image_url, "https://cdn.example/x.jpg?s=1");
    }

    #[test]
    fn test_card_fields() {
        let card = EventCard::from_event(&event(4, None), &options());
        assert_eq!(card.name, "Event 4");
        assert_eq!(card.venue, "Hall A");
        assert_eq!(card.starts_at, "6/1/2024, 8:00:00 PM");
        assert_eq!(card.price, "$25.5");
        assert_eq!(card.actions, vec![CardAction::Edit(4), CardAction::Delete(4)]);
    }

    #[test]
    fn test_unsaved_event_has_no_actions() {
        let mut unsaved = event(5, None);
        unsaved.id = None;
        assert!(EventCard::from_event(&unsaved, &options()).actions.is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let cards = build_cards(&[event(9, None), event(1, None), event(5, None)], &options());
        let ids: Vec<_> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![Some(9), Some(1), Some(5)]);
    }
}

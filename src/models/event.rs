//! Event model

use serde::{Deserialize, Serialize};
use crate::utils::errors::{EventBoardError, Result};
use crate::utils::helpers::parse_lenient_number;

/// An event as returned by `GET /api/events`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Assigned by the server; absent until first persisted
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub start_date_time: String,
    pub end_date_time: String,
    pub venue: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Body sent with `POST /api/events` and `PUT /api/events/{id}`
///
/// A NaN price serializes as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub name: String,
    pub description: String,
    pub start_date_time: String,
    pub end_date_time: String,
    pub venue: String,
    pub price: f64,
    pub image_url: Option<String>,
}

/// Raw form contents, exactly as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub name: String,
    pub description: String,
    pub start_date_time: String,
    pub end_date_time: String,
    pub venue: String,
    pub price: String,
    pub image_url: String,
}

/// How strictly the price field is checked before submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricePolicy {
    /// Send whatever the lenient parse produced, NaN included
    #[default]
    Passthrough,
    RejectNonNumeric,
    RejectNegativeOrNonNumeric,
}

impl PricePolicy {
    /// Check a parsed price against the policy
    pub fn check(&self, price: f64) -> Result<()> {
        match self {
            PricePolicy::Passthrough => Ok(()),
            PricePolicy::RejectNonNumeric if !price.is_finite() => Err(EventBoardError::InvalidInput(
                "Price must be a number".to_string(),
            )),
            PricePolicy::RejectNegativeOrNonNumeric if !price.is_finite() => Err(EventBoardError::InvalidInput(
                "Price must be a number".to_string(),
            )),
            PricePolicy::RejectNegativeOrNonNumeric if price < 0.0 => Err(EventBoardError::InvalidInput(
                "Price cannot be negative".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

impl EventForm {
    /// Convert the typed fields into a request body
    ///
    /// Required text fields are taken as-is; only the price is parsed.
    pub fn to_draft(&self, policy: PricePolicy) -> Result<EventDraft> {
        let price = parse_lenient_number(&self.price);
        policy.check(price)?;

        let image_url = match self.image_url.trim() {
            "" => None,
            url => Some(url.to_string()),
        };

        Ok(EventDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            start_date_time: self.start_date_time.clone(),
            end_date_time: self.end_date_time.clone(),
            venue: self.venue.clone(),
            price,
            image_url,
        })
    }
}

impl From<&Event> for EventForm {
    /// Pre-fill the form from an existing record for editing
    fn from(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            description: event.description.clone(),
            start_date_time: event.start_date_time.clone(),
            end_date_time: event.end_date_time.clone(),
            venue: event.venue.clone(),
            price: event.price.map(|p| p.to_string()).unwrap_or_default(),
            image_url: event.image_url.clone().unwrap_or_default(),
        }
    }
}

impl Event {
    /// Case-insensitive match of an already lowercased term against
    /// name, description and venue
    pub fn matches_lowercase(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term)
            || self.description.to_lowercase().contains(term)
            || self.venue.to_lowercase().contains(term)
    }

    /// Image to show, if the record carries a non-empty one
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }
}

//! Services module
//!
//! This module contains the API client, notification, search and
//! controller services

pub mod api;
pub mod controller;
pub mod notification;
pub mod search;

// Re-export commonly used services
pub use api::{EventApi, HttpEventApi};
pub use controller::{ActionOutcome, ControllerOptions, EventListController};
pub use notification::{Notification, NotificationCenter, NotificationKind};
pub use search::filter_by_search;

use std::sync::Arc;
use crate::config::settings::Settings;
use crate::utils::errors::Result;
use crate::view::{Confirm, EventView};

/// Wire a controller to the HTTP API described by `settings`
pub fn build_controller(
    settings: &Settings,
    view: Arc<dyn EventView>,
    confirm: Arc<dyn Confirm>,
) -> Result<EventListController> {
    let api = HttpEventApi::new(&settings.api)?;

    Ok(EventListController::new(
        Arc::new(api),
        view,
        confirm,
        ControllerOptions::from(settings),
    ))
}

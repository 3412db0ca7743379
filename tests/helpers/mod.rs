//! Test helpers module
//!
//! This module provides utilities and helpers for testing the EventBoard
//! client: a mock events API, recording test doubles and controller setup.

#![allow(dead_code)]

pub mod events_mock;
pub mod recording_view;

pub use events_mock::*;
pub use recording_view::*;

use std::sync::{Arc, Once};
use event_board::config::ApiConfig;
use event_board::services::{ControllerOptions, EventListController, HttpEventApi};

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("event_board=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Controller wired to `base_url` with recording doubles
pub struct TestContext {
    pub controller: EventListController,
    pub view: Arc<RecordingView>,
    pub confirm: Arc<ScriptedConfirm>,
}

impl TestContext {
    pub fn new(base_url: &str) -> Self {
        Self::with_options(base_url, false, ControllerOptions::default(), true)
    }

    pub fn with_options(
        base_url: &str,
        sort_by_date: bool,
        options: ControllerOptions,
        confirm_answer: bool,
    ) -> Self {
        init_test_env();

        let api_config = ApiConfig {
            base_url: base_url.to_string(),
            sort_by_date,
            ..ApiConfig::default()
        };
        let api = HttpEventApi::new(&api_config).expect("valid API config");

        let view = Arc::new(RecordingView::new());
        let confirm = Arc::new(ScriptedConfirm::new(confirm_answer));
        let controller = EventListController::new(Arc::new(api), view.clone(), confirm.clone(), options);

        Self {
            controller,
            view,
            confirm,
        }
    }
}

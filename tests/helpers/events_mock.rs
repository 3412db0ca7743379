//! Mock events API server for testing
//!
//! This module provides a mock HTTP server that simulates the `/api/events`
//! REST resource. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock events API server
pub struct EventsMockServer {
    pub server: MockServer,
}

impl EventsMockServer {
    /// Start a new mock server
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// `GET /api/events` answers with `events`, at most `times` times when given
    pub async fn mock_list(&self, events: Value, times: Option<u64>) {
        let mut mock = Mock::given(method("GET"))
            .and(path("/api/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(events));

        if let Some(n) = times {
            mock = mock.up_to_n_times(n);
        }

        mock.mount(&self.server).await;
    }

    /// `GET /api/events` answers with a bare status
    pub async fn mock_list_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/api/events"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// `GET /api/events` answers 200 with a body that is not an event list
    pub async fn mock_list_garbage(&self) {
        Mock::given(method("GET"))
            .and(path("/api/events"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&self.server)
            .await;
    }

    /// `GET /api/events/{id}`
    pub async fn mock_fetch(&self, id: i64, status: u16, body: Option<Value>) {
        let mut response = ResponseTemplate::new(status);
        if let Some(body) = body {
            response = response.set_body_json(body);
        }

        Mock::given(method("GET"))
            .and(path(format!("/api/events/{}", id)))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Number of received requests with the given method and path
    pub async fn count_requests(&self, http_method: &str, request_path: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|req| req.method.as_str() == http_method && req.url.path() == request_path)
            .count()
    }
}

/// The record used throughout the examples
pub fn concert_json() -> Value {
    json!({
        "id": 1,
        "name": "Concert",
        "description": "Live music",
        "startDateTime": "2024-06-01T20:00:00Z",
        "endDateTime": "2024-06-01T23:00:00Z",
        "venue": "Hall A",
        "price": 25.5
    })
}

/// A record with explicit id, name and venue
pub fn event_json(id: i64, name: &str, venue: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{} description", name),
        "startDateTime": "2024-07-01T19:30:00",
        "endDateTime": "2024-07-01T22:00:00",
        "venue": venue,
        "price": 10,
        "imageUrl": format!("https://img.example/{}.png", id)
    })
}

//! Events API client
//!
//! This service talks to the `/api/events` REST resource. Every failure kind
//! (transport, non-success status, undecodable body) is reported as an
//! [`ApiError`]; the controller decides what the user sees.

use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;
use crate::config::ApiConfig;
use crate::models::{Event, EventDraft};
use crate::utils::errors::{ApiError, ApiResult, EventBoardError, Result};
use crate::utils::logging::log_api_request;

/// Remote collection of events
#[async_trait]
pub trait EventApi: Send + Sync {
    /// `GET /api/events`
    async fn list_events(&self) -> ApiResult<Vec<Event>>;

    /// `GET /api/events/{id}`
    async fn fetch_event(&self, id: i64) -> ApiResult<Event>;

    /// `POST /api/events`; the response body is ignored
    async fn create_event(&self, draft: &EventDraft) -> ApiResult<()>;

    /// `PUT /api/events/{id}`; the response body is ignored
    async fn update_event(&self, id: i64, draft: &EventDraft) -> ApiResult<()>;

    /// `DELETE /api/events/{id}`
    async fn delete_event(&self, id: i64) -> ApiResult<()>;
}

/// HTTP implementation of [`EventApi`]
#[derive(Clone, Debug)]
pub struct HttpEventApi {
    client: Client,
    collection_url: Url,
    sort_by_date: bool,
}

impl HttpEventApi {
    /// Create a new HttpEventApi instance
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());

        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        let client = builder.build().map_err(EventBoardError::Http)?;
        let collection_url = Self::collection_url(&config.base_url)?;

        Ok(Self {
            client,
            collection_url,
            sort_by_date: config.sort_by_date,
        })
    }

    /// `<base>/api/events`, keeping any path prefix the base carries
    fn collection_url(base_url: &str) -> Result<Url> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join("api/events")?)
    }

    fn list_url(&self) -> Url {
        let mut url = self.collection_url.clone();
        if self.sort_by_date {
            url.query_pairs_mut().append_pair("sortBy", "date");
        }
        url
    }

    fn item_url(&self, id: i64) -> Url {
        let mut url = self.collection_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(&id.to_string());
        }
        url
    }

    fn ensure_success(status: StatusCode) -> ApiResult<()> {
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status(status))
        }
    }
}

#[async_trait]
impl EventApi for HttpEventApi {
    async fn list_events(&self) -> ApiResult<Vec<Event>> {
        let url = self.list_url();
        log_api_request("GET", url.as_str());

        let response = self.client.get(url).send().await?;

        // Only a plain 200 carries the collection
        if response.status() != StatusCode::OK {
            return Err(ApiError::Status(response.status()));
        }

        let events: Vec<Event> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        debug!(count = events.len(), "Fetched events");
        Ok(events)
    }

    async fn fetch_event(&self, id: i64) -> ApiResult<Event> {
        let url = self.item_url(id);
        log_api_request("GET", url.as_str());

        let response = self.client.get(url).send().await?;
        Self::ensure_success(response.status())?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create_event(&self, draft: &EventDraft) -> ApiResult<()> {
        let url = self.collection_url.clone();
        log_api_request("POST", url.as_str());

        let response = self.client.post(url).json(draft).send().await?;
        Self::ensure_success(response.status())
    }

    async fn update_event(&self, id: i64, draft: &EventDraft) -> ApiResult<()> {
        let url = self.item_url(id);
        log_api_request("PUT", url.as_str());

        let response = self.client.put(url).json(draft).send().await?;
        Self::ensure_success(response.status())
    }

    async fn delete_event(&self, id: i64) -> ApiResult<()> {
        let url = self.item_url(id);
        log_api_request("DELETE", url.as_str());

        let response = self.client.delete(url).send().await?;
        Self::ensure_success(response.status())
    }
}

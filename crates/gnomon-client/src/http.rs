//! HTTP client for the upstream social-media management API.

use gnomon_calendar::records::{PostRecord, SyncedEventRecord};
use gnomon_core::config::ApiConfig;
use gnomon_core::constants::{CALENDAR_EVENTS_ROUTE, POSTS_ROUTE, USER_AGENT};
use serde::de::DeserializeOwned;

use crate::error::ClientResult;
use crate::source::{EventSource, PostSource, SyncedEventSource};
use crate::wire::{EventsEnvelope, PostsEnvelope};

/// Thin reqwest wrapper for the two read-only queries the engine consumes.
///
/// No request timeout is set: failures surface only through the error
/// path, and retries belong to the caller's collaborators, not here.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// ## Summary
    /// Builds a client for the configured API endpoint.
    ///
    /// ## Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    #[tracing::instrument(
        skip(self, query),
        fields(correlation_id = %uuid::Uuid::new_v4())
    )]
    async fn fetch<T: DeserializeOwned>(
        &self,
        source: EventSource,
        route: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let mut request = self.http.get(format!("{}{route}", self.base_url));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?.error_for_status()?;
        tracing::debug!(status = %response.status(), "Upstream response received");

        // Decode from text so malformed bodies surface as Decode, not Transport
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl PostSource for ApiClient {
    async fn list_posts(&self, limit: u32) -> ClientResult<Vec<PostRecord>> {
        let envelope: PostsEnvelope = self
            .fetch(
                EventSource::Posts,
                POSTS_ROUTE,
                &[("limit", limit.to_string())],
            )
            .await?;
        if !envelope.success {
            tracing::warn!(source = %EventSource::Posts, "Upstream reported failure, treating as no data");
            return Ok(Vec::new());
        }
        Ok(envelope.posts)
    }
}

impl SyncedEventSource for ApiClient {
    async fn list_synced_events(&self) -> ClientResult<Vec<SyncedEventRecord>> {
        let envelope: EventsEnvelope = self
            .fetch(EventSource::SyncedEvents, CALENDAR_EVENTS_ROUTE, &[])
            .await?;
        if !envelope.success {
            tracing::warn!(source = %EventSource::SyncedEvents, "Upstream reported failure, treating as no data");
            return Ok(Vec::new());
        }
        Ok(envelope.events)
    }
}

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::config::ServiceConfig;
use crate::query::Query;
use crate::search::error::SearchError;
use crate::search::types::{ErrorBody, SearchRequest, SearchResult};

/// Anything that can answer a query.
///
/// The session treats implementations as opaque: one call per search, no
/// timeout, no retry.
#[async_trait]
pub trait SearchService: Send + Sync {
    async fn search(&self, query: &Query) -> Result<SearchResult, SearchError>;
}

/// Search service reached over HTTP.
///
/// `POST`s `{"query": "..."}` to the endpoint and decodes either a
/// `SearchResult` (success status) or `{"error": "..."}` (any other status).
pub struct HttpSearchClient {
    client: Client,
    endpoint: String,
}

impl HttpSearchClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, SearchError> {
        // Only connection setup is bounded. The request itself waits for
        // the service to resolve.
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SearchService for HttpSearchClient {
    async fn search(&self, query: &Query) -> Result<SearchResult, SearchError> {
        let started = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(&SearchRequest {
                query: query.as_str(),
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!(
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "search response received"
        );

        if status.is_success() {
            serde_json::from_slice::<SearchResult>(&body).map_err(|e| {
                SearchError::Transport(format!("Failed to decode search result: {}", e))
            })
        } else {
            match serde_json::from_slice::<ErrorBody>(&body) {
                Ok(ErrorBody { error }) => Err(SearchError::Service {
                    status: status.as_u16(),
                    message: error,
                }),
                Err(e) => Err(SearchError::Transport(format!(
                    "Unreadable error response (status {}): {}",
                    status.as_u16(),
                    e
                ))),
            }
        }
    }
}

//! Matching Service API
//!
//! Transport seam between the client core and the external matching service.

use std::future::Future;

use fb_common::{SearchRequest, SearchResponse, UsersResponse};
use reqwest::{Client as HttpClient, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result, TransportError};

/// Operations the matching service exposes.
///
/// Implementations report failures as [`TransportError`]; classifying a
/// decoded response (backend-signalled error, empty results) is the caller's job.
pub trait MatcherApi: Send + Sync {
    /// `GET /users`
    fn fetch_users(
        &self,
    ) -> impl Future<Output = std::result::Result<UsersResponse, TransportError>> + Send;

    /// `POST /search`
    fn search(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = std::result::Result<SearchResponse, TransportError>> + Send;
}

/// HTTP implementation of [`MatcherApi`].
#[derive(Debug, Clone)]
pub struct HttpMatcherApi {
    http: HttpClient,
    base_url: String,
}

impl HttpMatcherApi {
    /// Create a client for the configured service.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Check the status and decode a JSON body.
async fn decode<T: DeserializeOwned>(
    response: Response,
    what: &str,
) -> std::result::Result<T, TransportError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!("Failed to {}: {} - {}", what, status, body);
        return Err(TransportError::Status(status.as_u16()));
    }

    response.json().await.map_err(|e| {
        error!("Failed to parse {} response: {}", what, e);
        TransportError::Malformed(e.to_string())
    })
}

impl MatcherApi for HttpMatcherApi {
    async fn fetch_users(&self) -> std::result::Result<UsersResponse, TransportError> {
        let url = self.endpoint("/users");
        debug!("Fetching roster from {}", url);

        let response = self.http.get(&url).send().await.map_err(|e| {
            error!("Failed to fetch users: {}", e);
            TransportError::Unreachable(e.to_string())
        })?;

        let users: UsersResponse = decode(response, "fetch users").await?;
        debug!(count = users.users.len(), "Fetched roster");
        Ok(users)
    }

    async fn search(
        &self,
        request: &SearchRequest,
    ) -> std::result::Result<SearchResponse, TransportError> {
        let url = self.endpoint("/search");
        debug!(
            k = request.k,
            current_user_id = ?request.current_user_id,
            "Searching for {:?}",
            request.query
        );

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Search request failed: {}", e);
                TransportError::Unreachable(e.to_string())
            })?;

        let results: SearchResponse = decode(response, "search").await?;
        debug!(count = results.results.len(), "Search returned");
        Ok(results)
    }
}

//! Wire Protocol
//!
//! Request and response bodies for the matching service's `GET /users` and
//! `POST /search` endpoints.

use serde::{Deserialize, Serialize};

use crate::types::{null_as_default, Person, PersonId, SearchResult};

/// Result-count ceiling sent with every search.
pub const DEFAULT_RESULT_LIMIT: u32 = 10;

/// Largest `k` the service accepts.
pub const MAX_RESULT_LIMIT: u32 = 20;

/// Minimum similarity threshold sent with every search.
pub const DEFAULT_MIN_SIMILARITY: f64 = 0.1;

/// Response body of `GET /users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<Person>,
    #[serde(default)]
    pub total: usize,
    /// Server time the roster was produced (seconds since epoch).
    #[serde(default)]
    pub timestamp: f64,
}

/// Request body of `POST /search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Trimmed query text.
    pub query: String,
    /// Result-count ceiling.
    pub k: u32,
    /// Person the session is browsing as; `null` for guests.
    pub current_user_id: Option<PersonId>,
    pub min_similarity_threshold: f64,
}

/// Operational status of a search response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchStatus {
    #[default]
    Success,
    Error,
}

/// Response body of `POST /search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: String,
    /// Ranked results, non-increasing similarity.
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<SearchResult>,
    #[serde(default)]
    pub total_found: u32,
    #[serde(default)]
    pub search_time_ms: f64,
    #[serde(default)]
    pub top_match_explanation: Option<String>,
    #[serde(default)]
    pub status: SearchStatus,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suggestions: Vec<String>,
}

impl SearchResponse {
    /// The error message, if the service supplied a non-empty one.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref().filter(|m| !m.is_empty())
    }

    /// Whether the service reported a failure despite a successful transport.
    pub fn signals_error(&self) -> bool {
        self.status == SearchStatus::Error || self.error_message().is_some()
    }
}

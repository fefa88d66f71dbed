//! Client Errors
//!
//! Every error here is terminal at the UI boundary: it is mapped to the single
//! message slot via [`ClientError::user_message`] and never propagated further.

use std::fmt;

use fb_common::PersonId;
use thiserror::Error;

/// Shown when a search cannot reach the service.
pub const SEARCH_CONNECTIVITY_MESSAGE: &str =
    "Search failed. Please check your connection and try again.";

/// Shown when the roster cannot be fetched.
pub const ROSTER_CONNECTIVITY_MESSAGE: &str =
    "Failed to load users. Please check if the backend is running.";

/// Shown when a well-formed search matched nobody.
pub const EMPTY_RESULTS_MESSAGE: &str =
    "No matches found. Try different keywords or a more specific query.";

/// Shown when the service reports an error without a message.
pub const BACKEND_FALLBACK_MESSAGE: &str = "Search failed";

/// Transport-level failure talking to the matching service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request never produced a response.
    #[error("Connection failed: {0}")]
    Unreachable(String),
    /// The service answered with a non-2xx status.
    #[error("Unexpected status: {0}")]
    Status(u16),
    /// The body could not be decoded.
    #[error("Invalid response: {0}")]
    Malformed(String),
}

/// Service endpoint an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Users,
    Search,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Users => f.write_str("GET /users"),
            Self::Search => f.write_str("POST /search"),
        }
    }
}

/// Client error taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Transport failure or non-2xx response.
    #[error("{endpoint} failed: {source}")]
    Connectivity {
        endpoint: Endpoint,
        #[source]
        source: TransportError,
    },

    /// 2xx response carrying an explicit error status or message.
    #[error("Search service reported an error: {0}")]
    BackendSignaled(String),

    /// Well-formed response with zero results.
    #[error("Search returned no matches")]
    EmptyResults,

    /// Switch to a person id absent from the roster.
    #[error("Unknown profile: {0}")]
    UnknownIdentity(PersonId),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    pub(crate) const fn connectivity(endpoint: Endpoint, source: TransportError) -> Self {
        Self::Connectivity { endpoint, source }
    }

    /// Text for the UI message slot.
    ///
    /// Connectivity causes are deliberately reduced to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Connectivity {
                endpoint: Endpoint::Search,
                ..
            } => SEARCH_CONNECTIVITY_MESSAGE.to_string(),
            Self::Connectivity {
                endpoint: Endpoint::Users,
                ..
            } => ROSTER_CONNECTIVITY_MESSAGE.to_string(),
            Self::BackendSignaled(message) => message.clone(),
            Self::EmptyResults => EMPTY_RESULTS_MESSAGE.to_string(),
            Self::UnknownIdentity(_) | Self::Config(_) => self.to_string(),
        }
    }
}

/// Client result type.
pub type Result<T> = std::result::Result<T, ClientError>;

//! Search Controller
//!
//! Owns the query text and the lifecycle of a single search:
//! `Idle -> Submitting -> {Succeeded, Failed} -> Idle`.
//!
//! Issuing a request and applying its response are separate steps so the
//! network call can run without holding the controller. Every submit is
//! tagged with a [`SearchTicket`]; a response is applied only if its ticket
//! is still the latest one. [`SearchController::reset`] also advances the
//! tag, so a response issued before a reset is discarded.

use fb_common::{
    PersonId, SearchRequest, SearchResponse, SearchResult, SearchStatus, DEFAULT_MIN_SIMILARITY,
    DEFAULT_RESULT_LIMIT,
};
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::error::{ClientError, Endpoint, TransportError, BACKEND_FALLBACK_MESSAGE};
use crate::partition::{resolve_explanation, PartitionedResults};

/// Lifecycle phase of the search controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Fixed parameters stamped on every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchSettings {
    pub result_limit: u32,
    pub min_similarity: f64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
            min_similarity: DEFAULT_MIN_SIMILARITY,
        }
    }
}

/// Sequence tag of one submitted search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub const fn seq(self) -> u64 {
        self.0
    }
}

/// A search that has been submitted but not yet answered.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSearch {
    pub ticket: SearchTicket,
    pub request: SearchRequest,
}

/// What happened to a delivered response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseDisposition {
    /// The response updated the controller.
    Applied,
    /// A newer submit or a reset superseded it; it was dropped.
    Stale,
}

/// Result of one resolved search request. Replaced wholesale, never patched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    /// Query string that produced it.
    pub query: String,
    pub total_found: u32,
    /// Service-side elapsed time.
    pub search_time_ms: f64,
    /// Explanation for the top match.
    pub top_match_explanation: Option<String>,
    pub status: SearchStatus,
    pub error_message: Option<String>,
    /// Alternatives the service proposes when nothing matched.
    pub suggestions: Vec<String>,
    pub results: PartitionedResults,
}

impl SearchOutcome {
    /// Elapsed time rounded to whole milliseconds.
    pub fn search_time_display(&self) -> u64 {
        if self.search_time_ms.is_finite() && self.search_time_ms > 0.0 {
            self.search_time_ms.round() as u64
        } else {
            0
        }
    }
}

/// The search state machine.
#[derive(Debug, Default)]
pub struct SearchController {
    settings: SearchSettings,
    query_text: String,
    phase: SearchPhase,
    outcome: Option<SearchOutcome>,
    error: Option<ClientError>,
    latest: u64,
}

impl SearchController {
    pub fn new(settings: SearchSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub const fn settings(&self) -> SearchSettings {
        self.settings
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub const fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SearchPhase::Submitting
    }

    pub const fn outcome(&self) -> Option<&SearchOutcome> {
        self.outcome.as_ref()
    }

    pub const fn error(&self) -> Option<&ClientError> {
        self.error.as_ref()
    }

    /// Contents of the message slot.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ClientError::user_message)
    }

    pub fn top_match(&self) -> Option<&SearchResult> {
        self.outcome
            .as_ref()
            .and_then(|outcome| outcome.results.top_match.as_ref())
    }

    pub fn rest(&self) -> &[SearchResult] {
        self.outcome
            .as_ref()
            .map_or(&[], |outcome| outcome.results.rest.as_slice())
    }

    pub fn top_match_explanation(&self) -> Option<&str> {
        self.outcome
            .as_ref()
            .and_then(|outcome| outcome.top_match_explanation.as_deref())
    }

    /// Replace the pending query text. Does not touch an in-flight request.
    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.query_text = text.into();
        if matches!(self.phase, SearchPhase::Succeeded | SearchPhase::Failed) {
            self.phase = SearchPhase::Idle;
        }
    }

    /// Whether [`submit`](Self::submit) would issue a request.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && !self.query_text.trim().is_empty()
    }

    /// Start a search for the current query text.
    ///
    /// Returns `None` without any state change when the trimmed query is empty
    /// or a search is already in flight.
    pub fn submit(&mut self, current_user_id: Option<PersonId>) -> Option<PendingSearch> {
        if self.is_submitting() {
            debug!("Search already in flight, ignoring submit");
            return None;
        }
        let query = self.query_text.trim();
        if query.is_empty() {
            return None;
        }

        let request = SearchRequest {
            query: query.to_string(),
            k: self.settings.result_limit,
            current_user_id,
            min_similarity_threshold: self.settings.min_similarity,
        };

        self.latest += 1;
        self.phase = SearchPhase::Submitting;
        self.outcome = None;
        self.error = None;

        let ticket = SearchTicket(self.latest);
        debug!(seq = ticket.seq(), "Search submitted");
        Some(PendingSearch { ticket, request })
    }

    /// Apply the result of the request issued for `ticket`.
    pub fn apply_response(
        &mut self,
        ticket: SearchTicket,
        result: Result<SearchResponse, TransportError>,
    ) -> ResponseDisposition {
        if ticket.seq() != self.latest || !self.is_submitting() {
            warn!(
                seq = ticket.seq(),
                latest = self.latest,
                "Discarding stale search response"
            );
            return ResponseDisposition::Stale;
        }

        match result {
            Err(source) => {
                error!(seq = ticket.seq(), "Search failed: {}", source);
                self.fail(ClientError::connectivity(Endpoint::Search, source), None);
            }
            Ok(response) if response.signals_error() => {
                let message = response
                    .error_message()
                    .unwrap_or(BACKEND_FALLBACK_MESSAGE)
                    .to_string();
                warn!(seq = ticket.seq(), "Search service reported: {}", message);
                let outcome = SearchOutcome {
                    query: response.query,
                    total_found: 0,
                    search_time_ms: response.search_time_ms,
                    top_match_explanation: None,
                    status: SearchStatus::Error,
                    error_message: Some(message.clone()),
                    suggestions: response.suggestions,
                    results: PartitionedResults::default(),
                };
                self.fail(ClientError::BackendSignaled(message), Some(outcome));
            }
            Ok(response) if response.results.is_empty() => {
                debug!(seq = ticket.seq(), "Search returned no results");
                let outcome = SearchOutcome {
                    query: response.query,
                    total_found: 0,
                    search_time_ms: response.search_time_ms,
                    top_match_explanation: None,
                    status: response.status,
                    error_message: None,
                    suggestions: response.suggestions,
                    results: PartitionedResults::default(),
                };
                self.fail(ClientError::EmptyResults, Some(outcome));
            }
            Ok(response) => {
                let results = PartitionedResults::from_results(response.results);
                let top_match_explanation = resolve_explanation(
                    response.top_match_explanation.as_deref(),
                    results.top_match.as_ref(),
                );
                debug!(
                    seq = ticket.seq(),
                    count = results.rest_len() + 1,
                    "Search succeeded"
                );
                self.outcome = Some(SearchOutcome {
                    query: response.query,
                    total_found: response.total_found,
                    search_time_ms: response.search_time_ms,
                    top_match_explanation,
                    status: response.status,
                    error_message: None,
                    suggestions: response.suggestions,
                    results,
                });
                self.error = None;
                self.phase = SearchPhase::Succeeded;
            }
        }

        ResponseDisposition::Applied
    }

    fn fail(&mut self, error: ClientError, outcome: Option<SearchOutcome>) {
        self.outcome = outcome;
        self.error = Some(error);
        self.phase = SearchPhase::Failed;
    }

    /// Back to `Idle` with no query, results or message. Any in-flight
    /// response becomes stale.
    pub fn reset(&mut self) {
        self.latest += 1;
        self.query_text.clear();
        self.phase = SearchPhase::Idle;
        self.outcome = None;
        self.error = None;
    }

    /// Whether to show the "No matches found" placeholder.
    pub fn shows_empty_state(&self) -> bool {
        !self.query_text.is_empty()
            && self.top_match().is_none()
            && self.rest().is_empty()
            && !self.is_submitting()
            && self.error.is_none()
    }
}

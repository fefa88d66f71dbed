//! Session
//!
//! Owns every state container of one client session and wires the
//! cross-component contracts between them: switching identity resets the
//! search, closes the inspector and hides the directory panel.
//!
//! Errors from every component land in one message slot. The latest failure
//! wins; a submitted search, a successful identity switch or a successful
//! roster load clears it.

use fb_common::{SearchResponse, SearchResult, UsersResponse};
use serde::Serialize;
use tracing::{info, warn};

use crate::detail::{DetailInspector, DetailSubject};
use crate::directory::DirectoryStore;
use crate::error::{ClientError, Result, TransportError};
use crate::identity::{IdentityContext, IdentitySelection};
use crate::search::{
    PendingSearch, ResponseDisposition, SearchController, SearchPhase, SearchSettings,
    SearchTicket,
};
use crate::view::ViewCoordinator;

/// One consistent frame of session state for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub identity: IdentitySelection,
    pub greeting: String,
    pub phase: SearchPhase,
    pub query_text: String,
    /// Contents of the single message slot.
    pub error_message: Option<String>,
    pub top_match: Option<SearchResult>,
    pub top_match_explanation: Option<String>,
    pub rest: Vec<SearchResult>,
    /// Rounded service-side search time of the current outcome.
    pub search_time_ms: Option<u64>,
    pub suggestions: Vec<String>,
    pub shows_empty_state: bool,
    /// Roster size and load error, for the directory panel.
    pub directory_size: usize,
    pub directory_error: Option<String>,
    pub directory_visible: bool,
    pub detail_visible: bool,
    pub detail: Option<DetailSubject>,
}

#[derive(Debug, Default)]
pub struct Session {
    directory: DirectoryStore,
    identity: IdentityContext,
    search: SearchController,
    inspector: DetailInspector,
    view: ViewCoordinator,
    message: Option<ClientError>,
}

impl Session {
    pub fn new(settings: SearchSettings) -> Self {
        Self {
            search: SearchController::new(settings),
            ..Self::default()
        }
    }

    pub const fn directory(&self) -> &DirectoryStore {
        &self.directory
    }

    pub const fn identity(&self) -> IdentitySelection {
        self.identity.current()
    }

    pub const fn search(&self) -> &SearchController {
        &self.search
    }

    pub const fn inspector(&self) -> &DetailInspector {
        &self.inspector
    }

    pub const fn view(&self) -> &ViewCoordinator {
        &self.view
    }

    /// Error currently occupying the message slot.
    pub const fn error(&self) -> Option<&ClientError> {
        self.message.as_ref()
    }

    pub fn error_message(&self) -> Option<String> {
        self.message.as_ref().map(ClientError::user_message)
    }

    /// Whether the detail panel is showing. Never true without a subject.
    pub const fn detail_visible(&self) -> bool {
        self.view.detail_visible(&self.inspector)
    }

    pub fn greeting(&self) -> String {
        self.identity.greeting(&self.directory)
    }

    /// Apply a roster fetch result.
    pub fn apply_roster(
        &mut self,
        result: std::result::Result<UsersResponse, TransportError>,
    ) -> Result<usize> {
        let loaded = self.directory.apply_load(result);
        self.message = loaded.as_ref().err().cloned();
        loaded
    }

    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.search.set_query_text(text);
    }

    /// Submit the current query as the active identity.
    pub fn begin_search(&mut self) -> Option<PendingSearch> {
        let pending = self.search.submit(self.identity.current().person_id())?;
        self.message = None;
        Some(pending)
    }

    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        result: std::result::Result<SearchResponse, TransportError>,
    ) -> ResponseDisposition {
        let disposition = self.search.apply_response(ticket, result);
        if disposition == ResponseDisposition::Applied {
            self.message = self.search.error().cloned();
        }
        disposition
    }

    /// Switch the active identity.
    ///
    /// On success the search returns to an empty `Idle`, the detail panel is
    /// closed and the directory panel is hidden. On failure only the message
    /// slot changes.
    pub fn switch_identity(&mut self, selection: IdentitySelection) -> Result<IdentitySelection> {
        let selection = match self.identity.switch_to(selection, &self.directory) {
            Ok(selection) => selection,
            Err(e) => {
                warn!("Identity switch rejected: {}", e);
                self.message = Some(e.clone());
                return Err(e);
            }
        };

        self.message = None;
        self.search.reset();
        self.inspector.close();
        self.view.close_detail();
        self.view.close_directory();

        info!(person_id = ?selection.person_id(), "Switched identity");
        Ok(selection)
    }

    /// Open the detail panel on `subject`, replacing any open subject.
    pub fn open_detail(&mut self, subject: impl Into<DetailSubject>) {
        self.inspector.open(subject);
        self.view.open_detail(&self.inspector);
    }

    pub fn close_detail(&mut self) {
        self.view.close_detail();
        self.inspector.close();
    }

    pub fn open_directory(&mut self) {
        self.view.open_directory();
    }

    pub fn close_directory(&mut self) {
        self.view.close_directory();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let outcome = self.search.outcome();
        SessionSnapshot {
            identity: self.identity.current(),
            greeting: self.greeting(),
            phase: self.search.phase(),
            query_text: self.search.query_text().to_string(),
            error_message: self.error_message(),
            top_match: self.search.top_match().cloned(),
            top_match_explanation: self.search.top_match_explanation().map(str::to_string),
            rest: self.search.rest().to_vec(),
            search_time_ms: outcome.map(|outcome| outcome.search_time_display()),
            suggestions: outcome
                .map(|outcome| outcome.suggestions.clone())
                .unwrap_or_default(),
            shows_empty_state: self.search.shows_empty_state(),
            directory_size: self.directory.len(),
            directory_error: self.directory.error().map(|e| e.user_message()),
            directory_visible: self.view.directory_visible(),
            detail_visible: self.detail_visible(),
            detail: self.inspector.subject().cloned(),
        }
    }
}

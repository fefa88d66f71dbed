//! Detail Inspector
//!
//! Holds the one record shown in the detail panel. Directory entries and
//! search results both open it; the subject keeps track of which kind it is.

use chrono::NaiveDate;
use fb_common::{format, Conversation, Person, PersonId, Profile, SearchResult};
use serde::Serialize;
use tracing::debug;

/// Conversation snippets shown in the panel.
pub const MAX_DETAIL_CONVERSATIONS: usize = 5;

/// The record the detail panel displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "record", rename_all = "snake_case")]
pub enum DetailSubject {
    Person(Person),
    SearchResult(SearchResult),
}

impl From<Person> for DetailSubject {
    fn from(person: Person) -> Self {
        Self::Person(person)
    }
}

impl From<SearchResult> for DetailSubject {
    fn from(result: SearchResult) -> Self {
        Self::SearchResult(result)
    }
}

impl DetailSubject {
    /// Identifier used for avatar colouring. Results use their join key even
    /// when they also echo `id`.
    pub const fn person_id(&self) -> PersonId {
        match self {
            Self::Person(person) => person.id,
            Self::SearchResult(result) => result.user_id,
        }
    }

    pub const fn profile(&self) -> &Profile {
        match self {
            Self::Person(person) => &person.profile,
            Self::SearchResult(result) => &result.profile,
        }
    }

    pub fn name(&self) -> &str {
        &self.profile().name
    }

    pub fn initials(&self) -> String {
        self.profile().initials()
    }

    pub fn bio(&self) -> &str {
        &self.profile().bio
    }

    pub fn location(&self) -> Option<&str> {
        self.profile().location.as_deref()
    }

    pub const fn activity_text(&self) -> &'static str {
        format::activity_text(self.profile().activity_status)
    }

    /// Relative last-active text as of `today`.
    pub fn last_active_text(&self, today: NaiveDate) -> String {
        format::activity_display_text(self.profile().last_active.as_deref(), today)
    }

    /// "Role • Experience", only when a role is present.
    pub fn role_line(&self) -> Option<String> {
        let profile = self.profile();
        profile
            .current_role
            .as_deref()
            .filter(|role| !role.is_empty())
            .map(|_| profile.role_line())
    }

    pub fn expertise(&self) -> &[String] {
        &self.profile().domain_expertise
    }

    pub fn networking_intent(&self) -> Option<String> {
        self.profile()
            .networking_intent
            .as_deref()
            .filter(|intent| !intent.is_empty())
            .map(|intent| format::format_label(Some(intent)))
    }

    /// At most [`MAX_DETAIL_CONVERSATIONS`] snippets, in delivered order.
    pub fn recent_conversations(&self) -> &[Conversation] {
        let conversations = &self.profile().conversations;
        &conversations[..conversations.len().min(MAX_DETAIL_CONVERSATIONS)]
    }

    /// Match percentage, for result subjects only.
    pub fn similarity_percent(&self) -> Option<u8> {
        match self {
            Self::Person(_) => None,
            Self::SearchResult(result) => Some(result.similarity_percent()),
        }
    }
}

/// Single-slot holder for the active detail subject.
#[derive(Debug, Default)]
pub struct DetailInspector {
    subject: Option<DetailSubject>,
}

impl DetailInspector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `subject`, replacing whatever was open.
    pub fn open(&mut self, subject: impl Into<DetailSubject>) {
        let subject = subject.into();
        debug!(person_id = subject.person_id(), "Opening detail");
        self.subject = Some(subject);
    }

    pub fn close(&mut self) {
        self.subject = None;
    }

    pub const fn subject(&self) -> Option<&DetailSubject> {
        self.subject.as_ref()
    }

    pub const fn is_open(&self) -> bool {
        self.subject.is_some()
    }
}

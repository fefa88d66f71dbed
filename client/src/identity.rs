//! Identity Context
//!
//! Which directory member, if any, the session is browsing as.

use fb_common::PersonId;
use serde::Serialize;

use crate::directory::DirectoryStore;
use crate::error::{ClientError, Result};

const GREETING_QUESTION: &str = "Who would you love to meet right now?";

/// Guest, or a specific person from the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum IdentitySelection {
    #[default]
    Guest,
    Person(PersonId),
}

impl IdentitySelection {
    /// Value sent as `current_user_id`.
    pub const fn person_id(self) -> Option<PersonId> {
        match self {
            Self::Guest => None,
            Self::Person(id) => Some(id),
        }
    }

    pub const fn is_guest(self) -> bool {
        matches!(self, Self::Guest)
    }
}

impl From<Option<PersonId>> for IdentitySelection {
    fn from(id: Option<PersonId>) -> Self {
        id.map_or(Self::Guest, Self::Person)
    }
}

#[derive(Debug, Default)]
pub struct IdentityContext {
    current: IdentitySelection,
}

impl IdentityContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn current(&self) -> IdentitySelection {
        self.current
    }

    /// Change the active identity. A person must exist in `directory`.
    ///
    /// This only records the selection; the cross-component resets live in
    /// [`Session::switch_identity`](crate::Session::switch_identity).
    pub fn switch_to(
        &mut self,
        selection: IdentitySelection,
        directory: &DirectoryStore,
    ) -> Result<IdentitySelection> {
        if let IdentitySelection::Person(id) = selection {
            if !directory.contains(id) {
                return Err(ClientError::UnknownIdentity(id));
            }
        }
        self.current = selection;
        Ok(selection)
    }

    /// Header greeting. Falls back to the guest text when the selected person
    /// is no longer in the roster.
    pub fn greeting(&self, directory: &DirectoryStore) -> String {
        self.current
            .person_id()
            .and_then(|id| directory.find(id))
            .map_or_else(
                || format!("Hi! {GREETING_QUESTION}"),
                |person| format!("Hi {}! {GREETING_QUESTION}", person.profile.first_name()),
            )
    }
}

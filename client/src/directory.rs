//! Directory Store
//!
//! Holds the roster fetched from `GET /users`. The roster is replaced
//! wholesale on a successful load and left untouched on failure.

use fb_common::{Person, PersonId, UsersResponse};
use tracing::{error, info};

use crate::api::MatcherApi;
use crate::error::{ClientError, Endpoint, Result, TransportError};

/// The directory roster and its last load error.
#[derive(Debug, Default)]
pub struct DirectoryStore {
    roster: Vec<Person>,
    error: Option<ClientError>,
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current roster, in the order the service delivered it.
    pub fn list(&self) -> &[Person] {
        &self.roster
    }

    pub fn find(&self, id: PersonId) -> Option<&Person> {
        self.roster.iter().find(|person| person.id == id)
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.find(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Error raised by the most recent load, if it failed.
    pub const fn error(&self) -> Option<&ClientError> {
        self.error.as_ref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Apply the result of a roster fetch.
    ///
    /// Returns the new roster size on success. On failure the previous roster
    /// is kept and the error is both stored and returned.
    pub fn apply_load(
        &mut self,
        result: std::result::Result<UsersResponse, TransportError>,
    ) -> Result<usize> {
        match result {
            Ok(response) => {
                self.roster = response.users;
                self.error = None;
                info!(count = self.roster.len(), "Roster loaded");
                Ok(self.roster.len())
            }
            Err(source) => {
                error!("Failed to load roster: {}", source);
                let err = ClientError::connectivity(Endpoint::Users, source);
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Fetch the roster and apply it. No retry.
    pub async fn load<A: MatcherApi>(&mut self, api: &A) -> Result<usize> {
        let result = api.fetch_users().await;
        self.apply_load(result)
    }
}

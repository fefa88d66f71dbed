//! Matcher Client
//!
//! Async handle combining a [`MatcherApi`] with a shared [`Session`]. The
//! session lock is never held across a network call, so a roster load and a
//! search can be in flight together; a search response that was overtaken by
//! a newer submit or an identity switch is dropped by its ticket.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};
use tracing::debug;

use crate::api::{HttpMatcherApi, MatcherApi};
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::identity::IdentitySelection;
use crate::search::{ResponseDisposition, SearchSettings};
use crate::session::{Session, SessionSnapshot};

pub struct MatcherClient<A> {
    api: Arc<A>,
    session: Arc<Mutex<Session>>,
}

impl<A> Clone for MatcherClient<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            session: Arc::clone(&self.session),
        }
    }
}

impl MatcherClient<HttpMatcherApi> {
    /// Client talking HTTP to the configured service.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let api = HttpMatcherApi::new(config)?;
        Ok(Self::new(Arc::new(api), config.search_settings()))
    }

    /// Client configured from `MATCHER_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env().map_err(|e| ClientError::Config(format!("{e:#}")))?;
        Self::from_config(&config)
    }
}

impl<A: MatcherApi> MatcherClient<A> {
    pub fn new(api: Arc<A>, settings: SearchSettings) -> Self {
        Self {
            api,
            session: Arc::new(Mutex::new(Session::new(settings))),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Direct access to the session for synchronous operations.
    pub async fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().await
    }

    /// Fetch the roster. Called once at startup; callers may call it again to
    /// refresh.
    pub async fn load_directory(&self) -> Result<usize> {
        let result = self.api.fetch_users().await;
        self.session.lock().await.apply_roster(result)
    }

    pub async fn set_query_text(&self, text: impl Into<String> + Send) {
        self.session.lock().await.set_query_text(text);
    }

    /// Submit the current query and wait for its response.
    ///
    /// Returns `None` when the submit was refused (blank query or a search
    /// already in flight).
    pub async fn submit_search(&self) -> Option<ResponseDisposition> {
        let pending = self.session.lock().await.begin_search()?;
        let result = self.api.search(&pending.request).await;
        let disposition = self
            .session
            .lock()
            .await
            .complete_search(pending.ticket, result);
        debug!(seq = pending.ticket.seq(), ?disposition, "Search completed");
        Some(disposition)
    }

    pub async fn switch_identity(&self, selection: IdentitySelection) -> Result<IdentitySelection> {
        self.session.lock().await.switch_identity(selection)
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot()
    }
}

//! Figbox Matcher Client
//!
//! Client core for a people-matching directory: loads the roster, runs
//! natural-language searches against the matching service, and tracks what
//! the UI shows (identity, results, detail and directory panels).
//!
//! [`Session`] holds the state synchronously and can be driven by any event
//! loop. [`MatcherClient`] wraps it with an async [`MatcherApi`] transport.

pub mod api;
pub mod client;
pub mod config;
pub mod detail;
pub mod directory;
pub mod error;
pub mod identity;
pub mod partition;
pub mod search;
pub mod session;
pub mod telemetry;
pub mod view;

#[cfg(test)]
mod testing;

pub use api::{HttpMatcherApi, MatcherApi};
pub use client::MatcherClient;
pub use config::ClientConfig;
pub use detail::{DetailInspector, DetailSubject};
pub use directory::DirectoryStore;
pub use error::{ClientError, Result, TransportError};
pub use identity::{IdentityContext, IdentitySelection};
pub use partition::{partition, PartitionedResults};
pub use search::{
    PendingSearch, ResponseDisposition, SearchController, SearchOutcome, SearchPhase,
    SearchSettings, SearchTicket,
};
pub use session::{Session, SessionSnapshot};
pub use view::ViewCoordinator;

//! Client Configuration
//!
//! Loads configuration from environment variables.

use std::env;
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use fb_common::{DEFAULT_MIN_SIMILARITY, DEFAULT_RESULT_LIMIT, MAX_RESULT_LIMIT};
use tracing::warn;
use url::Url;

use crate::search::SearchSettings;

/// Default matching service location.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default HTTP client timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the matching service, without a trailing slash.
    pub api_url: String,

    /// HTTP client timeout (default: 30s)
    pub http_timeout: Duration,

    /// Result-count ceiling sent with searches (default: 10, max: 20).
    /// Operator override only; clients talking to the stock service keep 10.
    pub result_limit: u32,

    /// Minimum similarity sent with searches (default: 0.1).
    /// Operator override only; clients talking to the stock service keep 0.1.
    pub min_similarity: f64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            result_limit: DEFAULT_RESULT_LIMIT,
            min_similarity: DEFAULT_MIN_SIMILARITY,
        }
    }
}

impl ClientConfig {
    /// Load configuration from the environment, after reading `.env` if present.
    ///
    /// Environment variables:
    /// - `MATCHER_API_URL`: service base URL (default: `http://localhost:8000`)
    /// - `MATCHER_HTTP_TIMEOUT_SECS`: HTTP timeout in seconds (default: 30)
    /// - `MATCHER_RESULT_LIMIT`: operator override of `k`, 1-20 (default: 10)
    /// - `MATCHER_MIN_SIMILARITY`: operator override of the threshold, 0.0-1.0 (default: 0.1)
    ///
    /// Leave the two overrides unset to send the service's standard `k = 10`
    /// and threshold `0.1`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup("MATCHER_API_URL") {
            config.api_url = normalize_api_url(&raw)?;
        }
        if let Some(raw) = lookup("MATCHER_HTTP_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.http_timeout = Duration::from_secs(secs),
                _ => warn!("Ignoring invalid MATCHER_HTTP_TIMEOUT_SECS: {raw}"),
            }
        }
        if let Some(raw) = lookup("MATCHER_RESULT_LIMIT") {
            match raw.trim().parse::<u32>() {
                Ok(limit) => config.result_limit = limit.clamp(1, MAX_RESULT_LIMIT),
                Err(_) => warn!("Ignoring invalid MATCHER_RESULT_LIMIT: {raw}"),
            }
        }
        if let Some(raw) = lookup("MATCHER_MIN_SIMILARITY") {
            match raw.trim().parse::<f64>() {
                Ok(threshold) if threshold.is_finite() => {
                    config.min_similarity = threshold.clamp(0.0, 1.0);
                }
                _ => warn!("Ignoring invalid MATCHER_MIN_SIMILARITY: {raw}"),
            }
        }

        Ok(config)
    }

    /// Parameters the search controller stamps on every request.
    pub const fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            result_limit: self.result_limit,
            min_similarity: self.min_similarity,
        }
    }
}

/// Validate a base URL and strip trailing slashes.
fn normalize_api_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed =
        Url::parse(trimmed).with_context(|| format!("MATCHER_API_URL is not a valid URL: {raw}"))?;
    ensure!(
        matches!(parsed.scheme(), "http" | "https"),
        "MATCHER_API_URL must use http or https: {raw}"
    );
    Ok(trimmed.to_string())
}

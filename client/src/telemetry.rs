//! Logging and Error Reporting
//!
//! For the application embedding the client. Library code only emits
//! `tracing` events; this installs something to receive them.

use std::env;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "fb_client=debug";

/// Install the global subscriber.
///
/// Sentry is enabled only when `SENTRY_DSN_CLIENT` is set and non-empty. Hold
/// the returned guard for the lifetime of the process so queued events are
/// flushed on exit. Calling this twice keeps the first subscriber.
#[must_use]
pub fn init() -> Option<sentry::ClientInitGuard> {
    let sentry_guard = env::var("SENTRY_DSN_CLIENT")
        .ok()
        .filter(|dsn| !dsn.is_empty())
        .map(|dsn| {
            sentry::init((
                dsn,
                sentry::ClientOptions {
                    release: sentry::release_name!(),
                    environment: Some(
                        env::var("APP_ENV")
                            .unwrap_or_else(|_| "development".to_string())
                            .into(),
                    ),
                    sample_rate: 1.0,
                    send_default_pii: false,
                    ..Default::default()
                },
            ))
        });

    let sentry_layer = sentry_guard.as_ref().map(|_| sentry_tracing::layer());

    let installed = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_layer)
        .try_init();

    if installed.is_ok() {
        tracing::info!(sentry = sentry_guard.is_some(), "Matcher client logging initialized");
    }

    sentry_guard
}

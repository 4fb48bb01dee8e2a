//! Structured logging.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// Intended for the binary entry point; library consumers bring their own
/// subscriber. Filter comes from `RUST_LOG`, defaulting to info-level
/// events for this crate.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "groupsync=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem for embedders that want a default setup
//! - Configure log level via environment

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a default tracing subscriber.
///
/// Level comes from `RUST_LOG`, falling back to `rollup_bridge=info`.
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rollup_bridge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

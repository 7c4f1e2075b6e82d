//! Telemetry logic.
//! Console diagnostics only, via `tracing`.

use tracing_subscriber::EnvFilter;

/// Install the stdout tracing subscriber.
///
/// `RUST_LOG` overrides the default `info` level.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

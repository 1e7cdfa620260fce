//! Development-time tracing for the collector and inspector.
//!
//! Tracing is diagnostics only: it goes to stderr and is controlled by
//! `RUST_LOG`. Everything the user is meant to read goes through an
//! [`OutputSink`](crate::io::console::OutputSink).

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=collector=debug cargo run --bin collector
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

//! Diagnostic tracing for the game binary.
//!
//! Output goes to stderr so the prompt and result on stdout stay clean.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Falls back to `default_directive` (the settings file's
/// `log_level`, `warn` unless configured) when it is unset or invalid.
///
/// # Example
/// ```bash
/// RUST_LOG=roshambo=debug cargo run -- --seed 7
/// ```
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

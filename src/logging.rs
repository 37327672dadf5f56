//! Logging setup for the command-line binary.

use tracing_subscriber::EnvFilter;

/// Console logging to stderr so stdout carries only the report.
/// `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

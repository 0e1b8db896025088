//! Tracing subscriber setup.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`, falling back to `default_filter`.
fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Logs to stderr so the board on stdout stays readable.
pub fn init_stderr_tracing(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(std::io::stderr)
        .try_init(); // Don't panic if already initialized
}

/// Logs to `path` to avoid interfering with the TUI.
pub fn init_file_tracing(path: impl AsRef<Path>, default_filter: &str) -> Result<()> {
    let log_file = std::fs::File::create(path.as_ref())
        .with_context(|| format!("Failed to create log file {}", path.as_ref().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

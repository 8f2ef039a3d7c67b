//! Logging initialization

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Initialize logging based on debug flag
///
/// Logs go to a temporary file so they never mix with describe output on
/// stdout. Returns the log file path if debug logging is enabled.
pub fn init_logging(debug: bool) -> Result<Option<PathBuf>> {
    if !debug {
        return Ok(None);
    }

    let (file, path) = tempfile::Builder::new()
        .prefix("kncron-")
        .suffix(".log")
        .tempfile()
        .context("Failed to create log file")?
        .keep()
        .context("Failed to keep log file")?;

    tracing_subscriber::fmt()
        .with_writer(file)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kncron=debug,kube=info")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    Ok(Some(path))
}

//! File-only `tracing` setup. Stdout belongs to the editor, so events are
//! never written to the terminal.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Environment variable naming a log file; overrides the config file.
pub const LOG_ENV_VAR: &str = "TILDE_LOG";

/// Install a subscriber writing to the configured log file, if any.
///
/// Returns the path being logged to.
pub fn init(config: &LogConfig) -> Result<Option<PathBuf>> {
    let Some(path) = std::env::var_os(LOG_ENV_VAR)
        .map(PathBuf::from)
        .or_else(|| config.file.clone())
    else {
        return Ok(None);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&config.level)
        .with_context(|| format!("invalid log level {:?}", config.level))?;

    // A subscriber may already be installed (tests); keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(Some(path))
}

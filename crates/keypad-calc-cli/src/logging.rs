//! Log subscriber setup
//!
//! `RUST_LOG` wins over everything; otherwise the level comes from the
//! configuration and the `-v`/`-q` flags. The interactive keypad owns the
//! terminal, so it only logs when a log file is configured.

use std::fs::OpenOptions;
use std::path::Path;

use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{CalcConfig, ColorChoice};
use crate::error::{CliError, CliResult};

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Standard error
    Stderr,
    /// Appended to a file
    File(&'a Path),
    /// Filter installed, nothing written
    Discard,
}

impl<'a> LogTarget<'a> {
    /// Picks the target for a run
    #[must_use]
    pub fn select(config: &'a CalcConfig, interactive: bool) -> Self {
        match (&config.log_file, interactive) {
            (Some(path), _) => Self::File(path),
            (None, true) => Self::Discard,
            (None, false) => Self::Stderr,
        }
    }
}

/// Filter from `RUST_LOG`, falling back to `level`
#[must_use]
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Installs the global subscriber
pub fn init_logging(config: &CalcConfig, interactive: bool) -> CliResult<()> {
    let filter = build_filter(config.effective_log_level());

    match LogTarget::select(config, interactive) {
        LogTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;

            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false);

            tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .try_init()
                .map_err(|e| CliError::config(format!("cannot install logger: {e}")))?;

            info!(path = %path.display(), "Logging initialized");
        }
        LogTarget::Stderr => {
            let stderr_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(config.color == ColorChoice::Always)
                .with_target(false);

            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .try_init()
                .map_err(|e| CliError::config(format!("cannot install logger: {e}")))?;
        }
        LogTarget::Discard => {
            tracing_subscriber::registry()
                .with(filter)
                .try_init()
                .map_err(|e| CliError::config(format!("cannot install logger: {e}")))?;
        }
    }

    Ok(())
}

//! Tracing subscriber setup
//!
//! `RUST_LOG` wins over the verbosity flags. While the TUI owns the screen,
//! logs go to the log file or nowhere.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, Verbosity};
use crate::error::{CliError, CliResult};

/// Where log output is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// Appended to a file
    File(PathBuf),
    /// Discarded
    Off,
}

impl LogTarget {
    /// Picks the target for a run; `interactive` is true while the TUI is up
    #[must_use]
    pub fn for_run(config: &CliConfig, interactive: bool) -> Self {
        match &config.log_file {
            Some(path) => Self::File(path.clone()),
            None if interactive => Self::Off,
            None => Self::Stderr,
        }
    }
}

/// Filter directives for a verbosity level, scoped to this workspace
#[must_use]
pub fn default_directives(verbosity: Verbosity) -> String {
    let level = verbosity.log_level();
    format!("warn,timber_cubic={level},timber_cubic_cli={level}")
}

fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)))
}

/// Installs the global subscriber
pub fn init_logging(config: &CliConfig, interactive: bool) -> CliResult<()> {
    let filter = env_filter(config.verbosity);

    let result = match LogTarget::for_run(config, interactive) {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| {
                    CliError::config(format!("cannot open log file {}: {e}", path.display()))
                })?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    result.map_err(|e| CliError::config(format!("cannot initialise logging: {e}")))
}

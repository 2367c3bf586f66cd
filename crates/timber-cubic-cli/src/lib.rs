//! Timber Cubic CLI Library
//!
//! Command-line and terminal front end for the Timber Cubic log volume
//! calculator.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
mod runner;

pub use commands::{
    Cli, ColorArg, Commands, ConfigArgs, KeysArgs, OutputFormat, RunArgs, VolumeArgs,
};
pub use config::{CliConfig, ColorChoice, Verbosity, CONFIG_ENV};
pub use error::{CliError, CliResult};
pub use logging::{init_logging, LogTarget};
pub use output::{render_snapshot, render_volume, Printer, VolumeReport};
pub use runner::TuiRunner;

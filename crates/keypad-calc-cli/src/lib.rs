//! Keypad calculator command-line front end
//!
//! Runs the interactive terminal keypad or feeds scripted keys and button
//! labels through the expression builder.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod interactive;
pub mod logging;
pub mod output;
pub mod session;

pub use commands::{Cli, ColorArg, Commands, ConfigArgs, KeysArgs, PressArgs};
pub use config::{CalcConfig, ColorChoice, Verbosity, LOG_LEVELS};
pub use error::{CliError, CliResult};
pub use session::{run_keys, run_labels, SessionOutcome};

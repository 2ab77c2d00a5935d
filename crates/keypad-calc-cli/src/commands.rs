//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Keypad calculator: interactive terminal keypad or scripted key input
#[derive(Parser, Debug)]
#[command(name = "keypad-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// YAML configuration file
    #[arg(short, long, global = true, env = "KEYPAD_CALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (overrides the configuration)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to the interactive keypad)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Subcommand to run, with the interactive keypad as the default
    #[must_use]
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Tui)
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive keypad
    Tui,

    /// Type keyboard characters and print the display
    Keys(KeysArgs),

    /// Press keypad buttons by label and print the display
    Press(PressArgs),

    /// Show the effective configuration
    Config(ConfigArgs),
}

/// Arguments for the keys command
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct KeysArgs {
    /// Characters to type, e.g. "12+7=" (characters without a key are ignored)
    #[arg(allow_hyphen_values = true)]
    pub keys: String,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the press command
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct PressArgs {
    /// Button labels, e.g. 7 + 3 = or AC and +/-
    #[arg(required = true, num_args = 1..)]
    pub labels: Vec<String>,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct ConfigArgs {
    /// Print as JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

//! CLI configuration

use std::path::{Path, PathBuf};

use keypad_calc::core::format::ResultFormat;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - minimal output
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - extra output
    Verbose,
    /// Debug - maximum output
    Debug,
}

impl Verbosity {
    /// Derives the level from `-v` count and `-q`; quiet wins
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => console::Term::stdout().features().colors_supported(),
        }
    }
}

/// Log levels accepted in the configuration file
pub const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Calculator configuration: file settings plus command-line flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Display formatting (`precision`, `error_text`)
    #[serde(flatten)]
    pub format: ResultFormat,
    /// Log level used when `RUST_LOG` is unset and no `-v`/`-q` is given
    pub log_level: String,
    /// Log destination for the interactive keypad
    pub log_file: Option<PathBuf>,
    /// Verbosity from the command line
    #[serde(skip)]
    pub verbosity: Verbosity,
    /// Color choice from the command line
    #[serde(skip)]
    pub color: ColorChoice,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            format: ResultFormat::default(),
            log_level: "warn".to_string(),
            log_file: None,
            verbosity: Verbosity::Normal,
            color: ColorChoice::Auto,
        }
    }
}

impl CalcConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a YAML configuration file
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CliError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&text)
    }

    /// Parses YAML configuration; missing fields keep their defaults
    pub fn from_yaml(text: &str) -> CliResult<Self> {
        let config: Self = if text.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml_ng::from_str(text)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings that cannot be applied
    pub fn validate(&self) -> CliResult<()> {
        if self.format.precision > ResultFormat::MAX_PRECISION {
            return Err(CliError::config(format!(
                "precision {} out of range (expected 0..={})",
                self.format.precision,
                ResultFormat::MAX_PRECISION
            )));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(CliError::config(format!(
                "unknown log_level '{}' (expected one of: {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }

    /// Serializes the file settings as YAML
    pub fn to_yaml(&self) -> CliResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Serializes the file settings as pretty JSON
    pub fn to_json(&self) -> CliResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set result format
    #[must_use]
    pub fn with_format(mut self, format: ResultFormat) -> Self {
        self.format = format;
        self
    }

    /// Set log level
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set log file
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Level handed to the log filter; `-q` and `-v` override the file
    #[must_use]
    pub fn effective_log_level(&self) -> &str {
        match self.verbosity {
            Verbosity::Quiet => "error",
            Verbosity::Normal => self.log_level.as_str(),
            Verbosity::Verbose => "debug",
            Verbosity::Debug => "trace",
        }
    }
}

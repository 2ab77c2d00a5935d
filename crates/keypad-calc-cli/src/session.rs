//! Scripted sessions: feed keys or button labels, report the display

use keypad_calc::builder::{BuilderState, ExpressionBuilder};
use keypad_calc::core::format::ResultFormat;
use keypad_calc::input::Input;
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{CliError, CliResult};

/// Final state of a scripted session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionOutcome {
    /// Display text
    pub display: String,
    /// Expression left in the builder
    pub expression: String,
    /// Whether the display holds a total
    pub total: bool,
    /// Message of the last evaluation failure, if the display shows one
    pub error: Option<String>,
}

impl SessionOutcome {
    fn from_builder(builder: &ExpressionBuilder) -> Self {
        Self {
            display: builder.display().to_string(),
            expression: builder.expression().to_string(),
            total: builder.is_total(),
            error: builder.last_error().map(ToString::to_string),
        }
    }

    /// True when the display shows the error placeholder
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Types `keys` into a fresh calculator; characters without a key are skipped
#[must_use]
pub fn run_keys(format: &ResultFormat, keys: &str) -> SessionOutcome {
    let mut builder = ExpressionBuilder::with_format(format.clone());
    for ch in keys.chars() {
        match Input::from_key_char(ch) {
            Some(input) => builder.press(input),
            None => trace!(?ch, "ignored key"),
        }
    }
    finish(&builder)
}

/// Presses buttons by label. Every label is checked before any is pressed.
pub fn run_labels<S: AsRef<str>>(format: &ResultFormat, labels: &[S]) -> CliResult<SessionOutcome> {
    let inputs = labels
        .iter()
        .map(|label| {
            let label = label.as_ref();
            Input::from_label(label)
                .ok_or_else(|| CliError::invalid_argument(format!("unknown button label '{label}'")))
        })
        .collect::<CliResult<Vec<_>>>()?;

    let mut builder = ExpressionBuilder::with_format(format.clone());
    for input in inputs {
        builder.press(input);
    }
    Ok(finish(&builder))
}

fn finish(builder: &ExpressionBuilder) -> SessionOutcome {
    let outcome = SessionOutcome::from_builder(builder);
    debug!(
        display = %outcome.display,
        total = outcome.total,
        error = builder.state() == BuilderState::ShowingError,
        "session finished"
    );
    outcome
}

//! Display formatting for evaluation results

use serde::{Deserialize, Serialize};

/// How totals and failures are rendered in the display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultFormat {
    /// Fractional digits kept before trailing zeros are stripped
    pub precision: usize,
    /// Text shown after a failed evaluation
    pub error_text: String,
}

impl Default for ResultFormat {
    fn default() -> Self {
        Self {
            precision: Self::DEFAULT_PRECISION,
            error_text: Self::DEFAULT_ERROR_TEXT.to_string(),
        }
    }
}

impl ResultFormat {
    /// Fractional digits used when nothing is configured
    pub const DEFAULT_PRECISION: usize = 15;
    /// Error placeholder used when nothing is configured
    pub const DEFAULT_ERROR_TEXT: &'static str = " NaN ";
    /// Largest precision that still yields meaningful `f64` digits
    pub const MAX_PRECISION: usize = 17;

    /// Creates the default format
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fractional precision
    #[must_use]
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the error placeholder
    #[must_use]
    pub fn with_error_text(mut self, text: impl Into<String>) -> Self {
        self.error_text = text.into();
        self
    }

    /// Formats a total: fixed precision, then trailing zeros and a dangling
    /// decimal point removed. Negative zero shows as `0`. Precision above
    /// [`Self::MAX_PRECISION`] is clamped.
    #[must_use]
    pub fn format_total(&self, value: f64) -> String {
        let precision = self.precision.min(Self::MAX_PRECISION);
        let fixed = format!("{value:.precision$}");
        let trimmed = if fixed.contains('.') {
            let no_zeros = fixed.trim_end_matches('0');
            no_zeros.strip_suffix('.').unwrap_or(no_zeros)
        } else {
            fixed.as_str()
        };

        if trimmed == "-0" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

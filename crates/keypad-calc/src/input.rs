//! Symbolic calculator inputs and their keyboard / keypad spellings

use serde::{Deserialize, Serialize};

use crate::core::Operation;

/// One discrete press the expression builder understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// Digit 0-9
    Digit(u8),
    /// Binary operator
    Operator(Operation),
    /// Decimal point
    Decimal,
    /// Toggle the sign of the number being entered
    Negate,
    /// Reset everything
    Clear,
    /// Compute the total
    Evaluate,
}

impl Input {
    /// Label of the clear button
    pub const CLEAR_LABEL: &'static str = "AC";
    /// Label of the sign-toggle button
    pub const NEGATE_LABEL: &'static str = "+/-";

    /// Maps a typed character. Digits, operators, `.` and `=` are understood;
    /// every other character is ignored.
    #[must_use]
    pub fn from_key_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => ch.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Evaluate),
            _ => Operation::from_symbol(ch).map(Self::Operator),
        }
    }

    /// Maps a keypad button label such as `"7"`, `"AC"` or `"+/-"`
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            Self::CLEAR_LABEL => Some(Self::Clear),
            Self::NEGATE_LABEL => Some(Self::Negate),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::from_key_char(ch),
                    _ => None,
                }
            }
        }
    }

    /// Keypad label for this input
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Decimal => ".".to_string(),
            Self::Negate => Self::NEGATE_LABEL.to_string(),
            Self::Clear => Self::CLEAR_LABEL.to_string(),
            Self::Evaluate => "=".to_string(),
        }
    }
}

//! Binary operators and their arithmetic

use serde::{Deserialize, Serialize};

use crate::core::{EvalError, EvalResult};

/// The five keypad operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-), also the unary sign
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Floored modulo (%)
    Modulo,
}

impl Operation {
    /// All operators in keypad order
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
    ];

    /// Returns the operator character
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Modulo => '%',
        }
    }

    /// Parses an operator character
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '%' => Some(Self::Modulo),
            _ => None,
        }
    }

    /// Returns true if `ch` is one of `+ - * / %`
    #[must_use]
    pub const fn is_symbol(ch: char) -> bool {
        Self::from_symbol(ch).is_some()
    }

    /// Binding strength (higher binds tighter)
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide | Self::Modulo => 2,
        }
    }

    /// Applies the operator to two operands
    pub fn apply(self, a: f64, b: f64) -> EvalResult<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                a / b
            }
            Self::Modulo => {
                if b == 0.0 {
                    return Err(EvalError::ModuloByZero);
                }
                floored_rem(a, b)
            }
        };
        check_finite(result)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Remainder carrying the sign of the divisor
fn floored_rem(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

pub(crate) fn check_finite(value: f64) -> EvalResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite)
    }
}

//! Arithmetic core: tokenizer, parser, evaluator and result formatting
//!
//! Only `+ - * / %` over decimal literals are understood. Every failure is an
//! [`EvalError`]; callers decide how to surface it.

pub mod evaluator;
pub mod format;
mod operations;
pub mod parser;

pub use operations::Operation;

use thiserror::Error;

/// Result type for evaluation
pub type EvalResult<T> = Result<T, EvalError>;

/// Reasons an expression cannot be reduced to a finite number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Nothing to evaluate
    #[error("Empty expression")]
    Empty,
    /// Character outside the calculator alphabet
    #[error("Unexpected character '{ch}' at position {pos}")]
    UnexpectedChar {
        /// Offending character
        ch: char,
        /// Byte offset in the input
        pos: usize,
    },
    /// Literal that does not parse as a number (e.g. a lone `.`)
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),
    /// Token in a position the grammar does not allow
    #[error("Unexpected token: {0}")]
    UnexpectedToken(String),
    /// Input ended where an operand was required
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    /// Division with a zero divisor
    #[error("Division by zero")]
    DivisionByZero,
    /// Modulo with a zero divisor
    #[error("Modulo by zero")]
    ModuloByZero,
    /// Intermediate or final result is NaN or infinite
    #[error("Result is not a finite number")]
    NonFinite,
}

impl EvalError {
    /// Returns true for errors caused by malformed input rather than arithmetic
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(
            self,
            Self::Empty
                | Self::UnexpectedChar { .. }
                | Self::InvalidNumber(_)
                | Self::UnexpectedToken(_)
                | Self::UnexpectedEnd
        )
    }
}

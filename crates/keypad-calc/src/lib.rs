//! Keypad Calculator
//!
//! A pocket-calculator model: keypad presses build an arithmetic expression,
//! `=` replaces it with the formatted total, and evaluation failures reset the
//! expression while the display shows an error placeholder.
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut calc = ExpressionBuilder::new();
//! for input in [Input::Digit(5), Input::Operator(Operation::Divide), Input::Digit(2)] {
//!     calc.press(input);
//! }
//! calc.evaluate();
//! assert_eq!(calc.display(), "2.5");
//! assert!(calc.is_total());
//!
//! calc.press(Input::Operator(Operation::Modulo));
//! calc.press(Input::Digit(0));
//! calc.evaluate();
//! assert_eq!(calc.display(), " NaN ");
//! assert_eq!(calc.expression(), "");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod builder;
pub mod core;
pub mod driver;
pub mod input;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::builder::{BuilderState, ExpressionBuilder};
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::format::ResultFormat;
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{EvalError, EvalResult, Operation};
    pub use crate::driver::{BuilderDriver, CalculatorDriver};
    pub use crate::input::Input;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_evaluator() {
        assert_eq!(Evaluator::new().evaluate_str("2+3*4"), Ok(14.0));
    }

    #[test]
    fn test_prelude_builder_round() {
        let mut calc = ExpressionBuilder::new();
        for ch in "2/3=".chars() {
            if let Some(input) = Input::from_key_char(ch) {
                calc.press(input);
            }
        }
        assert_eq!(calc.display(), "0.666666666666667");
        assert_eq!(calc.state(), BuilderState::ShowingTotal);
    }

    #[test]
    fn test_prelude_driver() {
        let mut driver = BuilderDriver::new();
        driver.type_keys("7*6=");
        assert_eq!(driver.display(), "42");
    }
}

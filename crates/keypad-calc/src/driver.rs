//! Unified calculator driver
//!
//! Scenario logic is written once against [`CalculatorDriver`] and run
//! against every front end: the bare [`ExpressionBuilder`] and, with the
//! `tui` feature, the terminal app fed through real key events.

use crate::builder::ExpressionBuilder;
use crate::core::format::ResultFormat;
use crate::core::Operation;
use crate::input::Input;

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use keypad_calc::driver::{verify_totals, BuilderDriver};
///
/// let mut driver = BuilderDriver::new();
/// verify_totals(&mut driver);
/// ```
pub trait CalculatorDriver {
    /// Feeds one input
    fn press(&mut self, input: Input);

    /// Text in the display field
    fn display(&self) -> String;

    /// Expression held by the calculator
    fn expression(&self) -> String;

    /// Whether the expression is an unextended total
    fn is_total(&self) -> bool;

    /// Resets the calculator
    fn clear(&mut self) {
        self.press(Input::Clear);
    }

    /// Feeds several inputs in order
    fn press_all(&mut self, inputs: &[Input]) {
        for &input in inputs {
            self.press(input);
        }
    }

    /// Feeds typed characters; characters without a mapping are skipped
    fn type_keys(&mut self, keys: &str) {
        for input in keys.chars().filter_map(Input::from_key_char) {
            self.press(input);
        }
    }
}

/// Drives an [`ExpressionBuilder`] directly
#[derive(Debug, Default)]
pub struct BuilderDriver {
    builder: ExpressionBuilder,
}

impl BuilderDriver {
    /// Creates a driver over a fresh builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver with a custom result format
    #[must_use]
    pub fn with_format(format: ResultFormat) -> Self {
        Self {
            builder: ExpressionBuilder::with_format(format),
        }
    }

    /// Underlying builder
    #[must_use]
    pub const fn builder(&self) -> &ExpressionBuilder {
        &self.builder
    }
}

impl CalculatorDriver for BuilderDriver {
    fn press(&mut self, input: Input) {
        self.builder.press(input);
    }

    fn display(&self) -> String {
        self.builder.display().to_string()
    }

    fn expression(&self) -> String {
        self.builder.expression().to_string()
    }

    fn is_total(&self) -> bool {
        self.builder.is_total()
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::CalculatorDriver;
    use crate::input::Input;
    use crate::tui::{CalculatorApp, InputHandler};

    /// Drives a [`CalculatorApp`] through the same key events a terminal sends
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
        handler: InputHandler,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self {
                app,
                handler: InputHandler::new(),
            }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub const fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }

        /// Key event that produces `input`
        #[must_use]
        pub fn key_for(input: Input) -> KeyEvent {
            let code = match input {
                Input::Digit(d) => KeyCode::Char(char::from(b'0' + d.min(9))),
                Input::Operator(op) => KeyCode::Char(op.symbol()),
                Input::Decimal => KeyCode::Char('.'),
                Input::Negate => KeyCode::Char(InputHandler::NEGATE_KEY),
                Input::Clear => KeyCode::Esc,
                Input::Evaluate => KeyCode::Enter,
            };
            KeyEvent::new(code, KeyModifiers::NONE)
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, input: Input) {
            let action = self.handler.handle_key(Self::key_for(input));
            self.app.handle_action(action);
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn expression(&self) -> String {
            self.app.builder().expression().to_string()
        }

        fn is_total(&self) -> bool {
            self.app.builder().is_total()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared scenarios =====
// Each one starts from a cleared calculator and works with any driver.

/// Digit-only input concatenates
pub fn verify_digit_concatenation<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_keys("1234567890");
    assert_eq!(driver.expression(), "1234567890");
    assert_eq!(driver.display(), "1234567890");
    assert!(!driver.is_total());
}

/// A second decimal point in the same number is ignored
pub fn verify_decimal_idempotence<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_keys("3..");
    assert_eq!(driver.expression(), "3.");

    driver.clear();
    driver.type_keys("3.3+6..");
    assert_eq!(driver.expression(), "3.3+6.");

    driver.clear();
    driver.type_keys(".");
    assert_eq!(driver.expression(), "0.");
}

/// Evaluating nothing leaves everything as it was
pub fn verify_empty_evaluate<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press(Input::Evaluate);
    assert_eq!(driver.expression(), "");
    assert_eq!(driver.display(), "");
    assert!(!driver.is_total());
}

/// Successful evaluations show formatted totals
pub fn verify_totals<D: CalculatorDriver>(driver: &mut D) {
    for (keys, total) in [
        ("3+3=", "6"),
        ("5/2=", "2.5"),
        ("2/3=", "0.666666666666667"),
        ("2+3*4=", "14"),
        ("17%5=", "2"),
    ] {
        driver.clear();
        driver.type_keys(keys);
        assert_eq!(driver.display(), total, "keys {keys}");
        assert_eq!(driver.expression(), total, "keys {keys}");
        assert!(driver.is_total(), "keys {keys}");
    }
}

/// Failed evaluations reset the expression and show the placeholder
pub fn verify_error_recovery<D: CalculatorDriver>(driver: &mut D) {
    for keys in ["2/0=", "2%0=", "2+="] {
        driver.clear();
        driver.type_keys(keys);
        assert_eq!(driver.expression(), "", "keys {keys}");
        assert_eq!(driver.display(), ResultFormat::DEFAULT_ERROR_TEXT, "keys {keys}");
        assert!(!driver.is_total(), "keys {keys}");
    }

    driver.type_keys("4");
    assert_eq!(driver.display(), "4");
}

/// Sign toggling on numbers, on a reserved sign and after a subtraction
pub fn verify_negate<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press(Input::Negate);
    assert_eq!(driver.expression(), "-");
    driver.press(Input::Negate);
    assert_eq!(driver.expression(), "");

    driver.type_keys("3");
    driver.press(Input::Negate);
    assert_eq!(driver.expression(), "-3");
    driver.press(Input::Negate);
    assert_eq!(driver.expression(), "3");

    driver.type_keys(".5");
    driver.press(Input::Negate);
    assert_eq!(driver.expression(), "-3.5");

    driver.clear();
    driver.type_keys("1+1");
    driver.press(Input::Negate);
    assert_eq!(driver.expression(), "1+-1");
    driver.press(Input::Evaluate);
    assert_eq!(driver.display(), "0");

    driver.clear();
    driver.type_keys("5-3");
    driver.press(Input::Negate);
    assert_eq!(driver.expression(), "53");
}

/// After a total a digit starts over while an operator extends it
pub fn verify_total_continuation<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_keys("3+3=");
    driver.type_keys("7");
    assert_eq!(driver.expression(), "7");
    assert!(!driver.is_total());

    driver.clear();
    driver.type_keys("3+3=");
    driver.press(Input::Operator(Operation::Multiply));
    assert_eq!(driver.expression(), "6*");
    driver.type_keys("2=");
    assert_eq!(driver.display(), "12");

    driver.press(Input::Decimal);
    assert_eq!(driver.expression(), "0.");
}

/// An operator typed over a trailing operator replaces it, keeping a sign
pub fn verify_change_operator<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.type_keys("3+*");
    assert_eq!(driver.expression(), "3*");

    driver.clear();
    driver.type_keys("3+");
    driver.press(Input::Negate);
    driver.type_keys("*");
    assert_eq!(driver.expression(), "3*-");

    driver.type_keys("2=");
    assert_eq!(driver.display(), "-6");
}

/// Runs every scenario
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_concatenation(driver);
    verify_decimal_idempotence(driver);
    verify_empty_evaluate(driver);
    verify_totals(driver);
    verify_error_recovery(driver);
    verify_negate(driver);
    verify_total_continuation(driver);
    verify_change_operator(driver);
}

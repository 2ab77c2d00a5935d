//! Expression builder: the calculator's only stateful component
//!
//! Turns keypad presses into an arithmetic string and, on evaluate, replaces
//! it with the formatted total. Evaluation failures never escape: the
//! expression is reset and the display shows the error placeholder.

use tracing::{debug, trace};

use crate::core::evaluator::Evaluator;
use crate::core::format::ResultFormat;
use crate::core::{EvalError, Operation};
use crate::input::Input;

/// Coarse state derived from the builder's fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    /// Nothing entered
    Empty,
    /// Last character is a digit or decimal point
    BuildingNumber,
    /// Last character is an operator (binary or unary minus)
    TrailingOperator,
    /// Display holds a total that has not been extended yet
    ShowingTotal,
    /// Last evaluation failed; display holds the error placeholder
    ShowingError,
}

/// Owns the expression, the display text and the total flag
#[derive(Debug, Clone)]
pub struct ExpressionBuilder {
    expression: String,
    display: String,
    total: bool,
    last_error: Option<EvalError>,
    format: ResultFormat,
    evaluator: Evaluator,
}

impl Default for ExpressionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionBuilder {
    /// Creates an empty builder with the default result format
    #[must_use]
    pub fn new() -> Self {
        Self::with_format(ResultFormat::default())
    }

    /// Creates an empty builder with a custom result format
    #[must_use]
    pub fn with_format(format: ResultFormat) -> Self {
        Self {
            expression: String::new(),
            display: String::new(),
            total: false,
            last_error: None,
            format,
            evaluator: Evaluator::new(),
        }
    }

    /// Creates a builder already holding `expression` (not a total)
    #[must_use]
    pub fn from_expression(expression: impl Into<String>) -> Self {
        let mut builder = Self::new();
        builder.expression = expression.into();
        builder.sync_display();
        builder
    }

    /// Creates a builder showing `total` as the result of a prior evaluation
    #[must_use]
    pub fn from_total(total: impl Into<String>) -> Self {
        let mut builder = Self::from_expression(total);
        builder.total = true;
        builder
    }

    /// Current expression
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Text for the display field
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// True while the expression is an unextended total
    #[must_use]
    pub const fn is_total(&self) -> bool {
        self.total
    }

    /// Error from the most recent failed evaluation, until the next edit
    #[must_use]
    pub const fn last_error(&self) -> Option<&EvalError> {
        self.last_error.as_ref()
    }

    /// Result format in use
    #[must_use]
    pub const fn format(&self) -> &ResultFormat {
        &self.format
    }

    /// Derives the current state
    #[must_use]
    pub fn state(&self) -> BuilderState {
        if self.total {
            BuilderState::ShowingTotal
        } else if self.last_error.is_some() {
            BuilderState::ShowingError
        } else if self.expression.is_empty() {
            BuilderState::Empty
        } else if self.ends_with_operator() {
            BuilderState::TrailingOperator
        } else {
            BuilderState::BuildingNumber
        }
    }

    /// Dispatches one input
    pub fn press(&mut self, input: Input) {
        trace!(?input, expression = %self.expression, "press");
        match input {
            Input::Digit(d) => self.append_digit(d),
            Input::Operator(op) => self.append_operator(op),
            Input::Decimal => self.append_decimal(),
            Input::Negate => self.negate(),
            Input::Clear => self.clear(),
            Input::Evaluate => self.evaluate(),
        }
    }

    /// Appends a digit; a showing total is discarded first. Values above 9 are ignored.
    pub fn append_digit(&mut self, digit: u8) {
        if digit > 9 {
            return;
        }
        self.reset_if_total();
        self.expression.push(char::from(b'0' + digit));
        self.sync_display();
    }

    /// Appends a decimal point, or `0.` when no number has been started.
    /// A second point in the same number is ignored.
    pub fn append_decimal(&mut self) {
        self.reset_if_total();
        if self.expression.is_empty() || self.ends_with_operator() {
            self.expression.push_str("0.");
        } else if !self.current_number().contains('.') {
            self.expression.push('.');
        }
        self.sync_display();
    }

    /// Appends an operator, replacing a trailing one. A showing total is
    /// kept and becomes the left operand.
    pub fn append_operator(&mut self, op: Operation) {
        self.total = false;

        let needs_zero = (self.expression.is_empty() && op != Operation::Subtract)
            || self.expression == "."
            || self.expression == "-";
        if needs_zero {
            self.expression.clear();
            self.expression.push('0');
        }

        if self.ends_with_operator() {
            self.change_operator(op);
        } else {
            self.expression.push(op.symbol());
            self.sync_display();
        }
    }

    /// Replaces the trailing operator. In a trailing `<op>-` pair the minus
    /// is a sign, so the binary operator before it is the one replaced.
    pub fn change_operator(&mut self, op: Operation) {
        let bytes = self.expression.as_bytes();
        let len = bytes.len();
        let symbol = op.symbol().to_string();

        if len >= 2 && bytes[len - 1] == b'-' && Operation::is_symbol(char::from(bytes[len - 2])) {
            self.expression.replace_range(len - 2..len - 1, &symbol);
        } else if len >= 1 {
            self.expression.replace_range(len - 1..len, &symbol);
        } else {
            self.expression.push_str(&symbol);
        }
        self.sync_display();
    }

    /// Toggles the sign of the number being entered.
    ///
    /// After a non-minus operator (or on an empty expression) a sign is
    /// reserved for the next number. Otherwise the boundary is the trailing
    /// minus, or the start of the trailing digit/decimal run. When the
    /// boundary and the character before it are both minus, or neither is, a
    /// minus is inserted at the boundary. When only one is a minus, that
    /// minus is removed, even if it was a subtraction.
    pub fn negate(&mut self) {
        let bytes = self.expression.as_bytes();
        let Some(&last) = bytes.last() else {
            self.expression.push('-');
            self.sync_display();
            return;
        };

        if last != b'-' && Operation::is_symbol(char::from(last)) {
            self.expression.push('-');
            self.sync_display();
            return;
        }

        let boundary = if last == b'-' {
            bytes.len() - 1
        } else {
            self.number_start()
        };
        let at_minus = bytes[boundary] == b'-';
        let before_minus = boundary > 0 && bytes[boundary - 1] == b'-';

        match (at_minus, before_minus) {
            (true, false) => self.expression.truncate(boundary),
            (false, true) => {
                self.expression.remove(boundary - 1);
            }
            _ => self.expression.insert(boundary, '-'),
        }
        self.sync_display();
    }

    /// Empties the expression and display and drops the total flag
    pub fn clear(&mut self) {
        self.expression.clear();
        self.display.clear();
        self.total = false;
        self.last_error = None;
    }

    /// Computes the total. Does nothing on an empty expression.
    pub fn evaluate(&mut self) {
        if self.expression.is_empty() {
            return;
        }

        match self.evaluator.evaluate_str(&self.expression) {
            Ok(value) => {
                let total = self.format.format_total(value);
                debug!(expression = %self.expression, %total, "evaluated");
                self.expression = total;
                self.sync_display();
                self.total = true;
            }
            Err(err) => {
                debug!(expression = %self.expression, error = %err, "evaluation failed");
                self.expression.clear();
                self.display.clone_from(&self.format.error_text);
                self.total = false;
                self.last_error = Some(err);
            }
        }
    }

    fn reset_if_total(&mut self) {
        if self.total {
            self.expression.clear();
            self.total = false;
        }
    }

    fn sync_display(&mut self) {
        self.display.clone_from(&self.expression);
        self.last_error = None;
    }

    fn ends_with_operator(&self) -> bool {
        self.expression.chars().last().is_some_and(Operation::is_symbol)
    }

    /// Byte index where the trailing digit/decimal run begins
    fn number_start(&self) -> usize {
        self.expression
            .rfind(Operation::is_symbol)
            .map_or(0, |i| i + 1)
    }

    /// Trailing digit/decimal run
    fn current_number(&self) -> &str {
        &self.expression[self.number_start()..]
    }
}

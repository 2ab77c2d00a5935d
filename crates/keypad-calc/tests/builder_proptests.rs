//! Property-based tests for the expression builder

#![allow(clippy::unwrap_used)]

use keypad_calc::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn operator_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
        Just(Operation::Modulo),
    ]
}

fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        4 => digit_strategy().prop_map(Input::Digit),
        2 => operator_strategy().prop_map(Input::Operator),
        1 => Just(Input::Decimal),
        1 => Just(Input::Negate),
        1 => Just(Input::Evaluate),
        1 => Just(Input::Clear),
    ]
}

/// Inputs that never type a binary minus; negate only adds signs after operators
fn no_subtraction_input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        4 => digit_strategy().prop_map(Input::Digit),
        2 => prop_oneof![
            Just(Operation::Add),
            Just(Operation::Multiply),
            Just(Operation::Divide),
            Just(Operation::Modulo),
        ]
        .prop_map(Input::Operator),
        1 => Just(Input::Decimal),
        1 => Just(Input::Negate),
        1 => Just(Input::Evaluate),
        1 => Just(Input::Clear),
    ]
}

fn builder_after(inputs: &[Input]) -> ExpressionBuilder {
    let mut builder = ExpressionBuilder::new();
    for &input in inputs {
        builder.press(input);
    }
    builder
}

// ===== Properties =====

proptest! {
    /// Digit-only sequences concatenate
    #[test]
    fn prop_digits_concatenate(digits in prop::collection::vec(digit_strategy(), 1..20)) {
        let inputs: Vec<Input> = digits.iter().copied().map(Input::Digit).collect();
        let builder = builder_after(&inputs);

        let expected: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        prop_assert_eq!(builder.expression(), expected.as_str());
        prop_assert_eq!(builder.display(), expected.as_str());
        prop_assert!(!builder.is_total());
    }

    /// A second decimal point never changes anything
    #[test]
    fn prop_decimal_is_idempotent(inputs in prop::collection::vec(input_strategy(), 0..30)) {
        let mut builder = builder_after(&inputs);
        builder.append_decimal();
        let once = builder.expression().to_string();
        builder.append_decimal();
        prop_assert_eq!(builder.expression(), once.as_str());
    }

    /// Evaluating an empty expression leaves every field alone
    #[test]
    fn prop_empty_evaluate_is_noop(inputs in prop::collection::vec(input_strategy(), 0..30)) {
        let mut builder = builder_after(&inputs);
        builder.clear();
        builder.evaluate();
        prop_assert_eq!(builder.expression(), "");
        prop_assert_eq!(builder.display(), "");
        prop_assert!(!builder.is_total());
    }

    /// The display mirrors the expression, except for the error placeholder
    #[test]
    fn prop_display_tracks_expression(inputs in prop::collection::vec(input_strategy(), 0..40)) {
        let builder = builder_after(&inputs);
        if builder.state() == BuilderState::ShowingError {
            prop_assert_eq!(builder.expression(), "");
            prop_assert_eq!(builder.display(), ResultFormat::DEFAULT_ERROR_TEXT);
        } else {
            prop_assert_eq!(builder.display(), builder.expression());
        }
    }

    /// A total is always a plain finite decimal
    #[test]
    fn prop_total_is_a_number(inputs in prop::collection::vec(input_strategy(), 0..40)) {
        let mut builder = builder_after(&inputs);
        builder.evaluate();
        if builder.is_total() {
            let value: f64 = builder.expression().parse().unwrap();
            prop_assert!(value.is_finite());
            prop_assert!(!builder.expression().contains('e'));
            prop_assert_ne!(builder.expression(), "-0");
        }
    }

    /// A digit after a total starts a fresh expression
    #[test]
    fn prop_digit_after_total_starts_fresh(
        a in 0u32..1000,
        b in 1u32..1000,
        op in operator_strategy(),
        d in digit_strategy(),
    ) {
        let mut builder = ExpressionBuilder::new();
        for ch in format!("{a}{}{b}=", op.symbol()).chars() {
            if let Some(input) = Input::from_key_char(ch) {
                builder.press(input);
            }
        }
        prop_assert!(builder.is_total());

        builder.append_digit(d);
        let expected = char::from(b'0' + d).to_string();
        prop_assert_eq!(builder.expression(), expected.as_str());
        prop_assert!(!builder.is_total());
    }

    /// An operator after a total extends it
    #[test]
    fn prop_operator_after_total_extends(a in 0u32..1000, b in 0u32..1000, op in operator_strategy()) {
        let mut builder = ExpressionBuilder::new();
        for ch in format!("{a}+{b}=").chars() {
            if let Some(input) = Input::from_key_char(ch) {
                builder.press(input);
            }
        }
        let total = builder.expression().to_string();
        let expected_total = (a + b).to_string();
        prop_assert_eq!(total.as_str(), expected_total.as_str());

        builder.append_operator(op);
        let expected_expr = format!("{total}{}", op.symbol());
        prop_assert_eq!(builder.expression(), expected_expr.as_str());
        prop_assert!(!builder.is_total());
    }

    /// Without subtraction, toggling the sign twice restores the expression
    #[test]
    fn prop_negate_twice_is_identity(inputs in prop::collection::vec(no_subtraction_input_strategy(), 0..30)) {
        let mut builder = builder_after(&inputs);
        let before = builder.expression().to_string();
        builder.negate();
        builder.negate();
        prop_assert_eq!(builder.expression(), before.as_str());
    }

    /// Clear always returns to the empty state
    #[test]
    fn prop_clear_resets(inputs in prop::collection::vec(input_strategy(), 0..30)) {
        let mut builder = builder_after(&inputs);
        builder.clear();
        prop_assert_eq!(builder.state(), BuilderState::Empty);
        prop_assert!(builder.last_error().is_none());
    }

    /// Any key sequence the keyboard can produce is handled without panicking
    #[test]
    fn prop_arbitrary_keys(keys in "[0-9+*/%.=~a-z -]{0,40}") {
        let mut builder = ExpressionBuilder::new();
        for input in keys.chars().filter_map(Input::from_key_char) {
            builder.press(input);
        }
        let _ = builder.state();
    }
}

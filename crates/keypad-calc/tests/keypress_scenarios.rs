//! Button and keyboard scenarios run against every driver

use keypad_calc::driver::{run_all_scenarios, BuilderDriver, CalculatorDriver};
use keypad_calc::prelude::*;

fn press_labels<D: CalculatorDriver>(driver: &mut D, labels: &[&str]) {
    for label in labels {
        let input = Input::from_label(label).unwrap_or_else(|| panic!("unknown label {label}"));
        driver.press(input);
    }
}

/// Button presses on a fresh calculator and the expected display afterwards
const BUTTON_SCENARIOS: &[(&[&str], &str)] = &[
    (&["1", "+", "1", "="], "2"),
    (&["1", "+", "1", "AC"], ""),
    (&["1", "+", "1", "+/-"], "1+-1"),
    (&["1", "+", "3"], "1+3"),
    (&["1", "/"], "1/"),
    (&["/"], "0/"),
    (&["-"], "-"),
    (&["."], "0."),
    (&["3", "+", "."], "3+0."),
    (&["3", "+", "+/-", "."], "3+-0."),
    (&["3", "+", "+/-", "*"], "3*-"),
    (&["3", "+", "+/-", "-", "*"], "3*-"),
    (&["3", "-", "+/-"], "3"),
    (&["5", "-", "3", "+/-"], "53"),
    (&["3", "+", "+/-", "-"], "3--"),
    (&["+/-", "+/-"], ""),
    (&["9", "%", "4", "="], "1"),
    (&["7", "+/-", "%", "3", "="], "2"),
    (&["1", "0", "/", "4", "="], "2.5"),
    (&["1", "/", "0", "="], " NaN "),
    (&["4", "*", "="], " NaN "),
    (&["3", "+", "3", "=", "5"], "5"),
    (&["3", "+", "3", "=", "-", "1", "="], "5"),
    (&["3", "+", "3", "=", "."], "0."),
    (&["3", "+", "3", "=", "+/-"], "-6"),
    (&["1", "/", "0", "=", "2"], "2"),
    (&["0", "0", "7", "+", "1", "="], "8"),
    (&["0", "*", "+/-", "1", "="], "0"),
];

fn check_button_scenarios<D: CalculatorDriver>(mut make: impl FnMut() -> D) {
    for (labels, expected) in BUTTON_SCENARIOS {
        let mut driver = make();
        press_labels(&mut driver, labels);
        assert_eq!(driver.display(), *expected, "buttons {labels:?}");
    }
}

#[test]
fn test_button_scenarios_builder() {
    check_button_scenarios(BuilderDriver::new);
}

#[cfg(feature = "tui")]
#[test]
fn test_button_scenarios_tui() {
    check_button_scenarios(TuiDriver::new);
}

#[test]
fn test_all_scenarios_builder() {
    run_all_scenarios(&mut BuilderDriver::new());
}

#[cfg(feature = "tui")]
#[test]
fn test_all_scenarios_tui() {
    run_all_scenarios(&mut TuiDriver::new());
}

#[test]
fn test_keyboard_ignores_unmapped_characters() {
    let mut driver = BuilderDriver::new();
    driver.type_keys("12 apples + 3 pears =");
    assert_eq!(driver.display(), "15");
}

#[test]
fn test_negated_total_keeps_total_flag() {
    let mut driver = BuilderDriver::new();
    press_labels(&mut driver, &["3", "+", "3", "=", "+/-"]);
    assert!(driver.is_total());

    press_labels(&mut driver, &["1"]);
    assert_eq!(driver.display(), "1");
}

#[test]
fn test_chained_totals() {
    let mut driver = BuilderDriver::new();
    driver.type_keys("2*3=*4=-4=/5=");
    assert_eq!(driver.display(), "4");
    assert!(driver.is_total());
}

#[test]
fn test_decimal_arithmetic() {
    let mut driver = BuilderDriver::new();
    driver.type_keys(".1+.2=");
    assert_eq!(driver.display(), "0.3");
}

#[test]
fn test_precision_from_format() {
    let mut driver = BuilderDriver::with_format(ResultFormat::new().with_precision(4));
    driver.type_keys("1/7=");
    assert_eq!(driver.display(), "0.1429");
}

//! Terminal front end: keypad, key bindings and rendering

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{render, CalculatorLayout, CalculatorUI, HELP_SHORTCUTS, TITLE};

//! TUI application state

use ratatui::layout::Rect;
use tracing::trace;

use crate::builder::{BuilderState, ExpressionBuilder};
use crate::core::format::ResultFormat;
use crate::input::Input;

use super::input::KeyAction;
use super::keypad::Keypad;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    builder: ExpressionBuilder,
    keypad: Keypad,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates an app with the default result format
    #[must_use]
    pub fn new() -> Self {
        Self::with_format(ResultFormat::default())
    }

    /// Creates an app with a custom result format
    #[must_use]
    pub fn with_format(format: ResultFormat) -> Self {
        Self {
            builder: ExpressionBuilder::with_format(format),
            keypad: Keypad::new(),
            should_quit: false,
        }
    }

    /// Expression builder
    #[must_use]
    pub const fn builder(&self) -> &ExpressionBuilder {
        &self.builder
    }

    /// On-screen keypad
    #[must_use]
    pub const fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Text for the display field
    #[must_use]
    pub fn display(&self) -> &str {
        self.builder.display()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Feeds one input and lights the matching button
    pub fn apply(&mut self, input: Input) {
        self.builder.press(input);
        self.keypad.highlight(input);
    }

    /// Applies a keyboard action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(input) => self.apply(input),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Presses the button under (x, y) when the keypad was drawn in `area`
    pub fn click(&mut self, area: Rect, x: u16, y: u16) -> Option<Input> {
        let input = self
            .keypad
            .hit_test(area, x, y)
            .and_then(|idx| self.keypad.get_button(idx))
            .map(|btn| btn.input)?;
        trace!(x, y, ?input, "keypad click");
        self.apply(input);
        Some(input)
    }

    /// One-line description of the builder state
    #[must_use]
    pub fn status_line(&self) -> String {
        match self.builder.state() {
            BuilderState::Empty => "Ready".to_string(),
            BuilderState::BuildingNumber => "Entering number".to_string(),
            BuilderState::TrailingOperator => "Waiting for operand".to_string(),
            BuilderState::ShowingTotal => "Total".to_string(),
            BuilderState::ShowingError => self
                .builder
                .last_error()
                .map_or_else(|| "Error".to_string(), |e| format!("Error: {e}")),
        }
    }

    /// True when the display holds the error placeholder
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.builder.state() == BuilderState::ShowingError
    }
}

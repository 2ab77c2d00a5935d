//! On-screen keypad
//!
//! ```text
//! [AC ] [+/-] [ % ] [ / ]
//! [ 7 ] [ 8 ] [ 9 ] [ * ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [    0    ] [ . ] [ = ]
//! ```
//! Buttons can be clicked with the mouse and light up when the matching key
//! is typed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::Operation;
use crate::input::Input;

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Input sent when the button is pressed
    pub input: Input,
    /// Grid row
    pub row: usize,
    /// First grid column
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
    /// Highlighted after the last press
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a one-column button
    #[must_use]
    pub const fn new(input: Input, row: usize, col: usize) -> Self {
        Self {
            input,
            row,
            col,
            span: 1,
            pressed: false,
        }
    }

    /// Widens the button to cover `span` columns
    #[must_use]
    pub const fn spanning(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    /// Text printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.input.label()
    }

    /// Returns true if the button covers grid cell (row, col)
    #[must_use]
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }
}

/// Keypad grid, 5 rows by 4 columns
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        use Input::{Clear, Decimal, Digit, Evaluate, Negate};
        let op = Input::Operator;

        let buttons = vec![
            KeypadButton::new(Clear, 0, 0),
            KeypadButton::new(Negate, 0, 1),
            KeypadButton::new(op(Operation::Modulo), 0, 2),
            KeypadButton::new(op(Operation::Divide), 0, 3),
            KeypadButton::new(Digit(7), 1, 0),
            KeypadButton::new(Digit(8), 1, 1),
            KeypadButton::new(Digit(9), 1, 2),
            KeypadButton::new(op(Operation::Multiply), 1, 3),
            KeypadButton::new(Digit(4), 2, 0),
            KeypadButton::new(Digit(5), 2, 1),
            KeypadButton::new(Digit(6), 2, 2),
            KeypadButton::new(op(Operation::Subtract), 2, 3),
            KeypadButton::new(Digit(1), 3, 0),
            KeypadButton::new(Digit(2), 3, 1),
            KeypadButton::new(Digit(3), 3, 2),
            KeypadButton::new(op(Operation::Add), 3, 3),
            KeypadButton::new(Digit(0), 4, 0).spanning(2),
            KeypadButton::new(Decimal, 4, 2),
            KeypadButton::new(Evaluate, 4, 3),
        ];

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Index of the button covering grid cell (row, col)
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Button covering grid cell (row, col)
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.index_at(row, col).and_then(|i| self.buttons.get(i))
    }

    /// Index of the button sending `input`
    #[must_use]
    pub fn find_button(&self, input: Input) -> Option<usize> {
        self.buttons.iter().position(|b| b.input == input)
    }

    /// Highlights the button for `input`, releasing every other one
    pub fn highlight(&mut self, input: Input) {
        for btn in &mut self.buttons {
            btn.pressed = btn.input == input;
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.pressed = false;
        }
    }

    /// Iterates over the buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Maps a screen position inside the rendered keypad `area` to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let inner = inner_area(area);
        if x < inner.x || y < inner.y || x >= inner.x + inner.width || y >= inner.y + inner.height {
            return None;
        }

        let (btn_width, btn_height) = self.cell_size(inner);
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = usize::from((x - inner.x) / btn_width);
        let row = usize::from((y - inner.y) / btn_height);
        self.index_at(row, col)
    }

    fn cell_size(&self, inner: Rect) -> (u16, u16) {
        (
            inner.width / self.cols as u16,
            inner.height / self.rows as u16,
        )
    }
}

fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Renders a [`Keypad`]
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a widget for `keypad`
    #[must_use]
    pub const fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .render(area, buf);

        let inner = inner_area(area);
        let (btn_width, btn_height) = self.keypad.cell_size(inner);
        if btn_width < 3 || btn_height == 0 {
            return;
        }

        for btn in self.keypad.buttons() {
            let x = inner.x + btn.col as u16 * btn_width;
            let y = inner.y + btn.row as u16 * btn_height + btn_height / 2;
            let width = btn.span as u16 * btn_width;

            let style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                match btn.input {
                    Input::Digit(_) | Input::Decimal => Style::default().fg(Color::White),
                    Input::Operator(_) => Style::default().fg(Color::Yellow),
                    Input::Evaluate => Style::default().fg(Color::Green),
                    Input::Clear => Style::default().fg(Color::Red),
                    Input::Negate => Style::default().fg(Color::Cyan),
                }
            };

            let label = format!("[{}]", btn.label());
            let label_x = x + width.saturating_sub(label.len() as u16) / 2;
            buf.set_span(label_x, y, &Span::styled(label, style), width);
        }
    }
}

//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Screen regions of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorLayout {
    /// Display field
    pub display: Rect,
    /// Keypad, including its border
    pub keypad: Rect,
    /// Status line under the keypad
    pub status: Rect,
    /// Help sidebar
    pub help: Rect,
}

impl CalculatorLayout {
    /// Splits the full terminal area
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([Constraint::Min(26), Constraint::Length(24)])
            .split(area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(7),
                Constraint::Length(1),
            ])
            .split(columns[0]);

        Self {
            display: rows[0],
            keypad: rows[1],
            status: rows[2],
            help: columns[1],
        }
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    frame.render_widget(CalculatorUI::new(app), frame.area());
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub const fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(self.app.display(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.is_error() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Paragraph::new(Span::styled(self.app.status_line(), style)).render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let layout = CalculatorLayout::new(area);
        self.render_display(layout.display, buf);
        KeypadWidget::new(self.app.keypad()).render(layout.keypad, buf);
        self.render_status(layout.status, buf);
        Self::render_help(layout.help, buf);
    }
}

/// Window title
pub const TITLE: &str = " Keypad Calculator ";

/// Key bindings shown in the help sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Enter number"),
    ("+-*/%", "Operator"),
    ("= Enter", "Evaluate"),
    ("~", "Toggle sign"),
    ("Esc Del", "Clear (AC)"),
    ("Mouse", "Press button"),
    ("Ctrl+C", "Quit"),
];

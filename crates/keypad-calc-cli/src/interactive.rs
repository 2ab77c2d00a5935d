//! Interactive keypad loop

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use keypad_calc::tui::{render, CalculatorApp, CalculatorLayout, InputHandler};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use tracing::{debug, info};

use crate::config::CalcConfig;
use crate::error::{CliError, CliResult};

fn terminal_error(err: io::Error) -> CliError {
    CliError::terminal(err.to_string())
}

/// Puts the terminal in keypad mode and restores it when dropped.
///
/// Restoration is best-effort: every step runs even if an earlier one fails.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            debug!(error = %err, "failed to disable raw mode");
        }
        if let Err(err) = execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show) {
            debug!(error = %err, "failed to restore terminal screen");
        }
    }
}

/// Runs the keypad on the real terminal until the user quits
pub fn run_tui(config: &CalcConfig) -> CliResult<()> {
    let guard = TerminalGuard::enter(io::stdout()).map_err(terminal_error)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout())).map_err(terminal_error)?;

    info!("interactive keypad started");
    let app = CalculatorApp::with_format(config.format.clone());
    let result = run_app(&mut terminal, app, || event::read().map(Some));
    drop(terminal);
    drop(guard);

    let app = result?;
    info!(display = %app.display(), "interactive keypad closed");
    Ok(())
}

/// Draws and handles events until quit or until `next_event` yields `None`
pub fn run_app<B, E>(
    terminal: &mut Terminal<B>,
    mut app: CalculatorApp,
    mut next_event: E,
) -> CliResult<CalculatorApp>
where
    B: Backend,
    E: FnMut() -> io::Result<Option<Event>>,
{
    let handler = InputHandler::new();
    let mut area = Rect::default();

    while !app.should_quit() {
        terminal
            .draw(|frame| {
                area = frame.area();
                render(&app, frame);
            })
            .map_err(terminal_error)?;

        match next_event().map_err(terminal_error)? {
            Some(event) => handle_event(&mut app, &handler, event, area),
            None => break,
        }
    }

    Ok(app)
}

/// Applies one terminal event; `area` is the last drawn frame
pub fn handle_event(app: &mut CalculatorApp, handler: &InputHandler, event: Event, area: Rect) {
    match event {
        Event::Key(key) => app.handle_action(handler.handle_key(key)),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => {
            let layout = CalculatorLayout::new(area);
            if app.click(layout.keypad, column, row).is_none() {
                debug!(column, row, "click outside keypad");
            }
        }
        _ => {}
    }
}

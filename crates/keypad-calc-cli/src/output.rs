//! Text rendering for command results

use console::Style;

use crate::config::CalcConfig;
use crate::error::CliResult;
use crate::session::SessionOutcome;

/// Display line for a session: red when it shows an error, bold for a total
#[must_use]
pub fn render_outcome(outcome: &SessionOutcome, color: bool) -> String {
    let style = if outcome.is_error() {
        Style::new().red().bold()
    } else if outcome.total {
        Style::new().bold()
    } else {
        Style::new()
    };
    style
        .force_styling(color)
        .apply_to(&outcome.display)
        .to_string()
}

/// Session state as pretty JSON
pub fn render_outcome_json(outcome: &SessionOutcome) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

/// Extra lines shown with `-v`
#[must_use]
pub fn render_details(outcome: &SessionOutcome) -> Vec<String> {
    let mut lines = vec![
        format!("expression: {:?}", outcome.expression),
        format!("total: {}", outcome.total),
    ];
    if let Some(error) = &outcome.error {
        lines.push(format!("error: {error}"));
    }
    lines
}

/// Effective configuration as YAML or JSON
pub fn render_config(config: &CalcConfig, json: bool) -> CliResult<String> {
    if json {
        config.to_json()
    } else {
        config.to_yaml()
    }
}

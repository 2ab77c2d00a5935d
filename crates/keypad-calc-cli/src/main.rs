//! Keypad calculator
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc                       # Interactive keypad
//! keypad-calc keys "12+7="          # Type keys, print the display
//! keypad-calc press 7 +/- "*" 3 =   # Press buttons by label
//! keypad-calc config --json         # Show effective configuration
//! ```

use clap::Parser;
use keypad_calc_cli::{
    interactive::run_tui,
    logging::init_logging,
    output::{render_config, render_details, render_outcome, render_outcome_json},
    run_keys, run_labels, CalcConfig, Cli, CliResult, Commands, SessionOutcome, Verbosity,
};
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    let command = cli.command();

    init_logging(&config, command == Commands::Tui)?;
    info!(version = env!("CARGO_PKG_VERSION"), ?command, "Starting keypad-calc");

    match command {
        Commands::Tui => run_tui(&config),
        Commands::Keys(args) => {
            let outcome = run_keys(&config.format, &args.keys);
            print_outcome(&config, &outcome, args.json)
        }
        Commands::Press(args) => {
            let outcome = run_labels(&config.format, &args.labels)?;
            print_outcome(&config, &outcome, args.json)
        }
        Commands::Config(args) => {
            print!("{}", ensure_newline(render_config(&config, args.json)?));
            Ok(())
        }
    }
}

fn build_config(cli: &Cli) -> CliResult<CalcConfig> {
    let config = match &cli.config {
        Some(path) => CalcConfig::load(path)?,
        None => CalcConfig::new(),
    };
    let config = match &cli.log_file {
        Some(path) => config.with_log_file(path),
        None => config,
    };

    Ok(config
        .with_verbosity(Verbosity::from_flags(cli.verbose, cli.quiet))
        .with_color(cli.color.clone().into()))
}

fn print_outcome(config: &CalcConfig, outcome: &SessionOutcome, json: bool) -> CliResult<()> {
    if json {
        println!("{}", render_outcome_json(outcome)?);
        return Ok(());
    }

    println!("{}", render_outcome(outcome, config.color.should_color()));
    if config.verbosity.is_verbose() {
        for line in render_details(outcome) {
            eprintln!("{line}");
        }
    }
    Ok(())
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

//! Strictly Timetravel - terminal tic-tac-toe with time travel.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::sync::Arc;
use strictly_timetravel::{AppConfig, ScriptAction, render_json, render_text, run_script};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }
    initialize_tracing(&config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => strictly_timetravel::tui::run_tui(&config),
        Command::Script { actions, json } => run_script_command(&actions, json),
    }
}

/// Apply scripted actions and print the resulting view.
#[instrument(skip(actions))]
fn run_script_command(actions: &[ScriptAction], json: bool) -> Result<()> {
    let controller = run_script(actions);
    let view = controller.view();
    let output = if json {
        render_json(&view)?
    } else {
        render_text(&view)
    };
    println!("{output}");
    Ok(())
}

/// Logs go to a file so they never draw over the TUI.
fn initialize_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(log_file = %config.log_file().display(), "Tracing initialized");
    Ok(())
}

//! Command-line interface for strictly_timetravel.

use strictly_timetravel::ScriptAction;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Timetravel - tic-tac-toe with a move history you can jump through
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Terminal tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Write logs here instead of the configured log file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply a sequence of actions without a UI and print the result
    Script {
        /// Actions in order: `<n>` or `move=<n>` plays cell n (0-8),
        /// `jump=<n>` shows history step n
        #[arg(required = true, value_parser = parse_action)]
        actions: Vec<ScriptAction>,

        /// Print the final view as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_action(s: &str) -> Result<ScriptAction, String> {
    s.parse()
}

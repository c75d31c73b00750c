//! Strictly Timetravel library - tic-tac-toe with a navigable move history
//!
//! # Architecture
//!
//! - **Games**: the board, the win rules, and the [`GameController`] that
//!   owns the move history
//! - **TUI**: ratatui front end; clicks and keys become [`Action`]s
//! - **Script**: headless mode that replays a list of actions
//! - **Config**: optional TOML settings
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameController, Position};
//!
//! let mut game = GameController::new();
//! game.apply_move(Position::Center).unwrap();
//! game.jump_to(0).unwrap();
//! game.apply_move(Position::TopLeft).unwrap();
//!
//! assert_eq!(game.session().history().len(), 2);
//! assert_eq!(game.status(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod games;
mod script;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, Theme};

// Crate-level exports - Headless mode
pub use script::{ScriptAction, render_json, render_text, run_script};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Action, ActionError, Board, GameController, GameSession, GameView, HistoryEntry, JumpError,
    MoveError, MoveListEntry, Player, Position, Square, check_winner,
};

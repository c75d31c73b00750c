//! Tic-tac-toe with a navigable move history.

mod action;
mod contracts;
mod controller;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Action, ActionError, JumpError, MoveError};
pub use contracts::{assert_invariants, check_invariants};
pub use controller::{GameController, GameView, MoveListEntry, move_label};
pub use history::{GameSession, HistoryEntry};
pub use position::Position;
pub use rules::{check_winner, winning_line};
pub use types::{Board, Player, Square};

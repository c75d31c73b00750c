//! First-class action types for tic-tac-toe.
//!
//! Actions are the messages the UI sends to the controller. A cell emits
//! [`Action::Move`], a move-list entry emits [`Action::Jump`].

use super::Position;
use serde::{Deserialize, Serialize};

/// A request from the UI to the game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Action {
    /// Play the mover's mark at a position.
    #[display("move {}", _0)]
    Move(Position),
    /// Show the board as it was after the given history step.
    #[display("jump to step {}", _0)]
    Jump(usize),
}

/// Reason a move was refused. Refused moves leave the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The displayed board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// A raw index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),
}

/// Reason a jump was refused. Refused jumps leave the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum JumpError {
    /// The step does not exist in the current history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    OutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

/// Reason an [`Action`] was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ActionError {
    /// The move was refused.
    #[display("{}", _0)]
    Move(MoveError),
    /// The jump was refused.
    #[display("{}", _0)]
    Jump(JumpError),
}

//! Board history and the session that walks it.

use super::action::{JumpError, MoveError};
use super::contracts::check_invariants;
use super::rules::check_winner;
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The board exactly as it existed after one move.
///
/// Entry 0 is the empty starting board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoryEntry {
    squares: Board,
}

impl HistoryEntry {
    /// Wraps a board snapshot.
    pub fn new(squares: Board) -> Self {
        Self { squares }
    }

    /// The board snapshot.
    pub fn squares(&self) -> &Board {
        &self.squares
    }
}

/// A game session: the full history plus the step being displayed.
///
/// The player to move is never stored; it is derived from the parity of
/// `step_number` so the two can not drift apart.
///
/// Deserialized sessions are validated against the session invariants, so a
/// stored session can not point past its history or start from a marked board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct GameSession {
    pub(super) history: Vec<HistoryEntry>,
    pub(super) step_number: usize,
}

/// Unchecked wire shape of a [`GameSession`].
#[derive(Debug, Deserialize)]
struct SessionRecord {
    history: Vec<HistoryEntry>,
    step_number: usize,
}

impl TryFrom<SessionRecord> for GameSession {
    type Error = String;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        let session = Self {
            history: record.history,
            step_number: record.step_number,
        };
        check_invariants(&session)?;
        Ok(session)
    }
}

impl GameSession {
    /// Creates a session holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::default()],
            step_number: 0,
        }
    }

    /// All recorded entries, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the displayed entry.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Whether X moves next.
    pub fn x_is_next(&self) -> bool {
        self.step_number % 2 == 0
    }

    /// The player to move at the displayed step.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.step_number)
    }

    /// The displayed board.
    pub fn current(&self) -> &Board {
        self.history[self.step_number].squares()
    }

    /// Places the mover's mark at `pos` on the displayed board.
    ///
    /// Entries after the displayed step are discarded first, so a move made
    /// after jumping back replaces the abandoned future.
    ///
    /// # Errors
    ///
    /// Refuses, without touching the session, when the displayed board
    /// already has a winner or the square is taken.
    #[instrument(skip(self), fields(step = self.step_number, player = %self.to_move()))]
    pub fn place(&mut self, pos: Position) -> Result<(), MoveError> {
        let current = *self.current();

        if check_winner(&current).is_some() {
            return Err(MoveError::GameOver);
        }
        if !current.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let next = current.with(pos, Square::Occupied(self.to_move()));
        let discarded = self.history.len() - (self.step_number + 1);
        self.history.truncate(self.step_number + 1);
        self.history.push(HistoryEntry::new(next));
        self.step_number = self.history.len() - 1;

        debug!(discarded, new_step = self.step_number, "Move recorded");
        Ok(())
    }

    /// Displays the board as it was after `step`. History is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if `step` is not a recorded entry.
    #[instrument(skip(self), fields(from = self.step_number))]
    pub fn jump(&mut self, step: usize) -> Result<(), JumpError> {
        if step >= self.history.len() {
            return Err(JumpError::OutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.step_number = step;
        Ok(())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

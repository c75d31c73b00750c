//! The game controller: sole owner of the session.
//!
//! Every mutation goes through [`GameController::apply_move`] or
//! [`GameController::jump_to`]; everything the UI shows comes from
//! [`GameController::view`], recomputed on each render.

use super::action::{Action, ActionError, JumpError, MoveError};
use super::contracts::assert_invariants;
use super::rules::{check_winner, winning_line};
use super::{Board, GameSession, Player, Position};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveListEntry {
    /// History step this entry jumps to.
    pub step: usize,
    /// Button label.
    pub label: String,
    /// Whether this is the step currently displayed.
    pub current: bool,
}

impl MoveListEntry {
    /// The action emitted when this entry is activated.
    pub fn action(&self) -> Action {
        Action::Jump(self.step)
    }
}

/// Everything derived from the session for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// The board at the displayed step.
    pub board: Board,
    /// The winner on that board, if any.
    pub winner: Option<Player>,
    /// Completed line, for highlighting.
    pub winning_line: Option<[Position; 3]>,
    /// Status text.
    pub status: String,
    /// One entry per history step.
    pub moves: Vec<MoveListEntry>,
    /// Displayed step.
    pub step_number: usize,
}

/// Label for the move-list entry of `step`.
pub fn move_label(step: usize) -> String {
    if step > 0 {
        format!("Go to move #{step}")
    } else {
        "Go to game start".to_string()
    }
}

/// Owns the single game session and applies actions to it.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    session: GameSession,
}

impl GameController {
    /// Creates a controller with a fresh session.
    #[instrument]
    pub fn new() -> Self {
        info!("Starting new game session");
        Self {
            session: GameSession::new(),
        }
    }

    /// Read-only access to the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Plays the mover's mark at `pos`.
    ///
    /// # Errors
    ///
    /// Refused moves (decided game, occupied square) return an error and
    /// leave the session unchanged. The UI treats them as no-ops.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, pos: Position) -> Result<(), MoveError> {
        self.session.place(pos)?;
        assert_invariants(&self.session);
        Ok(())
    }

    /// Plays at a raw board index (0-8).
    ///
    /// # Errors
    ///
    /// As [`apply_move`](Self::apply_move), plus [`MoveError::OutOfBounds`]
    /// for indices past 8.
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> Result<(), MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.apply_move(pos)
    }

    /// Displays the board after `step`; history is left as is.
    ///
    /// # Errors
    ///
    /// Steps past the end of the history are rejected.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        self.session.jump(step)?;
        assert_invariants(&self.session);
        Ok(())
    }

    /// Routes a UI action to the matching operation.
    ///
    /// # Errors
    ///
    /// Returns the refusal from the underlying operation.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> Result<(), ActionError> {
        let result = match action {
            Action::Move(pos) => self.apply_move(pos).map_err(ActionError::from),
            Action::Jump(step) => self.jump_to(step).map_err(ActionError::from),
        };
        if let Err(e) = &result {
            debug!(error = %e, "Action ignored");
        }
        result
    }

    /// Whether X moves next at the displayed step.
    pub fn x_is_next(&self) -> bool {
        self.session.x_is_next()
    }

    /// The winner on the displayed board, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.session.current())
    }

    /// Status text for the displayed step.
    pub fn status(&self) -> String {
        match self.winner() {
            Some(winner) => format!("Winner: {winner}"),
            None => format!("Next player: {}", self.session.to_move()),
        }
    }

    /// Derives the full view for one render.
    #[instrument(level = "trace", skip(self))]
    pub fn view(&self) -> GameView {
        let board = *self.session.current();
        let line = winning_line(&board);
        let step_number = self.session.step_number();

        GameView {
            board,
            winner: line.map(|(player, _)| player),
            winning_line: line.map(|(_, positions)| positions),
            status: self.status(),
            moves: (0..self.session.history().len())
                .map(|step| MoveListEntry {
                    step,
                    label: move_label(step),
                    current: step == step_number,
                })
                .collect(),
            step_number,
        }
    }
}

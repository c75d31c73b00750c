//! First-class invariants for a tic-tac-toe session.
//!
//! Invariants are logical properties that must hold after every move and
//! every jump. They are asserted in debug builds and tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod initial_board;
pub mod monotonic_history;
pub mod step_in_bounds;

pub use initial_board::InitialBoardEmptyInvariant;
pub use monotonic_history::MonotonicHistoryInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    InitialBoardEmptyInvariant,
    StepInBoundsInvariant,
    MonotonicHistoryInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameSession, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        assert!(SessionInvariants::check_all(&GameSession::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let mut session = GameSession::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            session.place(pos).unwrap();
            assert!(SessionInvariants::check_all(&session).is_ok());
        }
        session.jump(1).unwrap();
        assert!(SessionInvariants::check_all(&session).is_ok());
        session.place(Position::BottomLeft).unwrap();
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_every_violation() {
        let mut session = GameSession::new();
        session.history[0] = crate::games::tictactoe::HistoryEntry::new(
            crate::games::tictactoe::Board::new()
                .with(Position::Center, Square::Occupied(Player::O)),
        );
        session.step_number = 5;

        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}

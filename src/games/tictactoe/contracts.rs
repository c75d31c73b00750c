//! Postcondition checks run after every session mutation.

use super::GameSession;
use super::invariants::{InvariantSet, SessionInvariants};
use tracing::{error, instrument};

/// Checks every session invariant, joining violations into one message.
///
/// # Errors
///
/// Returns the `; `-joined descriptions of the violated invariants.
#[instrument(level = "trace", skip(session))]
pub fn check_invariants(session: &GameSession) -> Result<(), String> {
    SessionInvariants::check_all(session).map_err(|violations| {
        violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    })
}

/// Asserts that all session invariants hold (debug builds only).
pub fn assert_invariants(session: &GameSession) {
    if cfg!(debug_assertions)
        && let Err(violations) = check_invariants(session)
    {
        error!(%violations, "Session invariant violated");
        panic!("Session invariant violated: {violations}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_postcondition_holds_after_move() {
        let mut session = GameSession::new();
        session.place(Position::Center).unwrap();
        assert!(check_invariants(&session).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let mut session = GameSession::new();
        session.step_number = 3;
        let message = check_invariants(&session).unwrap_err();
        assert!(message.contains("within the recorded history"));
    }
}

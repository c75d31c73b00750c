//! The first history entry is always the empty board.

use super::super::GameSession;
use super::Invariant;

/// Invariant: `history[0]` exists and is all empty.
pub struct InitialBoardEmptyInvariant;

impl Invariant<GameSession> for InitialBoardEmptyInvariant {
    fn holds(session: &GameSession) -> bool {
        session
            .history()
            .first()
            .is_some_and(|entry| entry.squares().is_blank())
    }

    fn description() -> &'static str {
        "First history entry is the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, HistoryEntry, Player, Position, Square};

    #[test]
    fn test_new_session_holds() {
        assert!(InitialBoardEmptyInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_marked_start_violates() {
        let mut session = GameSession::new();
        session.history[0] = HistoryEntry::new(
            Board::new().with(Position::TopLeft, Square::Occupied(Player::X)),
        );
        assert!(!InitialBoardEmptyInvariant::holds(&session));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut session = GameSession::new();
        session.history.clear();
        assert!(!InitialBoardEmptyInvariant::holds(&session));
    }
}

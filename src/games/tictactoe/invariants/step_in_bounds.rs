//! The displayed step always names a recorded entry.

use super::super::GameSession;
use super::Invariant;

/// Invariant: `0 <= step_number < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<GameSession> for StepInBoundsInvariant {
    fn holds(session: &GameSession) -> bool {
        session.step_number() < session.history().len()
    }

    fn description() -> &'static str {
        "Displayed step is within the recorded history"
    }
}

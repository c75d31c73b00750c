//! Monotonic history invariant: each entry adds exactly one mark.

use super::super::{GameSession, Player, Position, Square};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: every entry differs from its predecessor in exactly one
/// square, which goes from empty to the mark of the player who moved.
///
/// The mark added by entry `k` belongs to the player to move at step
/// `k - 1`, so X and O alternate starting with X.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameSession> for MonotonicHistoryInvariant {
    fn holds(session: &GameSession) -> bool {
        session
            .history()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let (before, after) = (pair[0].squares(), pair[1].squares());
                let changed: Vec<Position> = Position::iter()
                    .filter(|pos| before.get(*pos) != after.get(*pos))
                    .collect();

                match changed.as_slice() {
                    [pos] => {
                        before.get(*pos) == Square::Empty
                            && after.get(*pos) == Square::Occupied(Player::for_step(step))
                    }
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark for the player to move"
    }
}

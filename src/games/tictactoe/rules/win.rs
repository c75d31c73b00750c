//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines, in evaluation order: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line (in [`LINES`] order) holding
/// three of the same mark, `None` otherwise.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

/// Like [`check_winner`], but also returns the completed line.
#[instrument(level = "trace")]
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    for line @ [a, b, c] in LINES {
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some((player, line));
        }
    }

    None
}

//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Mark a player puts on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (moves on even steps).
    #[display("X")]
    X,
    /// Player O (moves on odd steps).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the player whose turn it is at the given history step.
    ///
    /// X always moves on even steps, O on odd ones.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Symbol shown for this square; empty squares render blank.
    pub fn symbol(self) -> &'static str {
        match self {
            Square::Empty => " ",
            Square::Occupied(Player::X) => "X",
            Square::Occupied(Player::O) => "O",
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from raw squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of this board with `pos` set to `square`.
    pub fn with(mut self, pos: Position, square: Square) -> Self {
        self.set(pos, square);
        self
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is empty.
    pub fn is_blank(&self) -> bool {
        self.squares.iter().all(|s| *s == Square::Empty)
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                result.push(' ');
                result.push_str(self.squares[row * 3 + col].symbol());
                result.push(' ');
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n---+---+---\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_parity() {
        assert_eq!(Player::for_step(0), Player::X);
        assert_eq!(Player::for_step(1), Player::O);
        assert_eq!(Player::for_step(8), Player::X);
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with(Position::Center, Square::Occupied(Player::X));
        assert!(board.is_blank());
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_display_renders_empty_as_blank() {
        let board = Board::new().with(Position::TopLeft, Square::Occupied(Player::O));
        let text = board.display();
        assert!(text.starts_with(" O |   |  "));
        assert_eq!(text.lines().count(), 5);
    }
}

//! Tic-tac-toe board rendering.

use super::super::app::Palette;
use super::cell::Cell;
use crate::games::tictactoe::{Board, Position};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Width of the whole grid, separators included.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Height of the whole grid, separators included.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Stateless 3x3 layout of [`Cell`]s with grid lines between them.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    cursor: Option<Position>,
    winning_line: Option<[Position; 3]>,
    palette: &'a Palette,
}

impl<'a> BoardView<'a> {
    /// Creates a view of `board`.
    pub fn new(board: &'a Board, palette: &'a Palette) -> Self {
        Self {
            board,
            cursor: None,
            winning_line: None,
            palette,
        }
    }

    /// Highlights the keyboard cursor.
    pub fn cursor(mut self, cursor: Option<Position>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Highlights a completed line.
    pub fn winning_line(mut self, line: Option<[Position; 3]>) -> Self {
        self.winning_line = line;
        self
    }

    /// Screen area of every cell when the board is drawn in `area`.
    ///
    /// Empty when `area` is too small to hold the grid.
    pub fn cell_areas(area: Rect) -> Vec<(Position, Rect)> {
        let Some(grid) = grid_area(area) else {
            return Vec::new();
        };
        Position::ALL
            .into_iter()
            .map(|pos| {
                let rect = Rect::new(
                    grid.x + pos.col() as u16 * (CELL_WIDTH + 1),
                    grid.y + pos.row() as u16 * (CELL_HEIGHT + 1),
                    CELL_WIDTH,
                    CELL_HEIGHT,
                );
                (pos, rect)
            })
            .collect()
    }
}

/// The grid centered in `area`, if it fits.
fn grid_area(area: Rect) -> Option<Rect> {
    if area.width < BOARD_WIDTH || area.height < BOARD_HEIGHT {
        return None;
    }
    Some(Rect::new(
        area.x + (area.width - BOARD_WIDTH) / 2,
        area.y + (area.height - BOARD_HEIGHT) / 2,
        BOARD_WIDTH,
        BOARD_HEIGHT,
    ))
}

impl Widget for BoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(grid) = grid_area(area) else {
            buf.set_stringn(
                area.x,
                area.y,
                "Terminal too small",
                area.width as usize,
                Style::default().fg(Color::Yellow),
            );
            return;
        };

        let line_style = Style::default().fg(Color::DarkGray);
        let horizontal = ["─"; 3].map(|s| s.repeat(CELL_WIDTH as usize)).join("┼");
        for sep in 1..3 {
            let y = grid.y + sep * (CELL_HEIGHT + 1) - 1;
            buf.set_string(grid.x, y, &horizontal, line_style);
        }
        for row in 0..3 {
            for dy in 0..CELL_HEIGHT {
                let y = grid.y + row * (CELL_HEIGHT + 1) + dy;
                for sep in 1..3 {
                    let x = grid.x + sep * (CELL_WIDTH + 1) - 1;
                    buf.set_string(x, y, "│", line_style);
                }
            }
        }

        for (pos, rect) in Self::cell_areas(area) {
            let winning = self.winning_line.is_some_and(|line| line.contains(&pos));
            Cell::new(self.board.get(pos), self.palette)
                .hint(pos.to_index() + 1)
                .selected(self.cursor == Some(pos))
                .winning(winning)
                .render(rect, buf);
        }
    }
}

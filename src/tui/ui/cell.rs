//! A single board cell.

use super::super::app::Palette;
use crate::games::tictactoe::{Player, Square};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Widget},
};

/// Stateless widget for one square.
///
/// Shows `X`, `O`, or nothing; optionally the key that plays it.
#[derive(Debug, Clone, Copy)]
pub struct Cell<'a> {
    square: Square,
    hint: Option<usize>,
    selected: bool,
    winning: bool,
    palette: &'a Palette,
}

impl<'a> Cell<'a> {
    /// Creates a cell for `square`.
    pub fn new(square: Square, palette: &'a Palette) -> Self {
        Self {
            square,
            hint: None,
            selected: false,
            winning: false,
            palette,
        }
    }

    /// Shows `key` when the square is empty and hints are enabled.
    pub fn hint(mut self, key: usize) -> Self {
        self.hint = Some(key);
        self
    }

    /// Highlights the cell as the keyboard cursor.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Marks the cell as part of the winning line.
    pub fn winning(mut self, winning: bool) -> Self {
        self.winning = winning;
        self
    }

    fn text(&self) -> String {
        match (self.square, self.hint) {
            (Square::Empty, Some(key)) if self.palette.hints => key.to_string(),
            (square, _) => square.symbol().to_string(),
        }
    }

    fn style(&self) -> Style {
        let mut style = match self.square {
            Square::Empty => Style::default().fg(Color::DarkGray),
            Square::Occupied(Player::X) => Style::default()
                .fg(self.palette.x)
                .add_modifier(Modifier::BOLD),
            Square::Occupied(Player::O) => Style::default()
                .fg(self.palette.o)
                .add_modifier(Modifier::BOLD),
        };
        if self.winning {
            style = style.add_modifier(Modifier::UNDERLINED).bg(Color::Yellow);
        }
        if self.selected {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}

impl Widget for Cell<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let style = self.style();
        buf.set_style(area, style);

        let middle = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        Paragraph::new(self.text())
            .style(style)
            .alignment(Alignment::Center)
            .render(middle, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(cell: Cell<'_>) -> String {
        let area = Rect::new(0, 0, 7, 3);
        let mut buf = Buffer::empty(area);
        cell.render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_empty_cell_is_blank() {
        let palette = Palette::default();
        assert_eq!(rendered(Cell::new(Square::Empty, &palette).hint(5)).trim(), "");
    }

    #[test]
    fn test_hint_shown_when_enabled() {
        let palette = Palette {
            hints: true,
            ..Palette::default()
        };
        assert_eq!(rendered(Cell::new(Square::Empty, &palette).hint(5)).trim(), "5");
        assert_eq!(
            rendered(Cell::new(Square::Occupied(Player::O), &palette).hint(5)).trim(),
            "O"
        );
    }

    #[test]
    fn test_mark_is_centered() {
        let palette = Palette::default();
        let area = Rect::new(0, 0, 7, 3);
        let mut buf = Buffer::empty(area);
        Cell::new(Square::Occupied(Player::X), &palette).render(area, &mut buf);
        assert_eq!(buf[(3, 1)].symbol(), "X");
        assert_eq!(buf[(3, 1)].fg, Color::Blue);
    }
}

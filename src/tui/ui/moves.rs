//! The move list: one button per history step.

use crate::games::tictactoe::MoveListEntry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

/// First entry shown so that `selected` stays visible in `height` rows.
pub fn scroll_offset(selected: usize, height: u16) -> usize {
    selected.saturating_sub((height as usize).saturating_sub(1))
}

/// Entry the list scrolls to: the selection, else the displayed step.
fn anchor(entries: &[MoveListEntry], selected: Option<usize>) -> usize {
    selected
        .or_else(|| entries.iter().find(|entry| entry.current).map(|entry| entry.step))
        .unwrap_or(0)
}

/// Screen row of every visible entry when the list is drawn in `area`.
pub fn row_areas(
    entries: &[MoveListEntry],
    selected: Option<usize>,
    area: Rect,
) -> Vec<(usize, Rect)> {
    let offset = scroll_offset(anchor(entries, selected), area.height);
    entries
        .iter()
        .skip(offset)
        .take(area.height as usize)
        .enumerate()
        .map(|(row, entry)| {
            (
                entry.step,
                Rect::new(area.x, area.y + row as u16, area.width, 1),
            )
        })
        .collect()
}

/// Stateless move-list widget.
#[derive(Debug, Clone, Copy)]
pub struct MoveList<'a> {
    entries: &'a [MoveListEntry],
    selected: Option<usize>,
}

impl<'a> MoveList<'a> {
    /// Creates a list of `entries`.
    pub fn new(entries: &'a [MoveListEntry]) -> Self {
        Self {
            entries,
            selected: None,
        }
    }

    /// Highlights the entry at `step` as the keyboard selection.
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for MoveList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let offset = scroll_offset(anchor(self.entries, self.selected), area.height);
        let lines: Vec<Line> = self
            .entries
            .iter()
            .skip(offset)
            .map(|entry| {
                let mut style = Style::default();
                if entry.current {
                    style = style.add_modifier(Modifier::BOLD);
                }
                if self.selected == Some(entry.step) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Line::styled(format!("{:>2}. {}", entry.step + 1, entry.label), style)
            })
            .collect();
        Paragraph::new(lines).render(area, buf);
    }
}

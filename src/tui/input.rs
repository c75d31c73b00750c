//! Terminal input: crossterm events mapped to UI events.

use crate::games::tictactoe::Position;
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::time::Duration;
use tracing::trace;

/// Arrow direction for cursor and selection movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up one row.
    Up,
    /// Down one row.
    Down,
    /// Left one column.
    Left,
    /// Right one column.
    Right,
}

/// Input events the application understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    /// Leave the application.
    Quit,
    /// Activate a cell directly (keys 1-9).
    Cell(Position),
    /// Move the board cursor or the move-list selection.
    Cursor(Direction),
    /// Activate whatever has focus.
    Activate,
    /// Switch focus between board and move list.
    ToggleFocus,
    /// Show the previous history step.
    StepBack,
    /// Show the next history step.
    StepForward,
    /// Left click at a terminal cell.
    Click {
        /// Terminal column.
        column: u16,
        /// Terminal row.
        row: u16,
    },
}

/// Maps a raw terminal event to a [`TuiEvent`].
pub fn map_event(event: &Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
            (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
            (_, KeyCode::Char(c @ '1'..='9')) => {
                Position::from_index(c as usize - '1' as usize).map(TuiEvent::Cell)
            }
            (_, KeyCode::Up) => Some(TuiEvent::Cursor(Direction::Up)),
            (_, KeyCode::Down) => Some(TuiEvent::Cursor(Direction::Down)),
            (_, KeyCode::Left) => Some(TuiEvent::Cursor(Direction::Left)),
            (_, KeyCode::Right) => Some(TuiEvent::Cursor(Direction::Right)),
            (_, KeyCode::Enter) | (_, KeyCode::Char(' ')) => Some(TuiEvent::Activate),
            (_, KeyCode::Tab) | (_, KeyCode::BackTab) => Some(TuiEvent::ToggleFocus),
            (_, KeyCode::Char('[')) => Some(TuiEvent::StepBack),
            (_, KeyCode::Char(']')) => Some(TuiEvent::StepForward),
            _ => None,
        },
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            Some(TuiEvent::Click {
                column: mouse.column,
                row: mouse.row,
            })
        }
        _ => None,
    }
}

/// Waits up to `timeout` for the next event the application understands.
///
/// # Errors
///
/// Returns the terminal I/O error from crossterm.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let raw = event::read()?;
    let mapped = map_event(&raw);
    trace!(?raw, ?mapped, "Terminal event");
    Ok(mapped)
}

/// Moves the board cursor one square, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|r| (r, col)),
        Direction::Down => Some((row + 1, col)),
        Direction::Left => col.checked_sub(1).map(|c| (row, c)),
        Direction::Right => Some((row, col + 1)),
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

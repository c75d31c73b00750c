//! Clickable regions recorded while drawing.

use crate::games::tictactoe::Action;
use ratatui::layout::Rect;

/// Screen regions paired with the action a click there emits.
///
/// Rebuilt on every draw, so it always matches what is on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    regions: Vec<(Rect, Action)>,
}

impl HitMap {
    /// Creates an empty hit map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that a click inside `area` emits `action`.
    pub fn register(&mut self, area: Rect, action: Action) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, action));
        }
    }

    /// The action under a terminal cell, if any. Later regions win.
    pub fn action_at(&self, column: u16, row: u16) -> Option<Action> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| {
                column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
            })
            .map(|(_, action)| *action)
    }

    /// Number of registered regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether no region is registered.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

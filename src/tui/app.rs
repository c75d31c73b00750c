//! Application state and logic.

use super::hit_map::HitMap;
use super::input::{Direction, TuiEvent, move_cursor};
use crate::config::AppConfig;
use crate::games::tictactoe::{Action, GameController, GameView, Position};
use ratatui::style::Color;
use tracing::{debug, instrument};

/// Which pane receives cursor and activation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move list.
    Moves,
}

/// Rendering preferences resolved from the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Color of X marks.
    pub x: Color,
    /// Color of O marks.
    pub o: Color,
    /// Show the 1-9 key in empty cells.
    pub hints: bool,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
            hints: false,
        }
    }
}

impl Palette {
    /// Resolves colors from `config`, keeping defaults for unknown names.
    pub fn from_config(config: &AppConfig) -> Self {
        let defaults = Self::default();
        Self {
            x: config.theme().x().unwrap_or(defaults.x),
            o: config.theme().o().unwrap_or(defaults.o),
            hints: *config.show_hints(),
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    controller: GameController,
    cursor: Position,
    focus: Focus,
    selected_move: usize,
    hit_map: HitMap,
    palette: Palette,
    should_quit: bool,
}

impl App {
    /// Creates an application around a fresh game.
    pub fn new(palette: Palette) -> Self {
        Self {
            controller: GameController::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_move: 0,
            hit_map: HitMap::new(),
            palette,
            should_quit: false,
        }
    }

    /// The game controller.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Derived view for the next render.
    pub fn view(&self) -> GameView {
        self.controller.view()
    }

    /// Board cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted move-list entry.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// Rendering preferences.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Replaces the clickable regions after a draw.
    pub fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    /// Handles one input event.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            TuiEvent::Cell(pos) => {
                self.focus = Focus::Board;
                self.cursor = pos;
                self.dispatch(Action::Move(pos));
            }
            TuiEvent::Cursor(direction) => self.move_focus(direction),
            TuiEvent::Activate => match self.focus {
                Focus::Board => self.dispatch(Action::Move(self.cursor)),
                Focus::Moves => self.dispatch(Action::Jump(self.selected_move)),
            },
            TuiEvent::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
            }
            TuiEvent::StepBack => {
                if let Some(step) = self.controller.session().step_number().checked_sub(1) {
                    self.dispatch(Action::Jump(step));
                }
            }
            TuiEvent::StepForward => {
                self.dispatch(Action::Jump(self.controller.session().step_number() + 1));
            }
            TuiEvent::Click { column, row } => {
                let Some(action) = self.hit_map.action_at(column, row) else {
                    return;
                };
                match action {
                    Action::Move(pos) => {
                        self.focus = Focus::Board;
                        self.cursor = pos;
                    }
                    Action::Jump(_) => self.focus = Focus::Moves,
                }
                self.dispatch(action);
            }
        }
    }

    fn move_focus(&mut self, direction: Direction) {
        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, direction),
            Focus::Moves => {
                let last = self.controller.session().history().len() - 1;
                self.selected_move = match direction {
                    Direction::Up | Direction::Left => self.selected_move.saturating_sub(1),
                    Direction::Down | Direction::Right => (self.selected_move + 1).min(last),
                };
            }
        }
    }

    /// Sends an action to the controller. Refusals are silent no-ops.
    fn dispatch(&mut self, action: Action) {
        if self.controller.dispatch(action).is_ok() {
            self.selected_move = self.controller.session().step_number();
        }
    }
}

//! Headless mode: apply a list of actions and render the result as text.

use crate::games::tictactoe::{ActionError, GameController, GameView};
use std::fmt::Write as _;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// One scripted action, before bounds checking against the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptAction {
    /// Play at a raw cell index.
    Move(usize),
    /// Jump to a history step.
    Jump(usize),
}

impl ScriptAction {
    /// Applies this action to `controller`.
    ///
    /// # Errors
    ///
    /// Returns the controller's refusal; the session is unchanged.
    pub fn apply(self, controller: &mut GameController) -> Result<(), ActionError> {
        match self {
            ScriptAction::Move(index) => controller.apply_index(index).map_err(ActionError::from),
            ScriptAction::Jump(step) => controller.jump_to(step).map_err(ActionError::from),
        }
    }
}

impl FromStr for ScriptAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (kind, value) = s.split_once('=').unwrap_or(("move", s));
        let value: usize = value
            .parse()
            .map_err(|_| format!("expected a non-negative number in `{s}`"))?;
        match kind {
            "move" | "m" => Ok(ScriptAction::Move(value)),
            "jump" | "j" => Ok(ScriptAction::Jump(value)),
            other => Err(format!("unknown action `{other}` (expected move or jump)")),
        }
    }
}

/// Runs `actions` against a fresh game. Refused actions are skipped.
#[instrument(skip(actions), fields(count = actions.len()))]
pub fn run_script(actions: &[ScriptAction]) -> GameController {
    let mut controller = GameController::new();
    for (i, action) in actions.iter().enumerate() {
        if let Err(e) = action.apply(&mut controller) {
            debug!(index = i, ?action, error = %e, "Scripted action ignored");
        }
    }
    info!(
        history_len = controller.session().history().len(),
        step = controller.session().step_number(),
        "Script finished"
    );
    controller
}

/// Renders a view as plain text: board, status, then the move list.
pub fn render_text(view: &GameView) -> String {
    let mut out = view.board.display();
    out.push_str("\n\n");
    out.push_str(&view.status);
    out.push('\n');
    for entry in &view.moves {
        let marker = if entry.current { '>' } else { ' ' };
        // Writing to a String can not fail.
        let _ = writeln!(out, "{marker} {}. {}", entry.step + 1, entry.label);
    }
    out
}

/// Renders a view as pretty-printed JSON.
///
/// # Errors
///
/// Returns the serializer error, which does not occur for well-formed views.
pub fn render_json(view: &GameView) -> serde_json::Result<String> {
    serde_json::to_string_pretty(view)
}

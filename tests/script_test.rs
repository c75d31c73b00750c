//! Tests for headless script mode.

use strictly_timetravel::{ScriptAction, render_text, run_script};

#[test]
fn test_scripted_win_then_refused_move() {
    let actions: Vec<ScriptAction> = ["0", "3", "1", "4", "2", "5"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let game = run_script(&actions);
    assert_eq!(game.session().history().len(), 6);
    assert!(render_text(&game.view()).contains("Winner: X"));
}

#[test]
fn test_scripted_branch() {
    let actions: Vec<ScriptAction> = ["move=0", "jump=0", "move=4"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let view = run_script(&actions).view();
    assert_eq!(view.moves.len(), 2);
    assert_eq!(view.status, "Next player: O");
    assert!(view.board.squares()[0] == strictly_timetravel::Square::Empty);
}

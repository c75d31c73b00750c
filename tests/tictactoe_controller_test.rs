//! Tests for the game controller: moves, refusals, and time travel.

use strictly_timetravel::{
    GameController, JumpError, MoveError, Player, Position, Square, check_winner,
};

fn play(indices: &[usize]) -> GameController {
    let mut game = GameController::new();
    for &i in indices {
        game.apply_index(i).unwrap();
    }
    game
}

#[test]
fn test_move_on_empty_cell_places_mark_and_flips_turn() {
    let mut game = GameController::new();
    for (i, pos) in [Position::Center, Position::TopLeft, Position::BottomRight]
        .into_iter()
        .enumerate()
    {
        let mover = if game.x_is_next() { Player::X } else { Player::O };
        game.apply_move(pos).unwrap();
        assert_eq!(game.session().current().get(pos), Square::Occupied(mover));
        assert_eq!(game.x_is_next(), i % 2 == 1);
    }
}

#[test]
fn test_move_on_occupied_cell_changes_nothing() {
    let mut game = play(&[4, 0]);
    let before = game.session().clone();
    for i in [4, 0] {
        assert!(matches!(
            game.apply_index(i),
            Err(MoveError::SquareOccupied(_))
        ));
    }
    assert_eq!(game.session(), &before);
}

#[test]
fn test_top_row_win_freezes_board() {
    let mut game = play(&[0, 3, 1, 4, 2]);
    assert_eq!(check_winner(game.session().current()), Some(Player::X));
    assert_eq!(game.status(), "Winner: X");

    let before = game.session().clone();
    for i in 0..9 {
        assert!(game.apply_index(i).is_err());
    }
    assert_eq!(game.session(), &before);
    assert_eq!(game.apply_index(5), Err(MoveError::GameOver));
}

#[test]
fn test_jump_never_touches_history() {
    let mut game = play(&[0, 4, 8]);
    let history = game.session().history().to_vec();
    for step in [0, 2, 1, 3] {
        game.jump_to(step).unwrap();
        assert_eq!(game.session().history(), history.as_slice());
        assert_eq!(game.session().step_number(), step);
        assert_eq!(game.x_is_next(), step % 2 == 0);
    }
}

#[test]
fn test_jump_out_of_range_is_rejected() {
    let mut game = play(&[0]);
    assert_eq!(
        game.jump_to(2),
        Err(JumpError::OutOfRange { step: 2, len: 2 })
    );
    assert_eq!(game.session().step_number(), 1);
}

#[test]
fn test_move_after_jump_truncates_future() {
    let mut game = play(&[0, 4, 8, 2]);
    game.jump_to(2).unwrap();
    game.apply_index(6).unwrap();

    let history = game.session().history();
    assert_eq!(history.len(), 4);
    assert_eq!(game.session().step_number(), 3);
    assert_eq!(
        history[3].squares().get(Position::BottomLeft),
        Square::Occupied(Player::X)
    );
    assert!(history[3].squares().is_empty(Position::BottomRight));
}

#[test]
fn test_branch_from_start_discards_first_move() {
    let mut game = GameController::new();
    game.apply_index(0).unwrap();
    game.jump_to(0).unwrap();
    game.apply_index(4).unwrap();

    let history = game.session().history();
    assert_eq!(history.len(), 2);
    assert_eq!(
        history[1].squares().get(Position::Center),
        Square::Occupied(Player::X)
    );
    assert!(history[1].squares().is_empty(Position::TopLeft));
}

#[test]
fn test_jump_back_before_win_allows_play_again() {
    let mut game = play(&[0, 3, 1, 4, 2]);
    game.jump_to(4).unwrap();
    assert_eq!(game.status(), "Next player: X");
    game.apply_index(5).unwrap();
    assert_eq!(game.session().history().len(), 6);
    assert_eq!(game.winner(), None);
}

#[test]
fn test_move_list_labels_follow_history() {
    let game = play(&[0, 4]);
    let labels: Vec<String> = game.view().moves.into_iter().map(|m| m.label).collect();
    assert_eq!(
        labels,
        vec!["Go to game start", "Go to move #1", "Go to move #2"]
    );
}

/// Tries every cell from the displayed step, recursing into each accepted move
/// and jumping back afterwards. Returns the number of finished games below.
fn walk(game: &mut GameController) -> usize {
    let step = game.session().step_number();
    let board = *game.session().current();
    let winner = check_winner(&board);
    if winner.is_some() || board.squares().iter().all(|s| *s != Square::Empty) {
        assert!(Position::ALL.into_iter().all(|pos| {
            let before = game.session().clone();
            let refused = game.apply_move(pos).is_err();
            refused && game.session() == &before
        }));
        return 1;
    }

    let mover = if step % 2 == 0 { Player::X } else { Player::O };
    assert_eq!(game.x_is_next(), mover == Player::X);

    let mut finished = 0;
    for pos in Position::ALL {
        let before = game.session().clone();
        match game.apply_move(pos) {
            Err(MoveError::SquareOccupied(p)) => {
                assert_eq!(p, pos);
                assert_ne!(board.get(pos), Square::Empty);
                assert_eq!(game.session(), &before);
            }
            Err(e) => panic!("unexpected refusal {e} at step {step}"),
            Ok(()) => {
                assert!(board.is_empty(pos));
                let after = game.session();
                assert_eq!(after.step_number(), step + 1);
                assert_eq!(after.history().len(), step + 2);
                assert_eq!(after.current(), &board.with(pos, Square::Occupied(mover)));
                assert_eq!(game.x_is_next(), mover == Player::O);

                finished += walk(game);

                let history = game.session().history().to_vec();
                game.jump_to(step).unwrap();
                assert_eq!(game.session().history(), history.as_slice());
                assert_eq!(game.session().current(), &board);
            }
        }
    }
    finished
}

#[test]
fn test_every_reachable_game_obeys_move_rules() {
    let mut game = GameController::new();
    assert_eq!(walk(&mut game), 255_168);
    assert_eq!(game.session().step_number(), 0);
}

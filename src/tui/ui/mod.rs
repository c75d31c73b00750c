//! UI rendering using ratatui.
//!
//! Drawing is a pure function of the [`App`]; it returns the clickable
//! regions it laid out so clicks resolve against what is on screen.

mod board;
mod cell;
mod moves;

pub use board::{BOARD_HEIGHT, BOARD_WIDTH, BoardView};
pub use cell::Cell;
pub use moves::MoveList;

use super::app::{App, Focus};
use super::hit_map::HitMap;
use crate::games::tictactoe::{Action, Player};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

const HELP: &str =
    "1-9/Enter: play | Tab: switch pane | [ ]: step back/forward | Click: play or jump | Q: quit";

/// Draws the main UI and returns its clickable regions.
pub fn draw(f: &mut Frame, app: &App) -> HitMap {
    let view = app.view();
    let mut hits = HitMap::new();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(BOARD_HEIGHT + 2),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Strictly Timetravel - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_WIDTH + 4), Constraint::Min(24)])
        .split(chunks[1]);

    // Board
    let board_block = pane("Board", app.focus() == Focus::Board);
    let board_area = board_block.inner(body[0]);
    f.render_widget(board_block, body[0]);
    let cursor = (app.focus() == Focus::Board).then(|| app.cursor());
    f.render_widget(
        BoardView::new(&view.board, app.palette())
            .cursor(cursor)
            .winning_line(view.winning_line),
        board_area,
    );
    for (pos, rect) in BoardView::cell_areas(board_area) {
        hits.register(rect, Action::Move(pos));
    }

    // Game info: status above the move list
    let info = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(body[1]);

    let status_style = match view.winner {
        Some(Player::X) => Style::default().fg(app.palette().x).add_modifier(Modifier::BOLD),
        Some(Player::O) => Style::default().fg(app.palette().o).add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(view.status.as_str())
        .style(status_style)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, info[0]);

    let moves_block = pane("Moves", app.focus() == Focus::Moves);
    let moves_area = moves_block.inner(info[1]);
    f.render_widget(moves_block, info[1]);
    let selected = (app.focus() == Focus::Moves).then(|| app.selected_move());
    f.render_widget(MoveList::new(&view.moves).selected(selected), moves_area);
    for (step, rect) in moves::row_areas(&view.moves, selected, moves_area) {
        hits.register(rect, Action::Jump(step));
    }

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);

    hits
}

fn pane(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;
    use crate::tui::app::Palette;
    use crate::tui::input::TuiEvent;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn render(app: &App) -> (Terminal<TestBackend>, HitMap) {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        let mut hits = HitMap::new();
        terminal.draw(|f| hits = draw(f, app)).unwrap();
        (terminal, hits)
    }

    #[test]
    fn test_draw_initial_screen() {
        let app = App::new(Palette::default());
        let (terminal, hits) = render(&app);
        let text = screen_text(&terminal);
        assert!(text.contains("Next player: X"));
        assert!(text.contains("Go to game start"));
        assert_eq!(hits.len(), 10);
    }

    #[test]
    fn test_clicking_drawn_regions_plays_and_jumps() {
        let mut app = App::new(Palette::default());
        let (_, hits) = render(&app);
        let cell = hits_position(&hits, Action::Move(Position::Center));
        app.set_hit_map(hits);
        app.handle_event(TuiEvent::Click {
            column: cell.0,
            row: cell.1,
        });
        assert_eq!(app.view().status, "Next player: O");

        let (terminal, hits) = render(&app);
        assert!(screen_text(&terminal).contains("Go to move #1"));
        let start = hits_position(&hits, Action::Jump(0));
        app.set_hit_map(hits);
        app.handle_event(TuiEvent::Click {
            column: start.0,
            row: start.1,
        });
        assert_eq!(app.controller().session().step_number(), 0);
        assert_eq!(app.controller().session().history().len(), 2);
    }

    #[test]
    fn test_winner_status() {
        let mut app = App::new(Palette::default());
        for i in [0, 3, 1, 4, 2] {
            app.handle_event(TuiEvent::Cell(Position::from_index(i).unwrap()));
        }
        let (terminal, _) = render(&app);
        assert!(screen_text(&terminal).contains("Winner: X"));
    }

    /// Finds a terminal cell whose click emits `action`.
    fn hits_position(hits: &HitMap, action: Action) -> (u16, u16) {
        (0..24)
            .flat_map(|row| (0..100).map(move |col| (col, row)))
            .find(|(col, row)| hits.action_at(*col, *row) == Some(action))
            .expect("action drawn on screen")
    }
}

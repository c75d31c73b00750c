//! Terminal UI for Strictly Timetravel.

pub mod app;
pub mod hit_map;
pub mod input;
pub mod ui;

use crate::config::AppConfig;
use anyhow::Result;
use app::{App, Palette};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use hit_map::HitMap;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

/// How long one poll waits for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs the interactive game until the user quits.
///
/// # Errors
///
/// Returns terminal I/O errors. The terminal is restored first.
#[instrument(skip_all)]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting Strictly Timetravel TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(Palette::from_config(config));
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

/// Draw, wait for input, apply it; repeat until quit.
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        let mut hits = HitMap::new();
        terminal.draw(|f| hits = ui::draw(f, &app))?;
        app.set_hit_map(hits);

        if let Some(event) = input::poll_event(POLL_INTERVAL)? {
            app.handle_event(event);
        }
        if app.should_quit() {
            return Ok(());
        }
    }
}

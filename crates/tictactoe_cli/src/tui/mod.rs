//! Terminal UI for playing against the engine.

mod app;
mod ui;

pub use app::{App, AppAction};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tictactoe_core::Side;
use tracing::{error, info, instrument};

/// Runs the TUI until the player quits.
#[instrument]
pub fn run_tui(first: Side) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut terminal = setup_terminal().inspect_err(|err| {
        error!(error = ?err, "Terminal setup failed");
        disable_raw_mode().ok();
        execute!(io::stdout(), LeaveAlternateScreen).ok();
    })?;

    let res = run_app(&mut terminal, App::new(first));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    res
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == AppAction::Quit
        {
            info!("User quit");
            return Ok(());
        }
    }
}

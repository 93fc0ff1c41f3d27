//! Terminal UI for the game.

mod controller;
mod input;
pub mod layout;
pub mod ui;

pub use controller::GameController;
pub use input::{Input, classify};
pub use layout::GameLayout;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use tracing::{error, info, instrument, warn};

use crate::Settings;
use crate::games::tictactoe::GameState;

/// Mounts the game on the terminal and runs it until the user quits.
///
/// The terminal is restored on every path out, including setup failures.
#[instrument(skip_all)]
pub fn run_tui(settings: &Settings) -> Result<()> {
    info!(sort_order = ?settings.sort_order(), "Starting tic-tac-toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let res = mount_and_run(settings);
    let failures = restore_terminal(&mut io::stdout(), disable_raw_mode);
    if failures > 0 {
        warn!(failures, "Terminal only partly restored");
    }

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn mount_and_run(settings: &Settings) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")?;

    let mut controller = GameController::new(GameState::with_sort_order(settings.sort_order()));
    controller.run(&mut terminal)
}

/// Undoes raw mode, the alternate screen and mouse capture.
///
/// Every step runs even if an earlier one fails. Returns how many failed.
fn restore_terminal(out: &mut impl Write, disable_raw: impl FnOnce() -> io::Result<()>) -> usize {
    let mut failures = 0;
    if let Err(err) = disable_raw() {
        error!(error = %err, "Failed to disable raw mode");
        failures += 1;
    }
    if let Err(err) = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show) {
        error!(error = %err, "Failed to leave alternate screen");
        failures += 1;
    }
    failures
}

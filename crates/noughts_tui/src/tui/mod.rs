//! Terminal UI for noughts.

mod app;
mod input;
mod scheduler;
mod ui;

pub use app::{App, AppAction};
pub use input::{digit_to_index, move_cursor};
pub use scheduler::{AppEvent, OpponentScheduler};

use crate::config::NoughtsConfig;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_core::HeuristicOpponent;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the user quits.
#[instrument(skip_all, fields(mode = %config.mode(), delay_ms = config.opponent_delay_ms()))]
pub async fn run_tui(config: NoughtsConfig) -> Result<()> {
    info!("Starting noughts TUI");

    let opponent = match config.seed() {
        Some(seed) => HeuristicOpponent::seeded(*seed),
        None => HeuristicOpponent::from_entropy(),
    };
    let app = App::new(*config.mode(), opponent);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let scheduler = OpponentScheduler::new(event_tx, config.opponent_delay());

    let mut terminal = setup_terminal()?;

    let res = run_app(&mut terminal, app, &scheduler, &mut event_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Enters raw mode and the alternate screen.
fn setup_terminal() -> Result<Term> {
    enable_raw_mode()?;
    undo_on_error(|| enter_alternate_screen(io::stdout()), restore_terminal_mode)
}

fn enter_alternate_screen(mut stdout: Stdout) -> Result<Term> {
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal_mode() {
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
        error!(error = %e, "Failed to leave alternate screen");
    }
    if let Err(e) = disable_raw_mode() {
        error!(error = %e, "Failed to leave raw mode");
    }
}

/// Runs `step`, calling `undo` before returning its error.
fn undo_on_error<T>(step: impl FnOnce() -> Result<T>, undo: impl FnOnce()) -> Result<T> {
    let res = step();
    if res.is_err() {
        undo();
    }
    res
}

async fn run_app(
    terminal: &mut Term,
    mut app: App,
    scheduler: &OpponentScheduler,
    event_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        while let Ok(event) = event_rx.try_recv() {
            match event {
                AppEvent::OpponentTurn(generation) => app.on_opponent_turn(generation),
            }
        }

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match app.handle_key(key.code) {
                AppAction::Quit => {
                    info!("User quit");
                    return Ok(());
                }
                AppAction::ScheduleOpponent(generation) => scheduler.schedule(generation),
                AppAction::None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_step_is_undone() {
        let undone = Cell::new(false);
        let res: Result<()> = undo_on_error(
            || Err(anyhow::anyhow!("no alternate screen")),
            || undone.set(true),
        );
        assert!(undone.get());
        assert_eq!(res.unwrap_err().to_string(), "no alternate screen");
    }

    #[test]
    fn test_successful_step_is_kept() {
        let undone = Cell::new(false);
        let res = undo_on_error(|| Ok(7), || undone.set(true));
        assert!(!undone.get());
        assert_eq!(res.unwrap(), 7);
    }
}

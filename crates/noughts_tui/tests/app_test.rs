//! Tests for the terminal app state machine, driven without a terminal.

use crossterm::event::KeyCode;
use noughts_core::{Cell, GameMode, HeuristicOpponent, Mark};
use noughts_tui::tui::{App, AppAction, AppEvent, OpponentScheduler};
use std::time::Duration;
use tokio::sync::mpsc;

fn vs_computer() -> App {
    App::new(GameMode::VsOpponent, HeuristicOpponent::seeded(7))
}

fn two_player() -> App {
    App::new(GameMode::TwoPlayer, HeuristicOpponent::seeded(7))
}

#[test]
fn test_human_move_schedules_opponent() {
    let mut app = vs_computer();

    let action = app.handle_key(KeyCode::Char('1'));

    assert_eq!(action, AppAction::ScheduleOpponent(0));
    assert!(app.is_opponent_pending());
    assert_eq!(app.session().board().get(0), Some(Cell::Occupied(Mark::X)));
    assert_eq!(app.status(), "Computer is thinking...");
}

#[test]
fn test_opponent_turn_plays_o() {
    let mut app = vs_computer();
    app.handle_key(KeyCode::Char('1'));

    app.on_opponent_turn(0);

    assert!(!app.is_opponent_pending());
    assert_eq!(app.session().board().count(Mark::O), 1);
    // Center is open after a corner opening.
    assert_eq!(app.session().board().get(4), Some(Cell::Occupied(Mark::O)));
    assert_eq!(app.session().current_player(), Mark::X);
    assert!(app.status().starts_with("Computer played"));
}

#[test]
fn test_stale_opponent_turn_is_ignored_after_restart() {
    let mut app = vs_computer();
    let AppAction::ScheduleOpponent(generation) = app.handle_key(KeyCode::Char('5')) else {
        panic!("expected the opponent to be scheduled");
    };

    app.handle_key(KeyCode::Char('r'));
    app.on_opponent_turn(generation);

    assert_ne!(app.generation(), generation);
    assert_eq!(app.session().board().filled(), 0);
    assert_eq!(app.session().current_player(), Mark::X);
}

#[test]
fn test_game_ending_move_does_not_schedule_opponent() {
    let mut app = vs_computer();
    // Computer answers center, then blocks at 2, 3, and takes the last corner.
    for key in ['1', '2', '7', '6'] {
        let AppAction::ScheduleOpponent(generation) = app.handle_key(KeyCode::Char(key)) else {
            panic!("expected the opponent to be scheduled after {key}");
        };
        app.on_opponent_turn(generation);
    }
    assert_eq!(app.session().history(), &[0, 4, 1, 2, 6, 3, 5, 8]);

    assert_eq!(app.handle_key(KeyCode::Char('8')), AppAction::None);

    assert!(!app.is_opponent_pending());
    assert!(!app.session().is_active());
    assert!(app.status().starts_with("Game ended in a draw!"));
}

#[test]
fn test_input_blocked_while_opponent_pending() {
    let mut app = vs_computer();
    app.handle_key(KeyCode::Char('5'));

    let action = app.handle_key(KeyCode::Char('1'));

    assert_eq!(action, AppAction::None);
    assert_eq!(app.session().board().get(0), Some(Cell::Empty));
    assert_eq!(app.status(), "Wait for the computer to move.");
}

#[test]
fn test_two_player_never_schedules() {
    let mut app = two_player();

    assert_eq!(app.handle_key(KeyCode::Char('1')), AppAction::None);
    assert_eq!(app.handle_key(KeyCode::Char('2')), AppAction::None);

    assert_eq!(app.session().board().get(1), Some(Cell::Occupied(Mark::O)));
    assert!(app.status().starts_with("Player X's turn"));
}

#[test]
fn test_occupied_cell_reports_error() {
    let mut app = two_player();
    app.handle_key(KeyCode::Char('5'));

    app.handle_key(KeyCode::Char('5'));

    assert_eq!(
        app.status(),
        "Invalid move: Cell 4 is already occupied. Try again."
    );
    assert_eq!(app.session().current_player(), Mark::O);
}

#[test]
fn test_cursor_and_enter() {
    let mut app = two_player();
    app.handle_key(KeyCode::Up);
    app.handle_key(KeyCode::Left);

    app.handle_key(KeyCode::Enter);

    assert_eq!(app.session().board().get(0), Some(Cell::Occupied(Mark::X)));
}

#[test]
fn test_mode_toggle_restarts() {
    let mut app = vs_computer();
    app.handle_key(KeyCode::Char('5'));

    assert_eq!(app.handle_key(KeyCode::Char('m')), AppAction::None);

    assert_eq!(app.session().mode(), GameMode::TwoPlayer);
    assert_eq!(app.session().board().filled(), 0);
    assert!(!app.is_opponent_pending());
}

#[test]
fn test_win_status_and_quit() {
    let mut app = two_player();
    for key in ['1', '4', '2', '5', '3'] {
        app.handle_key(KeyCode::Char(key));
    }

    assert!(!app.session().is_active());
    assert!(app.status().starts_with("Player X wins!"));
    assert_eq!(app.handle_key(KeyCode::Char('q')), AppAction::Quit);
}

#[tokio::test]
async fn test_scheduled_turn_reaches_app() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let scheduler = OpponentScheduler::new(tx, Duration::from_millis(5));
    let mut app = vs_computer();

    let AppAction::ScheduleOpponent(generation) = app.handle_key(KeyCode::Char('1')) else {
        panic!("expected the opponent to be scheduled");
    };
    scheduler.schedule(generation);

    let Some(AppEvent::OpponentTurn(received)) = rx.recv().await else {
        panic!("scheduler dropped the turn");
    };
    app.on_opponent_turn(received);

    assert_eq!(app.session().history().len(), 2);
}

//! Application state and input handling.
//!
//! The app holds no game rules. Every key press becomes a call on the
//! [`GameSession`] or the opponent policy, and the app only tracks what the
//! screen needs: cursor, status line, and whether an opponent turn is pending.

use super::input::{digit_to_index, move_cursor};
use crossterm::event::KeyCode;
use noughts_core::{
    GameMode, GameSession, HeuristicOpponent, Mark, MoveOutcome, MovePolicy, Position,
};
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

/// What the event loop should do after the app handled an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Nothing beyond redrawing.
    None,
    /// Leave the application.
    Quit,
    /// Schedule the opponent's turn for this game generation.
    ScheduleOpponent(u64),
}

/// Main application state.
pub struct App {
    session: GameSession,
    opponent: HeuristicOpponent<StdRng>,
    cursor: Position,
    status: String,
    generation: u64,
    opponent_pending: bool,
}

impl App {
    /// Creates a new application starting a game in `mode`.
    pub fn new(mode: GameMode, opponent: HeuristicOpponent<StdRng>) -> Self {
        let session = GameSession::new(mode);
        let status = turn_status(&session);
        Self {
            session,
            opponent,
            cursor: Position::Center,
            status,
            generation: 0,
            opponent_pending: false,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns true while the computer is "thinking".
    pub fn is_opponent_pending(&self) -> bool {
        self.opponent_pending
    }

    /// Returns the current game generation; it changes on every restart.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => AppAction::Quit,
            KeyCode::Char('r') => {
                self.restart(self.session.mode());
                AppAction::None
            }
            KeyCode::Char('m') => {
                self.restart(self.session.mode().toggle());
                AppAction::None
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
                AppAction::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.human_move(self.cursor.to_index()),
            KeyCode::Char(c) => match digit_to_index(c) {
                Some(index) => {
                    if let Some(position) = Position::from_index(index) {
                        self.cursor = position;
                    }
                    self.human_move(index)
                }
                None => AppAction::None,
            },
            _ => AppAction::None,
        }
    }

    /// Plays the opponent's scheduled turn.
    ///
    /// Turns scheduled before a restart carry an old generation and are ignored.
    #[instrument(skip(self), fields(current = self.generation))]
    pub fn on_opponent_turn(&mut self, generation: u64) {
        if generation != self.generation || !self.session.is_opponent_turn() {
            debug!("Ignoring stale opponent turn");
            return;
        }
        self.opponent_pending = false;

        let mark = self.session.current_player();
        let Some(index) = self.opponent.select_move(self.session.board(), mark) else {
            warn!("Opponent found no empty cell");
            return;
        };

        match self.session.apply_move(index) {
            Ok(outcome) => {
                info!(index, %mark, "Opponent moved");
                self.status = outcome_status(&self.session, outcome, Some(index));
            }
            Err(e) => {
                warn!(index, error = %e, "Opponent move rejected");
                self.status = format!("Computer move failed: {}", e);
            }
        }
    }

    /// Restarts the game in `mode`.
    #[instrument(skip(self))]
    pub fn restart(&mut self, mode: GameMode) {
        info!("Restarting game");
        self.session.restart(mode);
        self.generation += 1;
        self.opponent_pending = false;
        self.cursor = Position::Center;
        self.status = turn_status(&self.session);
    }

    fn human_move(&mut self, index: usize) -> AppAction {
        if self.opponent_pending || self.session.is_opponent_turn() {
            self.status = "Wait for the computer to move.".to_string();
            return AppAction::None;
        }

        match self.session.apply_move(index) {
            Ok(outcome) => {
                debug!(index, ?outcome, "Human moved");
                if !outcome.is_terminal() && self.session.is_opponent_turn() {
                    self.opponent_pending = true;
                    self.status = "Computer is thinking...".to_string();
                    AppAction::ScheduleOpponent(self.generation)
                } else {
                    self.status = outcome_status(&self.session, outcome, None);
                    AppAction::None
                }
            }
            Err(e) => {
                self.status = format!("Invalid move: {}. Try again.", e);
                AppAction::None
            }
        }
    }
}

fn player_name(session: &GameSession, mark: Mark) -> String {
    if session.mode().opponent_mark() == Some(mark) {
        format!("Computer ({})", mark)
    } else {
        format!("Player {}", mark)
    }
}

fn turn_status(session: &GameSession) -> String {
    format!(
        "{}'s turn. Arrows + Enter or 1-9 to move.",
        player_name(session, session.current_player())
    )
}

fn outcome_status(session: &GameSession, outcome: MoveOutcome, played: Option<usize>) -> String {
    const AFTER: &str = "Press 'r' to restart, 'm' to switch mode or 'q' to quit.";
    match outcome {
        MoveOutcome::Continue => match played.and_then(Position::from_index) {
            Some(position) => format!("Computer played {}. {}", position, turn_status(session)),
            None => turn_status(session),
        },
        MoveOutcome::Win(_) => {
            let winner = session.winner().unwrap_or(session.current_player());
            format!("{} wins! {}", player_name(session, winner), AFTER)
        }
        MoveOutcome::Draw => format!("Game ended in a draw! {}", AFTER),
    }
}

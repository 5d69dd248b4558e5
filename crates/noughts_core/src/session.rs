//! Game session: board, turn order and terminal detection.

use crate::action::{MoveError, MoveOutcome, MoveResult};
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::position::Position;
use crate::rules::{WinLine, check_draw, check_win};
use crate::types::{Board, CELL_COUNT, GameMode, Mark};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    /// Game is ongoing and this mark moves next.
    AwaitingMove(Mark),
    /// Game ended with this mark completing a line.
    Won(Mark),
    /// Board filled with no line.
    Drawn,
}

/// One game of tic-tac-toe.
///
/// A session is a plain owned value: create one per game, pass it to whoever
/// handles input, and reset it to play again. Independent sessions share
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) current_player: Mark,
    pub(crate) active: bool,
    pub(crate) winner: Option<Mark>,
    pub(crate) winning_line: Option<WinLine>,
    pub(crate) mode: GameMode,
    pub(crate) history: Vec<usize>,
}

impl GameSession {
    /// Creates a fresh session: empty board, X to move.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        info!(%mode, "Creating new game session");
        Self {
            board: Board::new(),
            current_player: Mark::X,
            active: true,
            winner: None,
            winning_line: None,
            mode,
            history: Vec::new(),
        }
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// # Errors
    ///
    /// Rejects the move without touching the session when the index is off
    /// the board, the game is over, or the cell is taken.
    #[instrument(skip(self), fields(player = %self.current_player, mode = %self.mode))]
    pub fn apply_move(&mut self, index: usize) -> MoveResult {
        if index >= CELL_COUNT {
            warn!(index, "Move rejected: out of range");
            return Err(MoveError::OutOfRange(index));
        }
        if !self.active {
            warn!(index, "Move rejected: game is over");
            return Err(MoveError::GameInactive);
        }
        if !self.board.is_empty(index) {
            warn!(index, "Move rejected: cell occupied");
            return Err(MoveError::CellOccupied(index));
        }

        let player = self.current_player;
        self.board.place(index, player);
        self.history.push(index);

        let outcome = if let Some(line) = check_win(&self.board) {
            self.active = false;
            self.winner = Some(player);
            self.winning_line = Some(line);
            info!(%player, %line, "Game won");
            MoveOutcome::Win(line)
        } else if check_draw(&self.board) {
            self.active = false;
            info!("Game drawn");
            MoveOutcome::Draw
        } else {
            self.current_player = player.opponent();
            debug!(index, next = %self.current_player, "Move accepted");
            MoveOutcome::Continue
        };

        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "Session invariants violated after move {}: {:?}",
            index,
            SessionInvariants::check_all(self)
        );

        Ok(outcome)
    }

    /// Places the current player's mark at a named position.
    pub fn apply_position(&mut self, position: Position) -> MoveResult {
        self.apply_move(position.to_index())
    }

    /// Restores the initial state, keeping the mode.
    #[instrument(skip(self), fields(mode = %self.mode, moves = self.history.len()))]
    pub fn reset(&mut self) {
        info!("Resetting session");
        *self = Self::new(self.mode);
    }

    /// Resets the session and switches to `mode`.
    #[instrument(skip(self))]
    pub fn restart(&mut self, mode: GameMode) {
        *self = Self::new(mode);
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move (or the mark that made the final move once the game is over).
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the winner of a won game.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Returns the completed line of a won game.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    /// Returns the session mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns accepted move indices in play order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Returns where the session stands.
    pub fn state(&self) -> SessionState {
        match (self.active, self.winner) {
            (true, _) => SessionState::AwaitingMove(self.current_player),
            (false, Some(mark)) => SessionState::Won(mark),
            (false, None) => SessionState::Drawn,
        }
    }

    /// Returns true when the automated opponent should move next.
    pub fn is_opponent_turn(&self) -> bool {
        self.active && self.mode.opponent_mark() == Some(self.current_player)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

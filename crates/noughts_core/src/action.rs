//! Move results and rejections.

use crate::rules::WinLine;
use serde::{Deserialize, Serialize};

/// What an accepted move did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The game goes on and the other player is to move.
    Continue,
    /// The mover completed this line and won.
    Win(WinLine),
    /// The move filled the board without completing a line.
    Draw,
}

impl MoveOutcome {
    /// Returns true if the move ended the game.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continue)
    }
}

/// Reason a move was rejected. A rejected move never changes the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveError {
    /// Index is not on the board (must be 0-8).
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameInactive,

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),
}

impl std::error::Error for MoveError {}

/// Result of [`crate::GameSession::apply_move`].
pub type MoveResult = Result<MoveOutcome, MoveError>;

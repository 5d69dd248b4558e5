//! Draw detection logic for tic-tac-toe.

use super::win::check_win;
use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (no empty cells).
///
/// A full board can still hold a winning line; evaluate [`check_win`] first.
#[instrument]
pub fn check_draw(board: &Board) -> bool {
    board.is_full()
}

/// Checks for a finished game with no winner.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    check_draw(board) && check_win(board).is_none()
}

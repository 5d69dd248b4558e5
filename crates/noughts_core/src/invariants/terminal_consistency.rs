//! Terminal consistency: the active flag, winner and board agree.

use super::Invariant;
use crate::GameSession;
use crate::rules::{check_draw, check_win, winner};

/// Invariant: a session is over exactly when its board is won or full.
///
/// Active sessions have no winner and a board that is neither won nor full.
/// Won sessions record the board's winner and its first winning line. Drawn
/// sessions have a full board with no line.
pub struct TerminalConsistencyInvariant;

impl Invariant<GameSession> for TerminalConsistencyInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        match (session.is_active(), session.winner()) {
            (true, winner_mark) => {
                winner_mark.is_none()
                    && session.winning_line().is_none()
                    && check_win(board).is_none()
                    && !check_draw(board)
            }
            (false, Some(mark)) => {
                winner(board) == Some(mark) && session.winning_line() == check_win(board)
            }
            (false, None) => {
                session.winning_line().is_none() && check_draw(board) && check_win(board).is_none()
            }
        }
    }

    fn description() -> &'static str {
        "Game ends exactly on a win or a full board, and the winner matches the board"
    }
}

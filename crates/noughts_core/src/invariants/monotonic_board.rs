//! Monotonic board invariant: the board is exactly the replay of the history.

use super::Invariant;
use crate::{Cell, GameSession, Mark};

/// Invariant: every filled cell was played, in turn, and nothing else is filled.
///
/// The number of filled cells equals the history length, history indices are
/// distinct, and the cell at the n-th history index holds the mark of ply n
/// (X on even plies).
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();
        if session.board().filled() != history.len() {
            return false;
        }

        history.iter().enumerate().all(|(ply, &index)| {
            session.board().get(index) == Some(Cell::Occupied(Mark::for_ply(ply)))
                && !history[..ply].contains(&index)
        })
    }

    fn description() -> &'static str {
        "Board holds exactly the played moves, each with the mover's mark"
    }
}

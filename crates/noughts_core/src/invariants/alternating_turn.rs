//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameSession, Mark};

/// Invariant: players alternate turns, X first.
///
/// While the game is active the mark to move is X after an even number of
/// moves and O after an odd number. Once the game is over `current_player`
/// stays on the mark that made the final move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let moves = session.history().len();
        if session.is_active() {
            session.current_player() == Mark::for_ply(moves)
        } else {
            moves > 0 && session.current_player() == Mark::for_ply(moves - 1)
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

//! Heuristic opponent.
//!
//! The opponent looks one ply ahead and otherwise prefers the center, then
//! corners, then edges:
//!
//! 1. complete its own line if it can,
//! 2. block the other player's immediate win,
//! 3. take the center,
//! 4. take a random free corner,
//! 5. take a random free edge,
//! 6. take any random free cell.
//!
//! It does not search deeper, so double threats go unanswered and an expert
//! can beat it.

use crate::position::Position;
use crate::rules::check_win;
use crate::types::{Board, Mark};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Index of the center cell.
pub const CENTER: usize = 4;

/// Corner indices.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Edge indices.
pub const EDGES: [usize; 4] = [1, 3, 5, 7];

/// Which rule produced the opponent's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Completes the opponent's own line.
    Win,
    /// Stops the other player completing a line next turn.
    Block,
    /// Takes the center.
    Center,
    /// Takes a free corner.
    Corner,
    /// Takes a free edge.
    Edge,
    /// Takes any free cell.
    Fallback,
}

/// Something that can choose a move for a given mark.
pub trait MovePolicy {
    /// Chooses an empty index for `me` to play, or `None` on a full board.
    fn select_move(&mut self, board: &Board, me: Mark) -> Option<usize>;
}

/// The fixed-priority heuristic opponent.
///
/// Owns its random source so callers can seed it for reproducible games.
#[derive(Debug, Clone)]
pub struct HeuristicOpponent<R> {
    rng: R,
}

impl<R: Rng> HeuristicOpponent<R> {
    /// Creates an opponent drawing tie-breaks from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Chooses a move and reports which rule chose it.
    pub fn decide(&mut self, board: &Board, me: Mark) -> Option<(usize, Decision)> {
        decide(board, me, &mut self.rng)
    }
}

impl HeuristicOpponent<StdRng> {
    /// Creates an opponent with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates an opponent seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> MovePolicy for HeuristicOpponent<R> {
    fn select_move(&mut self, board: &Board, me: Mark) -> Option<usize> {
        select_move(board, me, &mut self.rng)
    }
}

/// Chooses a move for `me` on `board`.
///
/// Returns `None` when the board has no empty cell. The board is never
/// modified; candidate moves are tried on a copy.
pub fn select_move<R: Rng + ?Sized>(board: &Board, me: Mark, rng: &mut R) -> Option<usize> {
    decide(board, me, rng).map(|(index, _)| index)
}

/// Chooses a move for `me` on `board` and reports which rule chose it.
#[instrument(skip(board, rng), fields(empty = board.empty_indices().count()))]
pub fn decide<R: Rng + ?Sized>(board: &Board, me: Mark, rng: &mut R) -> Option<(usize, Decision)> {
    let open = Position::valid_moves(board);
    if open.is_empty() {
        debug!("Board is full; no move available");
        return None;
    }

    let decision = winning_move(board, me)
        .map(|index| (index, Decision::Win))
        .or_else(|| winning_move(board, me.opponent()).map(|index| (index, Decision::Block)))
        .or_else(|| board.is_empty(CENTER).then_some((CENTER, Decision::Center)))
        .or_else(|| random_empty(board, &CORNERS, rng).map(|index| (index, Decision::Corner)))
        .or_else(|| random_empty(board, &EDGES, rng).map(|index| (index, Decision::Edge)))
        .or_else(|| open.choose(rng).map(|pos| (pos.to_index(), Decision::Fallback)));

    if let Some((index, reason)) = decision {
        debug!(index, ?reason, "Opponent chose move");
    }
    decision
}

/// Returns the lowest empty index where `mark` would complete a line.
#[instrument(skip(board))]
pub fn winning_move(board: &Board, mark: Mark) -> Option<usize> {
    board.empty_indices().find(|&index| {
        let mut trial = *board;
        trial.place(index, mark);
        check_win(&trial).is_some()
    })
}

fn random_empty<R: Rng + ?Sized>(
    board: &Board,
    candidates: &[usize],
    rng: &mut R,
) -> Option<usize> {
    let free: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&index| board.is_empty(index))
        .collect();
    free.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_takes_win_before_block() {
        // O can win at 5; X threatens 2.
        let board = Board::with_marks(&[0, 1, 8], &[3, 4]).unwrap();
        assert_eq!(decide(&board, Mark::O, &mut rng()), Some((5, Decision::Win)));
    }

    #[test]
    fn test_blocks_threat() {
        let board = Board::with_marks(&[0, 1], &[4]).unwrap();
        assert_eq!(decide(&board, Mark::O, &mut rng()), Some((2, Decision::Block)));
    }

    #[test]
    fn test_lowest_winning_index_first() {
        // O can complete the left column at 6 or the middle row at 5.
        let board = Board::with_marks(&[1, 2, 8], &[0, 3, 4]).unwrap();
        assert_eq!(winning_move(&board, Mark::O), Some(5));
    }

    #[test]
    fn test_center_when_free() {
        let board = Board::with_marks(&[0], &[]).unwrap();
        assert_eq!(decide(&board, Mark::O, &mut rng()), Some((CENTER, Decision::Center)));
    }

    #[test]
    fn test_corner_when_center_taken() {
        let board = Board::with_marks(&[4], &[]).unwrap();
        let (index, reason) = decide(&board, Mark::O, &mut rng()).unwrap();
        assert_eq!(reason, Decision::Corner);
        assert!(CORNERS.contains(&index));
    }

    #[test]
    fn test_edge_when_corners_taken() {
        // X O X / _ X _ / O X O
        let board = Board::with_marks(&[0, 2, 4, 7], &[1, 6, 8]).unwrap();
        assert_eq!(winning_move(&board, Mark::X), None);
        assert_eq!(winning_move(&board, Mark::O), None);
        let (index, reason) = decide(&board, Mark::O, &mut rng()).unwrap();
        assert_eq!(reason, Decision::Edge);
        assert!([3, 5].contains(&index));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::with_marks(&[0, 2, 4, 5, 7], &[1, 3, 6, 8]).unwrap();
        assert_eq!(select_move(&board, Mark::O, &mut rng()), None);
    }

    #[test]
    fn test_policy_trait_matches_free_function() {
        let board = Board::with_marks(&[0, 1], &[4]).unwrap();
        let mut opponent = HeuristicOpponent::seeded(1);
        assert_eq!(opponent.select_move(&board, Mark::O), Some(2));
    }
}

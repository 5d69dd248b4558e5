//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three board indices that win when they hold the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([usize; 3]);

impl WinLine {
    /// Returns the three indices, in ascending order.
    pub fn indices(&self) -> [usize; 3] {
        self.0
    }

    /// Checks whether `index` lies on this line.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{}-{}-{}", a, b, c)
    }
}

/// The eight winning lines, in evaluation order.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    // Columns
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    // Diagonals
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

/// Returns the first line in [`WIN_LINES`] whose three cells hold the same mark.
#[instrument]
pub fn check_win(board: &Board) -> Option<WinLine> {
    WIN_LINES.iter().copied().find(|line| {
        let [a, b, c] = line.indices();
        let first = board.get(a);
        first != Some(Cell::Empty) && first == board.get(b) && first == board.get(c)
    })
}

/// Returns the mark owning the first winning line, if any.
#[instrument]
pub fn winner(board: &Board) -> Option<Mark> {
    let line = check_win(board)?;
    board.get(line.indices()[0]).and_then(Cell::mark)
}

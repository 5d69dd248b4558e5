//! Core domain types for tic-tac-toe.

use crate::action::MoveError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the mark that plays the given ply (0-based), X on even plies.
    pub fn for_ply(ply: usize) -> Self {
        if ply % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 board stored in row-major order (index = row * 3 + column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from raw cells.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Creates a board with X at `xs` and O at `os`.
    ///
    /// Later entries overwrite earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for the first index outside 0-8.
    pub fn with_marks(xs: &[usize], os: &[usize]) -> Result<Self, MoveError> {
        let mut board = Self::new();
        for &index in xs {
            board.set(index, Cell::Occupied(Mark::X))?;
        }
        for &index in os {
            board.set(index, Cell::Occupied(Mark::O))?;
        }
        Ok(board)
    }

    /// Gets the cell at `index` (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Overwrites the cell at `index`.
    ///
    /// This is raw board editing with no rules applied; sessions go through
    /// [`crate::GameSession::apply_move`].
    pub fn set(&mut self, index: usize, cell: Cell) -> Result<(), MoveError> {
        let slot = self
            .cells
            .get_mut(index)
            .ok_or(MoveError::OutOfRange(index))?;
        *slot = cell;
        Ok(())
    }

    /// Checks if the cell at `index` is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Iterates empty indices in ascending order.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELL_COUNT).filter(|&index| self.cells[index] == Cell::Empty)
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Counts cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// Counts non-empty cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|cell| **cell != Cell::Empty).count()
    }

    /// Writes `mark` at `index`. Callers validate bounds and emptiness first.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Cell::Occupied(mark);
    }
}

impl fmt::Display for Board {
    /// Renders the board with empty cells numbered 1-9.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Who sits across the board from the first player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameMode {
    /// Two humans share the board.
    TwoPlayer,
    /// A human plays X against the automated opponent playing O.
    #[default]
    VsOpponent,
}

impl GameMode {
    /// Returns the mark played by the automated opponent, if this mode has one.
    pub fn opponent_mark(self) -> Option<Mark> {
        match self {
            GameMode::TwoPlayer => None,
            GameMode::VsOpponent => Some(Mark::O),
        }
    }

    /// Returns the other mode.
    pub fn toggle(self) -> Self {
        match self {
            GameMode::TwoPlayer => GameMode::VsOpponent,
            GameMode::VsOpponent => GameMode::TwoPlayer,
        }
    }

    /// Returns the display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            GameMode::TwoPlayer => "Two players",
            GameMode::VsOpponent => "Versus computer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_toggles() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_empty_indices_ascending() {
        let board = Board::with_marks(&[0, 4], &[8]).unwrap();
        let empties: Vec<_> = board.empty_indices().collect();
        assert_eq!(empties, vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_set_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.set(9, Cell::Occupied(Mark::X)),
            Err(MoveError::OutOfRange(9))
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_with_marks_rejects_out_of_range() {
        assert_eq!(Board::with_marks(&[0], &[9]), Err(MoveError::OutOfRange(9)));
        assert_eq!(Board::with_marks(&[12], &[]), Err(MoveError::OutOfRange(12)));
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let board = Board::with_marks(&[0], &[4]).unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_mode_parses_kebab_case() {
        assert_eq!("two-player".parse::<GameMode>().ok(), Some(GameMode::TwoPlayer));
        assert_eq!(GameMode::VsOpponent.to_string(), "vs-opponent");
        assert_eq!(GameMode::VsOpponent.opponent_mark(), Some(Mark::O));
        assert_eq!(GameMode::TwoPlayer.opponent_mark(), None);
    }
}

//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Sessions and the opponent
//! policy both evaluate positions through these.

pub mod draw;
pub mod win;

pub use draw::{check_draw, is_draw};
pub use win::{WIN_LINES, WinLine, check_win, winner};

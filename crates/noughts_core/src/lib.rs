//! Noughts core - tic-tac-toe rules engine and heuristic opponent.
//!
//! This crate holds the game logic only. It performs no I/O and keeps no
//! global state; front ends own a [`GameSession`] per game and drive it
//! through a small command interface.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw detection over a [`Board`]
//! - **Session**: move validation, turn order and terminal detection
//! - **Opponent**: fixed-priority heuristic move selection
//! - **Invariants**: properties every session upholds, asserted in debug builds
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameMode, GameSession, HeuristicOpponent, MoveOutcome, MovePolicy};
//!
//! let mut session = GameSession::new(GameMode::VsOpponent);
//! let mut opponent = HeuristicOpponent::seeded(42);
//!
//! assert_eq!(session.apply_move(0), Ok(MoveOutcome::Continue));
//! assert!(session.is_opponent_turn());
//!
//! let reply = opponent
//!     .select_move(session.board(), session.current_player())
//!     .expect("board has empty cells");
//! assert_eq!(reply, 4);
//! session.apply_move(reply).unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
pub mod opponent;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::{MoveError, MoveOutcome, MoveResult};
pub use opponent::{Decision, HeuristicOpponent, MovePolicy, select_move};
pub use position::Position;
pub use rules::{WIN_LINES, WinLine, check_draw, check_win};
pub use session::{GameSession, SessionState};
pub use types::{Board, CELL_COUNT, Cell, GameMode, Mark};

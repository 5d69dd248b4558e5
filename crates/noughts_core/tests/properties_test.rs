//! Property tests for the rules engine and opponent.

use noughts_core::{
    Board, CELL_COUNT, Cell, GameMode, GameSession, Mark, MoveError, MoveOutcome, WIN_LINES,
    check_win, select_move,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Empty),
        Just(Cell::Occupied(Mark::X)),
        Just(Cell::Occupied(Mark::O)),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(cell()).prop_map(Board::from_cells)
}

fn has_line(board: &Board) -> bool {
    WIN_LINES.iter().any(|line| {
        let [a, b, c] = line.indices();
        let cells = board.cells();
        cells[a] != Cell::Empty && cells[a] == cells[b] && cells[b] == cells[c]
    })
}

proptest! {
    #[test]
    fn check_win_iff_some_line_is_uniform(board in board()) {
        let found = check_win(&board);
        prop_assert_eq!(found.is_some(), has_line(&board));
        if let Some(line) = found {
            let [a, b, c] = line.indices();
            let cells = board.cells();
            prop_assert!(cells[a] != Cell::Empty);
            prop_assert_eq!(cells[a], cells[b]);
            prop_assert_eq!(cells[b], cells[c]);
        }
    }

    #[test]
    fn players_alternate_and_rejections_never_mutate(
        moves in prop::collection::vec(0usize..12, 0..40)
    ) {
        let mut session = GameSession::new(GameMode::TwoPlayer);
        let mut accepted = 0usize;

        for index in moves {
            let before = session.clone();
            match session.apply_move(index) {
                Ok(outcome) => {
                    let mover = if accepted % 2 == 0 { Mark::X } else { Mark::O };
                    prop_assert_eq!(session.board().get(index), Some(Cell::Occupied(mover)));
                    accepted += 1;
                    match outcome {
                        MoveOutcome::Continue => {
                            prop_assert_eq!(session.current_player(), mover.opponent());
                        }
                        MoveOutcome::Win(_) => {
                            prop_assert_eq!(session.winner(), Some(mover));
                            prop_assert!(!session.is_active());
                        }
                        MoveOutcome::Draw => {
                            prop_assert!(session.board().is_full());
                            prop_assert!(!session.is_active());
                        }
                    }
                }
                Err(error) => {
                    prop_assert_eq!(&session, &before);
                    match error {
                        MoveError::OutOfRange(i) => prop_assert!(i >= CELL_COUNT),
                        MoveError::GameInactive => prop_assert!(!before.is_active()),
                        MoveError::CellOccupied(i) => prop_assert!(!before.board().is_empty(i)),
                    }
                }
            }
            // The winner is only ever recorded on a finished game.
            prop_assert!(session.winner().is_none() || !session.is_active());
        }
        prop_assert_eq!(session.history().len(), accepted);
    }

    #[test]
    fn reset_restores_fresh_session_from_any_state(
        mode in prop_oneof![Just(GameMode::TwoPlayer), Just(GameMode::VsOpponent)],
        moves in prop::collection::vec(0usize..12, 0..40),
    ) {
        let mut session = GameSession::new(mode);
        for index in moves {
            let _ = session.apply_move(index);
        }

        session.reset();

        prop_assert_eq!(&session, &GameSession::new(mode));
        prop_assert!(session.is_active());
        prop_assert_eq!(session.current_player(), Mark::X);
    }

    #[test]
    fn opponent_picks_empty_cell_and_leaves_board_alone(
        board in board(),
        seed in any::<u64>(),
        me in prop_oneof![Just(Mark::X), Just(Mark::O)],
    ) {
        let before = board;
        let mut rng = StdRng::seed_from_u64(seed);
        match select_move(&board, me, &mut rng) {
            Some(index) => prop_assert!(board.is_empty(index)),
            None => prop_assert!(board.is_full()),
        }
        prop_assert_eq!(board, before);
    }
}

//! Headless self-play: the heuristic opponent plays both sides.

use noughts_core::{Decision, GameMode, GameSession, HeuristicOpponent, SessionState};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// Tally of a self-play run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    /// Games played.
    pub games: u32,
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
    /// How often each heuristic rule picked the move.
    pub decisions: BTreeMap<Decision, u32>,
}

impl SimulationReport {
    /// Adds one finished session to the tally.
    fn record(&mut self, state: SessionState) {
        self.games += 1;
        match state {
            SessionState::Won(noughts_core::Mark::X) => self.x_wins += 1,
            SessionState::Won(noughts_core::Mark::O) => self.o_wins += 1,
            SessionState::Drawn => self.draws += 1,
            SessionState::AwaitingMove(mark) => {
                warn!(%mark, "Recorded a game that had not finished");
            }
        }
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Games:  {}", self.games)?;
        writeln!(f, "X wins: {}", self.x_wins)?;
        writeln!(f, "O wins: {}", self.o_wins)?;
        write!(f, "Draws:  {}", self.draws)?;
        for (decision, count) in &self.decisions {
            write!(f, "\n  {:?}: {}", decision, count)?;
        }
        Ok(())
    }
}

/// Plays `games` heuristic-vs-heuristic games from one seeded opponent.
#[instrument]
pub fn run_simulation(games: u32, seed: u64) -> SimulationReport {
    info!("Starting self-play");
    let mut opponent = HeuristicOpponent::seeded(seed);
    let mut report = SimulationReport::default();
    let mut session = GameSession::new(GameMode::TwoPlayer);

    for game in 0..games {
        session.reset();
        loop {
            let mark = session.current_player();
            let Some((index, decision)) = opponent.decide(session.board(), mark) else {
                break;
            };
            *report.decisions.entry(decision).or_default() += 1;
            match session.apply_move(index) {
                Ok(outcome) if outcome.is_terminal() => break,
                Ok(_) => {}
                Err(e) => {
                    warn!(game, index, error = %e, "Opponent move rejected");
                    break;
                }
            }
        }
        debug!(
            game,
            state = ?session.state(),
            moves = session.history().len(),
            "Game finished"
        );
        report.record(session.state());
    }

    info!(
        x_wins = report.x_wins,
        o_wins = report.o_wins,
        draws = report.draws,
        "Self-play finished"
    );
    report
}

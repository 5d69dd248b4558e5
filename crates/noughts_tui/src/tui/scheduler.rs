//! Delayed opponent turns.
//!
//! The computer's move is not computed on a timer thread. The timer only
//! posts [`AppEvent::OpponentTurn`] back to the UI loop, which then asks the
//! policy for a move and applies it like any other.

use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Events delivered to the UI loop from background tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The opponent's thinking delay for this game generation has elapsed.
    OpponentTurn(u64),
}

/// Posts opponent turns after a fixed delay.
#[derive(Debug, Clone)]
pub struct OpponentScheduler {
    tx: mpsc::UnboundedSender<AppEvent>,
    delay: Duration,
}

impl OpponentScheduler {
    /// Creates a scheduler posting to `tx` after `delay`.
    pub fn new(tx: mpsc::UnboundedSender<AppEvent>, delay: Duration) -> Self {
        Self { tx, delay }
    }

    /// Schedules the opponent's turn for `generation`.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&self, generation: u64) {
        let tx = self.tx.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(AppEvent::OpponentTurn(generation)).is_err() {
                debug!(generation, "UI loop gone; dropping opponent turn");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_posts_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let scheduler = OpponentScheduler::new(tx, Duration::from_millis(5));
        scheduler.schedule(3);
        assert_eq!(rx.recv().await, Some(AppEvent::OpponentTurn(3)));
    }
}

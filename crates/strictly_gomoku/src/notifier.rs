//! Delivery of the terminal outcome.
//!
//! The engine hands each finished game's outcome to a [`ResultNotifier`]
//! exactly once. Name prompts, score keeping and effects live behind it.

use crate::phases::Outcome;
use tracing::info;

/// Receives the outcome of every finished game.
pub trait ResultNotifier {
    /// Called once when a game reaches `Ended`.
    fn notify(&mut self, outcome: Outcome);
}

impl<F> ResultNotifier for F
where
    F: FnMut(Outcome),
{
    fn notify(&mut self, outcome: Outcome) {
        self(outcome)
    }
}

/// Emits the outcome as a tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl ResultNotifier for LogNotifier {
    fn notify(&mut self, outcome: Outcome) {
        info!(%outcome, winner = ?outcome.winner(), "Game result");
    }
}

/// Keeps every outcome it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    outcomes: Vec<Outcome>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Outcomes received so far, oldest first.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }
}

impl ResultNotifier for RecordingNotifier {
    fn notify(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }
}

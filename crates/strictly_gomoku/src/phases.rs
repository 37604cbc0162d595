//! Game phases and outcomes.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Top-level phase of a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum Phase {
    /// No stone placed yet.
    #[default]
    NotStarted,
    /// At least one stone placed, no terminal condition reached.
    InProgress,
    /// Terminal. Only a reset leaves this phase.
    Ended,
}

/// Result of a game.
///
/// Meaningful only once the phase is [`Phase::Ended`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// The game has not finished.
    #[default]
    Undecided,
    /// Player won, either by five in a row or on time.
    WonBy(Player),
    /// The board filled up without a winning line.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::WonBy(player) => Some(*player),
            Outcome::Undecided | Outcome::Tie => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "Undecided"),
            Outcome::WonBy(player) => write!(f, "{} wins", player),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

//! First-class action types for gomoku.
//!
//! Moves are domain events, not side effects. They carry the player's intent
//! and are recorded in the game history once accepted.

use crate::phases::Phase;
use crate::types::{Player, Position};
use serde::{Deserialize, Serialize};

/// A stone placed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player placing the stone.
    pub player: Player,
    /// Where the stone went.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Why a move was rejected.
///
/// Rejections are values, not failures: the game state is unchanged and the
/// caller simply re-renders it.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinates fall outside the 15x15 grid.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a stone.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game is not accepting moves in its current phase.
    #[display("Game is not in progress ({})", _0)]
    GameNotInProgress(Phase),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

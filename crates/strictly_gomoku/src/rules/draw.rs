//! Tie detection logic for gomoku.

use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (no empty cell left).
///
/// Only meaningful as a tie once the final move has been checked for a win.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

//! Contract-based validation for gomoku.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::MoveError;
use crate::invariants::{GomokuInvariants, InvariantSet};
use crate::phases::Phase;
use crate::state::GameState;
use crate::types::Position;
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the coordinates lie on the 15x15 grid.
pub struct InBounds;

impl InBounds {
    /// Returns the checked position.
    pub fn check(row: usize, col: usize) -> Result<Position, MoveError> {
        Position::new(row, col)
    }
}

/// Precondition: the target cell holds no stone.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with `CellOccupied` when a stone is already there.
    pub fn check(pos: Position, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(pos))
        }
    }
}

/// Precondition: the game is accepting regular moves.
pub struct GameIsInProgress;

impl GameIsInProgress {
    /// Fails with `GameNotInProgress` unless the phase is `InProgress`.
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        match game.phase() {
            Phase::InProgress => Ok(()),
            phase => Err(MoveError::GameNotInProgress(phase)),
        }
    }
}

/// Coordinate and occupancy checks shared by every placement.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates the target cell without looking at the phase.
    pub fn check(game: &GameState, row: usize, col: usize) -> Result<Position, MoveError> {
        let pos = InBounds::check(row, col)?;
        CellIsEmpty::check(pos, game)?;
        Ok(pos)
    }
}

/// Validates a mid-game move.
///
/// Pure predicate: the game is never touched. The opening move is placed
/// while the phase is still `NotStarted`, so it goes through
/// [`LegalPlacement`] instead (see [`MoveContract`]).
pub struct MoveValidator;

impl MoveValidator {
    /// Rejects moves made outside `InProgress`, off the grid, or onto a stone.
    #[instrument(skip(game), fields(phase = %game.phase()))]
    pub fn validate(game: &GameState, row: usize, col: usize) -> Result<Position, MoveError> {
        GameIsInProgress::check(game)?;
        LegalPlacement::check(game, row, col)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for stone placements, keyed on `(row, col)`.
///
/// Preconditions:
/// - `NotStarted`: the cell is on the grid and empty (opening move)
/// - `InProgress`: [`MoveValidator`] passes
/// - `Ended`: always rejected
///
/// Postconditions:
/// - Board remains monotonic
/// - Players still alternate
/// - Clocks stay within their allotment
pub struct MoveContract;

impl Contract<GameState, (usize, usize)> for MoveContract {
    fn pre(game: &GameState, action: &(usize, usize)) -> Result<(), MoveError> {
        let (row, col) = *action;
        let checked = match game.phase() {
            Phase::NotStarted => LegalPlacement::check(game, row, col),
            Phase::InProgress | Phase::Ended => MoveValidator::validate(game, row, col),
        };
        if let Err(ref reason) = checked {
            debug!(row, col, %reason, "Move rejected");
        }
        checked.map(|_| ())
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), MoveError> {
        GomokuInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

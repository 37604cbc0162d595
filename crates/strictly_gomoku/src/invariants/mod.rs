//! First-class invariants for gomoku.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are testable independently and back the move postcondition.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        tracing::warn!(invariant = I::description(), "Invariant violated");
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_turn;
pub mod clock_bounds;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use clock_bounds::ClockBoundsInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// All gomoku invariants as a composable set.
pub type GomokuInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    ClockBoundsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GameState;
    use crate::types::{Player, Position};

    fn positions(coords: &[(usize, usize)]) -> Vec<Position> {
        coords
            .iter()
            .map(|&(r, c)| Position::new(r, c).unwrap())
            .collect()
    }

    #[test]
    fn test_invariant_set_holds_for_fresh_game() {
        assert!(GomokuInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = GameState::replay(&positions(&[(7, 7), (7, 8), (8, 8), (6, 6)])).unwrap();
        assert!(GomokuInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = GameState::replay(&positions(&[(7, 7)])).unwrap();
        game.board.place_stone(0, 0, Player::Black).unwrap();
        game.current_turn = Player::Black;

        let violations = GomokuInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        let game = GameState::replay(&positions(&[(0, 0), (1, 1)])).unwrap();
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}

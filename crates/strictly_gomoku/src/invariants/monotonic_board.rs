//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::state::GameState;
use crate::types::Board;

/// Invariant: no cell is written twice and every stone comes from a move.
///
/// Verified by replaying the move history onto an empty board and comparing.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            let pos = mov.position;
            if reconstructed
                .place_stone(pos.row(), pos.col(), mov.player)
                .is_err()
            {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::types::{Player, Position};

    #[test]
    fn test_fresh_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_moves_hold() {
        let mut game = GameState::new();
        for (row, col) in [(7, 7), (7, 8), (8, 7), (0, 14)] {
            game.place_stone(row, col).unwrap();
        }
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_stray_stone_violates() {
        let mut game = GameState::new();
        game.place_stone(7, 7).unwrap();
        game.board.place_stone(1, 1, Player::White).unwrap();
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_double_write_in_history_violates() {
        let mut game = GameState::new();
        game.place_stone(7, 7).unwrap();
        let centre = Position::new(7, 7).unwrap();
        game.history.push(Move::new(Player::White, centre));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}

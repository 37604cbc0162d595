//! Clock bounds invariant: clocks only count down, and the right one runs.

use super::Invariant;
use crate::phases::Phase;
use crate::state::GameState;
use crate::types::Player;

/// Invariant: neither clock exceeds its starting allotment, and while the
/// game is in progress the running clock belongs to the player to move.
pub struct ClockBoundsInvariant;

impl Invariant<GameState> for ClockBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        let clock = game.clock();
        let within = [Player::Black, Player::White]
            .into_iter()
            .all(|player| clock.remaining(player) <= clock.initial());

        within && (game.phase() != Phase::InProgress || clock.active() == game.current_turn())
    }

    fn description() -> &'static str {
        "Clocks never exceed the allotment and the player to move owns the running clock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_holds() {
        assert!(ClockBoundsInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_after_ticks_and_moves() {
        let mut game = GameState::new();
        game.place_stone(7, 7).unwrap();
        for _ in 0..5 {
            game.tick();
        }
        game.place_stone(7, 8).unwrap();
        game.tick();
        assert!(ClockBoundsInvariant::holds(&game));
        assert_eq!(game.remaining_seconds(Player::White), 595);
        assert_eq!(game.remaining_seconds(Player::Black), 599);
    }

    #[test]
    fn test_wrong_clock_running_violates() {
        let mut game = GameState::new();
        game.place_stone(7, 7).unwrap();
        game.clock.switch_active(Player::Black);
        assert!(!ClockBoundsInvariant::holds(&game));
    }
}

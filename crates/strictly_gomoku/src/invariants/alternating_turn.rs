//! Alternating turn invariant: Black, White, Black, ...

use super::Invariant;
use crate::phases::Phase;
use crate::state::GameState;
use crate::types::Player;

/// Invariant: players alternate turns, Black first.
///
/// While the game is in progress, the player to move is the opponent of
/// whoever moved last. Before the first move, Black is to move and the
/// history is empty.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        if let Some(first) = history.first() {
            if first.player != Player::Black {
                return false;
            }
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        match (game.phase(), history.last()) {
            (Phase::NotStarted, None) => game.current_turn() == Player::Black,
            (Phase::NotStarted, Some(_)) => false,
            (Phase::InProgress, Some(last)) => game.current_turn() == last.player.opponent(),
            (Phase::InProgress, None) => false,
            // Frozen at whatever it was when the game ended.
            (Phase::Ended, _) => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (Black, White, Black, ...)"
    }
}

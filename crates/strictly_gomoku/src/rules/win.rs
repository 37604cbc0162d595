//! Win detection logic for gomoku.
//!
//! Only the four lines through the stone just played can have changed, so the
//! search walks outward from that stone instead of rescanning the board.

use crate::action::Move;
use crate::types::{Board, Cell, Player, Position};
use tracing::{debug, instrument};

/// Stones in a row needed to win. Longer runs (overlines) also win.
pub const WIN_LENGTH: usize = 5;

/// Axis directions as `(d_row, d_col)`: horizontal, vertical, and the two diagonals.
pub const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Counts consecutive stones of `player` stepping away from `pos`.
///
/// Stops at the edge, an empty cell, or an opponent stone, and never looks
/// further than `WIN_LENGTH - 1` cells.
fn count_direction(
    board: &Board,
    pos: Position,
    player: Player,
    d_row: isize,
    d_col: isize,
) -> usize {
    (1..WIN_LENGTH as isize)
        .map_while(|step| pos.offset(d_row, d_col, step))
        .take_while(|next| board.get(*next) == Cell::Stone(player))
        .count()
}

/// Length of the run of `player` stones through `pos` along one axis.
///
/// The stone at `pos` counts as one. Each direction contributes at most
/// `WIN_LENGTH - 1`, which is enough to decide whether the run wins.
pub fn run_through(board: &Board, pos: Position, player: Player, axis: (isize, isize)) -> usize {
    let (d_row, d_col) = axis;
    1 + count_direction(board, pos, player, d_row, d_col)
        + count_direction(board, pos, player, -d_row, -d_col)
}

/// Checks whether the given move completes five or more in a row.
///
/// Returns `Some(player)` for a winning move and stops at the first axis
/// that reaches the target.
#[instrument(skip(board), fields(player = %last.player, position = %last.position))]
pub fn check_winner(board: &Board, last: Move) -> Option<Player> {
    let winning_axis = AXES
        .iter()
        .copied()
        .find(|axis| run_through(board, last.position, last.player, *axis) >= WIN_LENGTH)?;
    debug!(?winning_axis, "Winning line found");
    Some(last.player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(usize, usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(row, col, player) in stones {
            board.place_stone(row, col, player).unwrap();
        }
        board
    }

    fn mv(row: usize, col: usize, player: Player) -> Move {
        Move::new(player, Position::new(row, col).unwrap())
    }

    #[test]
    fn test_no_winner_single_stone() {
        let board = board_with(&[(7, 7, Player::Black)]);
        assert_eq!(check_winner(&board, mv(7, 7, Player::Black)), None);
    }

    #[test]
    fn test_horizontal_five() {
        let stones: Vec<_> = (3..8).map(|c| (4, c, Player::White)).collect();
        let board = board_with(&stones);
        assert_eq!(check_winner(&board, mv(4, 7, Player::White)), Some(Player::White));
    }

    #[test]
    fn test_vertical_five_played_in_the_middle() {
        let stones: Vec<_> = (10..15).map(|r| (r, 0, Player::Black)).collect();
        let board = board_with(&stones);
        assert_eq!(check_winner(&board, mv(12, 0, Player::Black)), Some(Player::Black));
    }

    #[test]
    fn test_main_diagonal_five() {
        let stones: Vec<_> = (0..5).map(|i| (i, i, Player::Black)).collect();
        let board = board_with(&stones);
        assert_eq!(check_winner(&board, mv(0, 0, Player::Black)), Some(Player::Black));
    }

    #[test]
    fn test_anti_diagonal_five() {
        let stones: Vec<_> = (0..5).map(|i| (i, 14 - i, Player::White)).collect();
        let board = board_with(&stones);
        assert_eq!(check_winner(&board, mv(2, 12, Player::White)), Some(Player::White));
    }

    #[test]
    fn test_four_is_not_enough() {
        let stones: Vec<_> = (0..4).map(|c| (0, c, Player::Black)).collect();
        let board = board_with(&stones);
        assert_eq!(check_winner(&board, mv(0, 3, Player::Black)), None);
    }

    #[test]
    fn test_overline_counts_as_win() {
        // Filling the gap in X X X _ X X makes six.
        let mut stones: Vec<_> = [0, 1, 2, 4, 5].iter().map(|&c| (9, c, Player::Black)).collect();
        stones.push((9, 3, Player::Black));
        let board = board_with(&stones);
        assert_eq!(run_through(&board, Position::new(9, 3).unwrap(), Player::Black, (0, 1)), 6);
        assert_eq!(check_winner(&board, mv(9, 3, Player::Black)), Some(Player::Black));
    }

    #[test]
    fn test_opponent_stone_breaks_run() {
        let board = board_with(&[
            (5, 0, Player::Black),
            (5, 1, Player::Black),
            (5, 2, Player::White),
            (5, 3, Player::Black),
            (5, 4, Player::Black),
            (5, 5, Player::Black),
        ]);
        assert_eq!(check_winner(&board, mv(5, 3, Player::Black)), None);
    }

    #[test]
    fn test_gap_breaks_run() {
        let board = board_with(&[
            (1, 1, Player::White),
            (2, 2, Player::White),
            (4, 4, Player::White),
            (5, 5, Player::White),
            (6, 6, Player::White),
        ]);
        assert_eq!(check_winner(&board, mv(4, 4, Player::White)), None);
    }

    #[test]
    fn test_only_the_movers_colour_counts() {
        let stones: Vec<_> = (0..5).map(|c| (14, c, Player::White)).collect();
        let mut board = board_with(&stones);
        board.place_stone(13, 0, Player::Black).unwrap();
        assert_eq!(check_winner(&board, mv(13, 0, Player::Black)), None);
    }
}

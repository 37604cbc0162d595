//! Game rules for gomoku.
//!
//! Pure functions evaluating a board after a move. Rules are kept apart from
//! board storage so the controller and the contract checks share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, run_through, AXES, WIN_LENGTH};

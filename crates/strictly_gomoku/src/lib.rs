//! Strictly Gomoku - a five-in-a-row decision engine.
//!
//! The engine is UI-agnostic: a caller feeds it discrete events and reads
//! back a render-ready snapshot.
//!
//! # Architecture
//!
//! - **Board**: 15x15 grid with single-occupancy placement
//! - **Rules**: win detection around the last stone, tie on a full board
//! - **Contracts**: move validation and invariant-backed postconditions
//! - **Clock**: two countdown clocks, one running at a time
//! - **Controller**: the state machine and terminal-outcome delivery
//!
//! # Example
//!
//! ```
//! use strictly_gomoku::{GameController, Outcome, Phase, Player, RecordingNotifier};
//!
//! let mut game = GameController::new(RecordingNotifier::new());
//! for col in 0..5 {
//!     game.place_stone(7, col).unwrap();
//!     if col < 4 {
//!         game.place_stone(0, col).unwrap();
//!     }
//! }
//! assert_eq!(game.phase(), Phase::Ended);
//! assert_eq!(game.notifier().outcomes(), &[Outcome::WonBy(Player::Black)]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod clock;
mod contracts;
mod controller;
mod invariants;
mod notifier;
mod phases;
mod rules;
mod state;
mod types;

// Crate-level exports - Domain types
pub use action::{Move, MoveError};
pub use phases::{Outcome, Phase};
pub use types::{Board, Cell, Player, Position, BOARD_SIZE};

// Crate-level exports - Rules
pub use rules::{check_winner, is_full, run_through, AXES, WIN_LENGTH};

// Crate-level exports - Clock
pub use clock::{ClockTick, TurnClock, DEFAULT_CLOCK_SECONDS};

// Crate-level exports - Contracts and invariants
pub use contracts::{
    CellIsEmpty, Contract, GameIsInProgress, InBounds, LegalPlacement, MoveContract, MoveValidator,
};
pub use invariants::{
    AlternatingTurnInvariant, ClockBoundsInvariant, GomokuInvariants, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant,
};

// Crate-level exports - State machine
pub use controller::GameController;
pub use notifier::{LogNotifier, RecordingNotifier, ResultNotifier};
pub use state::{Effect, Event, GameState, Transition};

//! Game state and the event reducer.
//!
//! `GameState` is the render-ready aggregate. Every change goes through
//! [`GameState::apply`] (pure) or the controller, one event at a time.

use crate::action::{Move, MoveError};
use crate::clock::{ClockTick, DEFAULT_CLOCK_SECONDS, TurnClock};
use crate::contracts::{Contract, MoveContract};
use crate::phases::{Outcome, Phase};
use crate::rules::{check_winner, is_full};
use crate::types::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Something that happens to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Current player puts a stone at `(row, col)`.
    PlaceStone {
        /// Row (0-14).
        row: usize,
        /// Column (0-14).
        col: usize,
    },
    /// One second elapsed.
    Tick,
    /// Start over.
    Reset,
}

/// What an accepted event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// A stone went down and play continues.
    Placed(Move),
    /// The clock was advanced, or stayed idle.
    Ticked(ClockTick),
    /// The game ended on this event.
    Finished(Outcome),
    /// The game was reinitialised.
    Reset,
}

/// Result of reducing one event.
#[derive(Debug, Clone)]
pub struct Transition {
    /// State after the event. Identical to the input when rejected.
    pub state: GameState,
    /// What happened, or why the event was rejected.
    pub result: Result<Effect, MoveError>,
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_turn: Player,
    pub(crate) clock: TurnClock,
    pub(crate) phase: Phase,
    pub(crate) outcome: Outcome,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh game with ten minutes per player.
    pub fn new() -> Self {
        Self::with_clock_seconds(DEFAULT_CLOCK_SECONDS)
    }

    /// Creates a fresh game with `seconds` on each clock.
    pub fn with_clock_seconds(seconds: u32) -> Self {
        Self {
            board: Board::new(),
            current_turn: Player::Black,
            clock: TurnClock::new(seconds),
            phase: Phase::NotStarted,
            outcome: Outcome::Undecided,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    /// Returns the clock pair.
    pub fn clock(&self) -> &TurnClock {
        &self.clock
    }

    /// Returns the phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the outcome (`Undecided` until the game ends).
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Seconds left on `player`'s clock.
    pub fn remaining_seconds(&self, player: Player) -> u32 {
        self.clock.remaining(player)
    }

    /// `player`'s remaining time as `mm:ss`.
    pub fn clock_display(&self, player: Player) -> String {
        self.clock.display(player)
    }

    /// Reduces one event without touching `self`.
    #[instrument(skip(self))]
    pub fn apply(&self, event: Event) -> Transition {
        let mut state = self.clone();
        let result = match event {
            Event::PlaceStone { row, col } => state.place_stone(row, col),
            Event::Tick => Ok(state.tick()),
            Event::Reset => Ok(state.reset()),
        };
        Transition { state, result }
    }

    /// Rebuilds a game from a sequence of coordinates, Black first.
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for pos in moves {
            game.place_stone(pos.row(), pos.col())?;
        }
        Ok(game)
    }

    /// Places a stone for the current player.
    ///
    /// A rejected move leaves the state exactly as it was.
    #[instrument(skip(self), fields(player = %self.current_turn, phase = %self.phase))]
    pub(crate) fn place_stone(&mut self, row: usize, col: usize) -> Result<Effect, MoveError> {
        MoveContract::pre(self, &(row, col))?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.current_turn;
        let position = self.board.place_stone(row, col, player)?;
        let action = Move::new(player, position);
        self.history.push(action);
        if self.phase == Phase::NotStarted {
            info!(%action, "Game started");
            self.phase = Phase::InProgress;
        }

        if let Some(winner) = check_winner(&self.board, action) {
            return Ok(Effect::Finished(self.finish(Outcome::WonBy(winner))));
        }

        if is_full(&self.board) {
            return Ok(Effect::Finished(self.finish(Outcome::Tie)));
        }

        self.current_turn = player.opponent();
        self.clock.switch_active(self.current_turn);

        #[cfg(debug_assertions)]
        {
            if let Err(violation) = MoveContract::post(&before, self) {
                tracing::warn!(%violation, "Rolling back move");
                *self = before;
                return Err(violation);
            }
        }

        debug!(%action, next = %self.current_turn, "Move accepted");
        Ok(Effect::Placed(action))
    }

    /// Advances the active clock. A clock reaching zero loses the game.
    pub(crate) fn tick(&mut self) -> Effect {
        match self.clock.tick(self.phase) {
            ClockTick::Expired(loser) => {
                info!(%loser, "Clock expired");
                Effect::Finished(self.finish(Outcome::WonBy(loser.opponent())))
            }
            other => Effect::Ticked(other),
        }
    }

    /// Back to a fresh game with the same time allotment.
    pub(crate) fn reset(&mut self) -> Effect {
        *self = Self::with_clock_seconds(self.clock.initial());
        debug!("Game reset");
        Effect::Reset
    }

    pub(crate) fn finish(&mut self, outcome: Outcome) -> Outcome {
        self.phase = Phase::Ended;
        self.outcome = outcome;
        info!(%outcome, moves = self.history.len(), "Game over");
        outcome
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

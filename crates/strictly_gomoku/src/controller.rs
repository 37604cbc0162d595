//! The game controller: single authority over one game.
//!
//! Callers deliver discrete events (a stone, a clock tick, a reset) and read
//! back the state snapshot. When a game ends the controller forwards the
//! outcome to its [`ResultNotifier`] exactly once.

use crate::action::MoveError;
use crate::clock::DEFAULT_CLOCK_SECONDS;
use crate::notifier::ResultNotifier;
use crate::phases::Phase;
use crate::state::{Effect, Event, GameState};
use tracing::{debug, instrument};

/// Owns the game state and serializes every mutation of it.
#[derive(Debug)]
pub struct GameController<N> {
    state: GameState,
    notifier: N,
}

impl<N: ResultNotifier> GameController<N> {
    /// Creates a controller for a fresh ten-minute game.
    pub fn new(notifier: N) -> Self {
        Self::with_clock_seconds(DEFAULT_CLOCK_SECONDS, notifier)
    }

    /// Creates a controller whose clocks start at `seconds`.
    pub fn with_clock_seconds(seconds: u32, notifier: N) -> Self {
        Self {
            state: GameState::with_clock_seconds(seconds),
            notifier,
        }
    }

    /// Places a stone for the player to move.
    ///
    /// Rejected moves return the reason and change nothing.
    #[instrument(skip(self))]
    pub fn place_stone(&mut self, row: usize, col: usize) -> Result<Effect, MoveError> {
        self.dispatch(Event::PlaceStone { row, col })
    }

    /// Advances the running clock by one second.
    pub fn tick(&mut self) -> Effect {
        let effect = self.state.tick();
        self.forward(effect);
        effect
    }

    /// Discards the current game and starts a fresh one.
    #[instrument(skip(self), fields(phase = %self.state.phase()))]
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Routes one event through the state machine.
    pub fn dispatch(&mut self, event: Event) -> Result<Effect, MoveError> {
        let result = match event {
            Event::PlaceStone { row, col } => self.state.place_stone(row, col),
            Event::Tick => Ok(self.state.tick()),
            Event::Reset => Ok(self.state.reset()),
        };
        if let Ok(effect) = result {
            self.forward(effect);
        }
        result
    }

    fn forward(&mut self, effect: Effect) {
        if let Effect::Finished(outcome) = effect {
            debug!(%outcome, "Notifying result");
            self.notifier.notify(outcome);
        }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the current state for rendering.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns the notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

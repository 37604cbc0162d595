//! Per-player countdown clocks.
//!
//! The clock holds no timer of its own. Whoever owns the game feeds it one
//! `tick` per elapsed second, which keeps it a plain event handler.

use crate::phases::Phase;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Starting time per player: ten minutes.
pub const DEFAULT_CLOCK_SECONDS: u32 = 600;

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockTick {
    /// The game is not in progress; nothing moved.
    Idle,
    /// The active player's clock went down by one second.
    Running {
        /// Whose clock ran.
        player: Player,
        /// Seconds left after this tick.
        remaining: u32,
    },
    /// The active player's clock hit zero on this tick.
    Expired(Player),
}

/// Two countdown clocks, exactly one of which runs at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnClock {
    initial: u32,
    black: u32,
    white: u32,
    active: Player,
}

impl TurnClock {
    /// Creates a clock pair with `initial_seconds` each, Black active.
    pub fn new(initial_seconds: u32) -> Self {
        Self {
            initial: initial_seconds,
            black: initial_seconds,
            white: initial_seconds,
            active: Player::Black,
        }
    }

    /// Advances the active player's clock by one second.
    ///
    /// Only runs while `phase` is `InProgress`. Floors at zero and reports
    /// `Expired` when zero is reached; deciding what that means is left to
    /// the caller.
    #[instrument(skip(self), fields(active = %self.active))]
    pub fn tick(&mut self, phase: Phase) -> ClockTick {
        if phase != Phase::InProgress {
            return ClockTick::Idle;
        }
        let player = self.active;
        let slot = self.slot_mut(player);
        *slot = slot.saturating_sub(1);
        let remaining = *slot;
        trace!(remaining, "Clock ticked");
        if remaining == 0 {
            ClockTick::Expired(player)
        } else {
            ClockTick::Running { player, remaining }
        }
    }

    /// Makes `player`'s clock the one that runs on the next tick.
    pub fn switch_active(&mut self, player: Player) {
        self.active = player;
    }

    /// The player whose clock is running.
    pub fn active(&self) -> Player {
        self.active
    }

    /// Seconds left for `player`.
    pub fn remaining(&self, player: Player) -> u32 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Seconds each player started with.
    pub fn initial(&self) -> u32 {
        self.initial
    }

    /// Remaining time for `player` as `mm:ss`.
    pub fn display(&self, player: Player) -> String {
        let seconds = self.remaining(player);
        format!("{:02}:{:02}", seconds / 60, seconds % 60)
    }

    fn slot_mut(&mut self, player: Player) -> &mut u32 {
        match player {
            Player::Black => &mut self.black,
            Player::White => &mut self.white,
        }
    }
}

impl Default for TurnClock {
    fn default() -> Self {
        Self::new(DEFAULT_CLOCK_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_clock() {
        let clock = TurnClock::default();
        assert_eq!(clock.remaining(Player::Black), 600);
        assert_eq!(clock.remaining(Player::White), 600);
        assert_eq!(clock.active(), Player::Black);
        assert_eq!(clock.display(Player::White), "10:00");
    }

    #[test]
    fn test_idle_outside_in_progress() {
        let mut clock = TurnClock::default();
        assert_eq!(clock.tick(Phase::NotStarted), ClockTick::Idle);
        assert_eq!(clock.tick(Phase::Ended), ClockTick::Idle);
        assert_eq!(clock, TurnClock::default());
    }

    #[test]
    fn test_only_active_clock_runs() {
        let mut clock = TurnClock::default();
        clock.switch_active(Player::White);
        for _ in 0..3 {
            clock.tick(Phase::InProgress);
        }
        assert_eq!(clock.remaining(Player::White), 597);
        assert_eq!(clock.remaining(Player::Black), 600);

        clock.switch_active(Player::Black);
        assert_eq!(
            clock.tick(Phase::InProgress),
            ClockTick::Running {
                player: Player::Black,
                remaining: 599
            }
        );
        assert_eq!(clock.remaining(Player::White), 597);
        assert_eq!(clock.display(Player::White), "09:57");
    }

    #[test]
    fn test_expires_on_the_last_second() {
        let mut clock = TurnClock::default();
        for _ in 0..599 {
            assert!(matches!(clock.tick(Phase::InProgress), ClockTick::Running { .. }));
        }
        assert_eq!(clock.tick(Phase::InProgress), ClockTick::Expired(Player::Black));
        assert_eq!(clock.remaining(Player::Black), 0);
        assert_eq!(clock.display(Player::Black), "00:00");
    }

    #[test]
    fn test_floor_at_zero() {
        let mut clock = TurnClock::new(1);
        assert_eq!(clock.tick(Phase::InProgress), ClockTick::Expired(Player::Black));
        assert_eq!(clock.tick(Phase::InProgress), ClockTick::Expired(Player::Black));
        assert_eq!(clock.remaining(Player::Black), 0);
        assert_eq!(clock.remaining(Player::White), 1);
    }
}

//! Strictly Gomoku play library - drives the gomoku engine in real time.
//!
//! The engine itself lives in `strictly_gomoku` and knows nothing about
//! clocks on the wall. This crate adds what a running session needs.
//!
//! # Architecture
//!
//! - **Config**: TOML-backed clock and tick settings
//! - **Driver**: tokio task owning the controller and its 1 Hz ticker
//! - **Notifier**: outcome delivery to async consumers
//!
//! # Example
//!
//! ```no_run
//! use strictly_gomoku_play::{ChannelNotifier, GameConfig, GameDriver};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let (notifier, mut outcomes) = ChannelNotifier::channel();
//! let (handle, _task) = GameDriver::spawn(&GameConfig::default(), notifier);
//!
//! handle.place(7, 7).await??;
//! let outcome = outcomes.recv().await;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod driver;
mod notifier;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Driver
pub use driver::{Command, DriverError, DriverHandle, GameDriver};

// Crate-level exports - Notifiers
pub use notifier::ChannelNotifier;

// Crate-level exports - Engine types
pub use strictly_gomoku::{
    Board, Cell, Effect, Event, GameController, GameState, LogNotifier, Move, MoveError, Outcome,
    Phase, Player, Position, RecordingNotifier, ResultNotifier,
};

//! Asynchronous driver: owns a game controller and its 1 Hz tick source.
//!
//! The driver task serves commands and clock ticks one at a time, so the
//! controller never sees concurrent mutation. The ticker is armed only while
//! a game is in progress and is rebuilt on every reset.

use crate::config::GameConfig;
use derive_more::{Display, Error};
use std::time::Duration;
use strictly_gomoku::{Effect, GameController, GameState, MoveError, Phase, ResultNotifier};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, interval_at};
use tracing::{debug, info, instrument, trace};

/// Request sent to the driver task.
#[derive(Debug)]
pub enum Command {
    /// Place a stone for the player to move.
    Place {
        /// Row (0-14).
        row: usize,
        /// Column (0-14).
        col: usize,
        /// Receives the controller's verdict.
        reply: oneshot::Sender<Result<Effect, MoveError>>,
    },
    /// Discard the current game.
    Reset {
        /// Signalled once the fresh game is in place.
        reply: oneshot::Sender<()>,
    },
    /// Stop the driver task.
    Shutdown,
}

/// Error talking to the driver task.
#[derive(Debug, Clone, Display, Error)]
#[display("Driver error: {} at {}:{}", message, file, line)]
pub struct DriverError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl DriverError {
    /// Creates a new driver error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    #[track_caller]
    fn stopped() -> Self {
        Self::new("Driver task has stopped")
    }
}

/// Cloneable handle to a running driver.
#[derive(Debug, Clone)]
pub struct DriverHandle {
    command_tx: mpsc::UnboundedSender<Command>,
    snapshot_rx: watch::Receiver<GameState>,
}

impl DriverHandle {
    /// Places a stone and waits for the verdict.
    #[instrument(skip(self))]
    pub async fn place(
        &self,
        row: usize,
        col: usize,
    ) -> Result<Result<Effect, MoveError>, DriverError> {
        let (reply, verdict) = oneshot::channel();
        self.send(Command::Place { row, col, reply })?;
        verdict.await.map_err(|_| DriverError::stopped())
    }

    /// Resets the game and waits until the fresh game is in place.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<(), DriverError> {
        let (reply, done) = oneshot::channel();
        self.send(Command::Reset { reply })?;
        done.await.map_err(|_| DriverError::stopped())
    }

    /// Asks the driver task to stop.
    pub fn shutdown(&self) -> Result<(), DriverError> {
        self.send(Command::Shutdown)
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> GameState {
        self.snapshot_rx.borrow().clone()
    }

    /// Waits for the next published snapshot.
    pub async fn changed(&mut self) -> Result<GameState, DriverError> {
        self.snapshot_rx
            .changed()
            .await
            .map_err(|_| DriverError::stopped())?;
        Ok(self.snapshot_rx.borrow_and_update().clone())
    }

    fn send(&self, command: Command) -> Result<(), DriverError> {
        self.command_tx
            .send(command)
            .map_err(|_| DriverError::stopped())
    }
}

/// Owns the controller inside the driver task.
pub struct GameDriver<N> {
    controller: GameController<N>,
    command_rx: mpsc::UnboundedReceiver<Command>,
    snapshot_tx: watch::Sender<GameState>,
    period: Duration,
}

impl<N> GameDriver<N>
where
    N: ResultNotifier + Send + 'static,
{
    /// Spawns the driver on the current tokio runtime.
    ///
    /// The join handle yields the final state once the driver stops.
    #[instrument(
        skip(config, notifier),
        fields(
            clock_seconds = *config.clock_seconds(),
            tick_millis = *config.tick_millis()
        )
    )]
    pub fn spawn(config: &GameConfig, notifier: N) -> (DriverHandle, JoinHandle<GameState>) {
        let controller = GameController::with_clock_seconds(*config.clock_seconds(), notifier);
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(controller.snapshot());
        let driver = Self {
            controller,
            command_rx,
            snapshot_tx,
            period: config.tick_period(),
        };
        info!("Starting game driver");
        let task = tokio::spawn(driver.run());
        (
            DriverHandle {
                command_tx,
                snapshot_rx,
            },
            task,
        )
    }

    /// Fresh ticker whose first tick is one full period away.
    fn ticker(period: Duration) -> Interval {
        interval_at(Instant::now() + period, period)
    }

    async fn run(mut self) -> GameState {
        let mut ticker = Self::ticker(self.period);

        loop {
            let ticking = self.controller.phase() == Phase::InProgress;

            tokio::select! {
                biased;

                command = self.command_rx.recv() => {
                    let Some(command) = command else {
                        debug!("All handles dropped");
                        break;
                    };
                    match command {
                        Command::Place { row, col, reply } => {
                            let started = self.controller.phase() == Phase::NotStarted;
                            let result = self.controller.place_stone(row, col);
                            if started && self.controller.phase() == Phase::InProgress {
                                // The opening move starts the clock a full period from now.
                                ticker.reset();
                            }
                            self.publish();
                            let _ = reply.send(result);
                        }
                        Command::Reset { reply } => {
                            self.controller.reset();
                            ticker = Self::ticker(self.period);
                            self.publish();
                            let _ = reply.send(());
                        }
                        Command::Shutdown => {
                            debug!("Shutdown requested");
                            break;
                        }
                    }
                }

                _ = ticker.tick(), if ticking => {
                    let effect = self.controller.tick();
                    trace!(?effect, "Tick");
                    self.publish();
                }
            }
        }

        info!(phase = %self.controller.phase(), "Game driver stopped");
        self.controller.snapshot()
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(self.controller.snapshot());
    }
}

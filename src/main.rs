//! Strictly Gomoku - command-line player.
//!
//! Interactive play with a live clock, or a one-shot replay of a move list.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, Input};
use strictly_gomoku_play::{ChannelNotifier, GameConfig, GameController, GameDriver, LogNotifier};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let env_filter = std::env::var("RUST_LOG").ok();

    // Installed before the config loads; the config may then replace the filter.
    let startup = cli::log_directives(env_filter.clone(), &GameConfig::default());
    let (filter, filter_handle) =
        reload::Layer::new(EnvFilter::try_new(&startup).context("Invalid log filter")?);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    let directives = cli::log_directives(env_filter, &config);
    if directives != startup {
        filter_handle
            .reload(EnvFilter::try_new(&directives).context("Invalid log filter")?)
            .context("Failed to apply log filter")?;
        info!(filter = %directives, "Log filter updated");
    }

    match cli.command {
        Command::Play => run_play(config).await,
        Command::Replay { moves, json } => run_replay(config, &moves, json),
    }
}

/// Replay a move list synchronously and print the result.
#[instrument(skip(config))]
fn run_replay(config: GameConfig, moves: &str, json: bool) -> Result<()> {
    let moves = cli::parse_moves(moves).map_err(anyhow::Error::msg)?;
    let mut game = GameController::with_clock_seconds(*config.clock_seconds(), LogNotifier);

    for (row, col) in moves {
        if let Err(reason) = game.place_stone(row, col) {
            warn!(row, col, %reason, "Move ignored");
        }
    }

    if json {
        let text = serde_json::to_string_pretty(game.state()).context("Failed to encode state")?;
        println!("{}", text);
    } else {
        print!("{}", cli::render(game.state()));
    }
    Ok(())
}

/// Play on stdin while the driver keeps the clock running.
#[instrument(skip(config))]
async fn run_play(config: GameConfig) -> Result<()> {
    let (notifier, mut outcome_rx) = ChannelNotifier::channel();
    let (handle, task) = GameDriver::spawn(&config, notifier);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    info!("Session ready");
    print!("{}", cli::render(&handle.snapshot()));

    loop {
        tokio::select! {
            Some(outcome) = outcome_rx.recv() => {
                println!("{} - type 'reset' for a new game", outcome);
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    break;
                };
                match cli::parse_input(&line) {
                    Some(Input::Quit) => break,
                    Some(Input::Reset) => {
                        handle.reset().await?;
                        print!("{}", cli::render(&handle.snapshot()));
                    }
                    Some(Input::Show) => print!("{}", cli::render(&handle.snapshot())),
                    Some(Input::Place(row, col)) => match handle.place(row, col).await? {
                        Ok(_) => print!("{}", cli::render(&handle.snapshot())),
                        Err(reason) => println!("{}", reason),
                    },
                    None => println!("Commands: ROW COL | reset | show | quit"),
                }
            }
        }
    }

    handle.shutdown()?;
    let final_state = task.await.context("Driver task failed")?;
    info!(phase = %final_state.phase(), outcome = %final_state.outcome(), "Session closed");
    Ok(())
}

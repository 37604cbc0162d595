//! Command-line interface for the gomoku player.

use clap::{Parser, Subcommand};
use strictly_gomoku_play::{GameConfig, GameState, Outcome, Phase, Player};

/// Strictly Gomoku - five in a row with a chess clock
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Five-in-a-row with per-player countdown clocks", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults apply when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin: "ROW COL", "reset", "show", "quit"
    Play,

    /// Replay a list of moves and print the final position
    Replay {
        /// Space-separated "row,col" pairs, Black first
        #[arg(short, long)]
        moves: String,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

/// A line typed during interactive play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a stone.
    Place(usize, usize),
    /// Start over.
    Reset,
    /// Print the board again.
    Show,
    /// Leave.
    Quit,
}

/// Parses "row,col" or "row col".
pub fn parse_coordinate(s: &str) -> Option<(usize, usize)> {
    let mut parts = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    match parts.next() {
        Some(_) => None,
        None => Some((row, col)),
    }
}

/// Parses the argument of `replay --moves`.
pub fn parse_moves(s: &str) -> Result<Vec<(usize, usize)>, String> {
    s.split_whitespace()
        .map(|token| {
            parse_coordinate(token)
                .ok_or_else(|| format!("Bad move '{}', expected row,col", token))
        })
        .collect()
}

/// Interprets one line of interactive input.
pub fn parse_input(line: &str) -> Option<Input> {
    match line.trim().to_lowercase().as_str() {
        "q" | "quit" | "exit" => Some(Input::Quit),
        "r" | "reset" => Some(Input::Reset),
        "s" | "show" => Some(Input::Show),
        other => parse_coordinate(other).map(|(row, col)| Input::Place(row, col)),
    }
}

/// Tracing directives to run with: `RUST_LOG` when set, else the config's filter.
pub fn log_directives(env: Option<String>, config: &GameConfig) -> String {
    env.filter(|directives| !directives.trim().is_empty())
        .unwrap_or_else(|| config.log_filter().clone())
}

/// Board, clocks and status as text.
pub fn render(state: &GameState) -> String {
    let status = match (state.phase(), state.outcome()) {
        (Phase::NotStarted, _) => format!("{} to open", state.current_turn()),
        (Phase::InProgress, _) => format!("{} to move", state.current_turn()),
        (Phase::Ended, Outcome::WonBy(player)) => format!("Game over: {} wins", player),
        (Phase::Ended, outcome) => format!("Game over: {}", outcome),
    };
    format!(
        "{}Black {} | White {}   {}\n",
        state.board().display(),
        state.clock_display(Player::Black),
        state.clock_display(Player::White),
        status
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate_forms() {
        assert_eq!(parse_coordinate("7,7"), Some((7, 7)));
        assert_eq!(parse_coordinate(" 3  14 "), Some((3, 14)));
        assert_eq!(parse_coordinate("3"), None);
        assert_eq!(parse_coordinate("1,2,3"), None);
        assert_eq!(parse_coordinate("a,b"), None);
    }

    #[test]
    fn test_parse_moves() {
        assert_eq!(parse_moves("7,7 0,0"), Ok(vec![(7, 7), (0, 0)]));
        assert!(parse_moves("7,7 oops").is_err());
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("QUIT"), Some(Input::Quit));
        assert_eq!(parse_input("reset\n"), Some(Input::Reset));
        assert_eq!(parse_input("4 5"), Some(Input::Place(4, 5)));
        assert_eq!(parse_input("hello"), None);
    }

    #[test]
    fn test_log_directives_prefer_environment() {
        let config = GameConfig::from_toml("log_filter = \"warn\"\n").unwrap();
        assert_eq!(log_directives(None, &config), "warn");
        assert_eq!(log_directives(Some("  ".to_string()), &config), "warn");
        assert_eq!(log_directives(Some("debug".to_string()), &config), "debug");
        assert_eq!(log_directives(None, &GameConfig::default()), "info");
    }

    #[test]
    fn test_render_fresh_game() {
        let text = render(&GameState::new());
        assert!(text.ends_with("Black 10:00 | White 10:00   Black to open\n"));
    }
}

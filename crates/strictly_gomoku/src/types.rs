//! Core domain types for gomoku.

use crate::action::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 15;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Black stones (always moves first).
    Black,
    /// White stones.
    White,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No stone.
    #[default]
    Empty,
    /// A stone of the given colour.
    Stone(Player),
}

impl Cell {
    /// Checks if the cell holds no stone.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A coordinate on the board that is known to be in range.
///
/// Deserialization goes through [`Position::new`], so a snapshot cannot
/// smuggle in an off-board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "RawPosition")]
#[display("({}, {})", row, col)]
pub struct Position {
    row: usize,
    col: usize,
}

/// Unchecked wire form of [`Position`].
#[derive(Deserialize)]
struct RawPosition {
    row: usize,
    col: usize,
}

impl TryFrom<RawPosition> for Position {
    type Error = MoveError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row, raw.col)
    }
}

impl Position {
    /// Creates a position, rejecting coordinates outside the grid.
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(MoveError::OutOfBounds { row, col })
        }
    }

    /// Row index (0-14).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-14).
    pub fn col(self) -> usize {
        self.col
    }

    /// Steps `distance` cells along `(d_row, d_col)`, or `None` past the edge.
    pub fn offset(self, d_row: isize, d_col: isize, distance: isize) -> Option<Self> {
        let row = self.row as isize + d_row * distance;
        let col = self.col as isize + d_col * distance;
        if (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col) {
            Some(Self {
                row: row as usize,
                col: col as usize,
            })
        } else {
            None
        }
    }

    /// All 225 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

/// 15x15 gomoku board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Gets the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Places a stone for `player`.
    ///
    /// Fails with `OutOfBounds` or `CellOccupied`; on failure the board is
    /// untouched. Returns the position just played.
    #[instrument(skip(self))]
    pub fn place_stone(
        &mut self,
        row: usize,
        col: usize,
        player: Player,
    ) -> Result<Position, MoveError> {
        let pos = Position::new(row, col)?;
        if !self.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }
        self.cells[row][col] = Cell::Stone(player);
        Ok(pos)
    }

    /// True iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Number of stones of either colour on the board.
    pub fn stone_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// `X` is black, `O` is white, `.` is empty.
    pub fn display(&self) -> String {
        let mut result = String::from("   ");
        for col in 0..BOARD_SIZE {
            result.push_str(&format!("{:>3}", col));
        }
        result.push('\n');
        for (row, cells) in self.cells.iter().enumerate() {
            result.push_str(&format!("{:>3}", row));
            for cell in cells {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Stone(Player::Black) => 'X',
                    Cell::Stone(Player::White) => 'O',
                };
                result.push_str("  ");
                result.push(symbol);
            }
            result.push('\n');
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

//! Core domain types for tic-tac-toe.

use std::fmt;

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Number of squares on the board.
pub const SQUARES: usize = 9;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player whose turn it is after `step` moves.
    ///
    /// X moves on even steps, O on odd ones.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Text shown for this square; empty squares show nothing.
    pub fn symbol(self) -> &'static str {
        match self {
            Square::Empty => "",
            Square::Occupied(Player::X) => "X",
            Square::Occupied(Player::O) => "O",
        }
    }
}

/// Row/column coordinate of a square.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Getters,
    derive_new::new,
    derive_more::Display,
)]
#[display("({row},{col})")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Converts a row-major board index (0-8) into a coordinate.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SQUARES).then(|| Self::new(index / 3, index % 3))
    }

    /// Converts the coordinate back to its row-major index.
    pub fn to_index(self) -> usize {
        self.row * 3 + self.col
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; SQUARES],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Returns a copy of the board with `pos` set to `square`.
    ///
    /// Out-of-range positions leave the board unchanged.
    pub fn with(mut self, pos: usize, square: Square) -> Self {
        if let Some(slot) = self.squares.get_mut(pos) {
            *slot = square;
        }
        self
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; SQUARES] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

impl fmt::Display for Board {
    /// Rows of `X`, `O` or `.` separated by `|`, with `-+-+-` between rows.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, squares) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                f.write_str("\n-+-+-\n")?;
            }
            for (col, square) in squares.iter().enumerate() {
                if col > 0 {
                    f.write_str("|")?;
                }
                f.write_str(match square {
                    Square::Empty => ".",
                    occupied => occupied.symbol(),
                })?;
            }
        }
        Ok(())
    }
}

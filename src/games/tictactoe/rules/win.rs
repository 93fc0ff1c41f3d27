//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use derive_getters::Getters;
use tracing::instrument;

/// The eight winning triples, in the order they are checked.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line: the winning player and the three squares it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters)]
pub struct WinningLine {
    winner: Player,
    cells: [usize; 3],
}

impl WinningLine {
    /// Returns true if `pos` is one of the three winning squares.
    pub fn contains(&self, pos: usize) -> bool {
        self.cells.contains(&pos)
    }
}

/// Finds the first completed line on the board.
///
/// Returns `None` if no row, column or diagonal holds three identical marks.
#[instrument(level = "trace", skip(board))]
pub fn compute_winner(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a)?;
        match sq {
            Square::Occupied(winner) if board.get(b) == Some(sq) && board.get(c) == Some(sq) => {
                Some(WinningLine {
                    winner,
                    cells: [a, b, c],
                })
            }
            _ => None,
        }
    })
}

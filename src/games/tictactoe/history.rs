//! Recorded board snapshots.

use super::types::{Board, Coord};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One immutable step of the game: the board after a move.
///
/// The initial entry has move number zero, an empty board and no coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HistoryEntry {
    board: Board,
    move_number: usize,
    coord: Option<Coord>,
}

impl HistoryEntry {
    /// The entry every game starts with.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            move_number: 0,
            coord: None,
        }
    }

    /// Records the board produced by move `move_number` at `coord`.
    pub fn after_move(board: Board, move_number: usize, coord: Coord) -> Self {
        Self {
            board,
            move_number,
            coord: Some(coord),
        }
    }

    /// Label used in the move list.
    pub fn label(&self) -> String {
        match self.coord {
            Some(coord) if self.move_number > 0 => {
                format!("Go to move #{} at {}", self.move_number, coord)
            }
            _ => "Go to game start".to_string(),
        }
    }
}

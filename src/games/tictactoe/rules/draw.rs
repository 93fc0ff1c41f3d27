//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if every square is occupied.
///
/// This does not look for a winner: a full board whose last move completed
/// a line is also "full". Check [`compute_winner`](super::compute_winner) first.
#[instrument(level = "trace", skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

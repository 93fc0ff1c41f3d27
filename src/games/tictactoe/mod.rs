//! Tic-tac-toe with a rewindable move history.

mod history;
pub mod invariants;
pub mod rules;
mod state;
mod types;

pub use history::HistoryEntry;
pub use rules::{WinningLine, compute_winner, is_draw};
pub use state::{Action, GameState, MoveListItem, SortOrder, Status, reduce};
pub use types::{Board, Coord, Player, SQUARES, Square};

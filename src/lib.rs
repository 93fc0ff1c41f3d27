//! Tic-tac-toe with a rewindable move history, played in the terminal.
//!
//! # Architecture
//!
//! - **Games**: board types, the winner/draw rules, and the [`GameState`]
//!   reducer. Pure, no I/O.
//! - **TUI**: ratatui widgets for squares and the board, a layout that
//!   doubles as the click hit map, and the [`GameController`] event loop.
//! - **Config**: [`Settings`] from an optional TOML file plus [`Cli`] flags.
//!
//! # Example
//!
//! ```
//! use tictactoe_replay::{Action, GameState, Status, reduce};
//!
//! let state = [4, 0, 8]
//!     .into_iter()
//!     .map(Action::Place)
//!     .fold(GameState::new(), reduce);
//! assert_eq!(state.status().to_string(), "Next player: O");
//!
//! // Rewind to the start; the later moves are kept until a new move is made.
//! let state = reduce(state, Action::JumpTo(0));
//! assert_eq!(state.history().len(), 4);
//! assert_eq!(state.status(), Status::Next(tictactoe_replay::Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod games;
mod tui;

// Crate-level exports - Command line and settings
pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_LOG_FILE, DEFAULT_LOG_FILTER, Settings};

// Crate-level exports - Game types
pub use games::tictactoe::{
    Action, Board, Coord, GameState, HistoryEntry, MoveListItem, Player, SQUARES, SortOrder,
    Square, Status, WinningLine, compute_winner, invariants, is_draw, reduce,
};

// Crate-level exports - Terminal UI
pub use tui::{GameController, GameLayout, Input, classify, layout, run_tui, ui};

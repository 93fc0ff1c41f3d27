//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Nothing here is cached; callers
//! recompute on every render.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, WinningLine, compute_winner};

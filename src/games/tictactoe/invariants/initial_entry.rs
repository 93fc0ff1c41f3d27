//! Initial entry invariant: history starts from an empty board.

use super::super::GameState;
use super::Invariant;

/// Invariant: entry 0 exists, has an empty board and no coordinate.
pub struct InitialEntryInvariant;

impl Invariant<GameState> for InitialEntryInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history
            .first()
            .is_some_and(|entry| entry.board().occupied() == 0 && entry.coord().is_none())
    }

    fn description() -> &'static str {
        "History starts with an empty board and no move"
    }
}

//! Viewed step invariant: the viewed step indexes into the history.

use super::super::GameState;
use super::Invariant;

/// Invariant: `viewed_step < history.len()`.
pub struct ViewedStepInvariant;

impl Invariant<GameState> for ViewedStepInvariant {
    fn holds(state: &GameState) -> bool {
        state.viewed_step < state.history.len()
    }

    fn description() -> &'static str {
        "Viewed step is within the history"
    }
}

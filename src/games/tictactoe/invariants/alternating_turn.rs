//! Alternating turn invariant: the next player follows the viewed step's parity.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: X is to move on even steps, O on odd steps.
///
/// Holds after placing a move (which flips the turn) and after jumping
/// (which recomputes it), so any sequence of actions keeps it.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state.next_player == Player::for_step(state.viewed_step)
    }

    fn description() -> &'static str {
        "Next player matches the parity of the viewed step"
    }
}

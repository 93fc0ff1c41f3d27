//! History consistency invariant: each entry is its predecessor plus one mark.

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: entry `k` has move number `k` and differs from entry `k - 1`
/// in exactly one square, the one at its coordinate, which holds the mark
/// of the player who moved on step `k - 1`.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let numbered = state
            .history
            .iter()
            .enumerate()
            .all(|(step, entry)| *entry.move_number() == step);

        numbered
            && state.history.windows(2).enumerate().all(|(step, pair)| {
                let (prev, next) = (&pair[0], &pair[1]);
                let Some(coord) = next.coord() else {
                    return false;
                };
                let pos = coord.to_index();
                let changed = prev
                    .board()
                    .squares()
                    .iter()
                    .zip(next.board().squares())
                    .filter(|(a, b)| a != b)
                    .count();

                changed == 1
                    && prev.board().is_empty(pos)
                    && next.board().get(pos) == Some(Square::Occupied(Player::for_step(step)))
            })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one alternating mark to its predecessor"
    }
}

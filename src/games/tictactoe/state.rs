//! Game state and the reducer that drives it.
//!
//! All transitions go through [`reduce`], a pure function from the old state
//! and an [`Action`] to the new state. Derived values (winner, draw, status
//! line, move list) are projections recomputed from the state on demand.

use super::history::HistoryEntry;
use super::rules::{WinningLine, compute_winner, is_draw};
use super::types::{Board, Coord, Player, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label for the control that switches to the other order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "moves descending",
            Self::Descending => "moves ascending",
        }
    }
}

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Place the next player's mark on a square (0-8).
    Place(usize),
    /// View an earlier (or later) step of the history.
    JumpTo(usize),
    /// Flip the move list order.
    ToggleSort,
}

/// Status line for the viewed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// A player completed a line.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// Board is full and nobody won.
    #[display("Game ends in a draw!")]
    Draw,
    /// Game continues.
    #[display("Next player: {_0}")]
    Next(Player),
}

/// One selectable row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MoveListItem {
    step: usize,
    label: String,
    current: bool,
}

/// Complete game state.
///
/// History is never empty and `viewed_step` always indexes into it.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameState {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) viewed_step: usize,
    pub(crate) next_player: Player,
    pub(crate) sort_order: SortOrder,
}

impl GameState {
    /// Creates a new game with a single empty entry.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a new game whose move list starts in the given order.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            viewed_step: 0,
            next_player: Player::X,
            sort_order,
        }
    }

    /// The entry at the viewed step.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history[self.viewed_step]
    }

    /// The board at the viewed step.
    pub fn current_board(&self) -> &Board {
        self.current_entry().board()
    }

    /// Winning line on the viewed board, if any.
    pub fn winner(&self) -> Option<WinningLine> {
        compute_winner(self.current_board())
    }

    /// Status line for the viewed board. A winner takes precedence over a
    /// full board.
    pub fn status(&self) -> Status {
        let board = self.current_board();
        if let Some(line) = compute_winner(board) {
            Status::Winner(*line.winner())
        } else if is_draw(board) {
            Status::Draw
        } else {
            Status::Next(self.next_player)
        }
    }

    /// Move list in display order.
    pub fn move_list(&self) -> Vec<MoveListItem> {
        let items = self
            .history
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveListItem {
                step,
                label: entry.label(),
                current: step == self.viewed_step,
            });
        match self.sort_order {
            SortOrder::Ascending => items.collect(),
            SortOrder::Descending => items.rev().collect(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies an action, returning the next state.
///
/// Illegal requests (occupied square, decided board, unknown step) return the
/// state unchanged.
#[instrument(skip(state), fields(viewed_step = state.viewed_step, len = state.history.len()))]
pub fn reduce(state: GameState, action: Action) -> GameState {
    match action {
        Action::Place(pos) => place(state, pos),
        Action::JumpTo(step) => jump_to(state, step),
        Action::ToggleSort => GameState {
            sort_order: state.sort_order.toggle(),
            ..state
        },
    }
}

fn place(mut state: GameState, pos: usize) -> GameState {
    let board = *state.current_board();

    if let Some(line) = compute_winner(&board) {
        debug!(pos, winner = %line.winner(), "Board already decided, ignoring move");
        return state;
    }
    let Some(coord) = Coord::from_index(pos) else {
        warn!(pos, "Square out of range, ignoring move");
        return state;
    };
    if !board.is_empty(pos) {
        debug!(pos, "Square occupied, ignoring move");
        return state;
    }

    let player = state.next_player;
    let discarded = state.history.len() - (state.viewed_step + 1);
    state.history.truncate(state.viewed_step + 1);

    let move_number = state.history.len();
    let next_board = board.with(pos, Square::Occupied(player));
    state
        .history
        .push(HistoryEntry::after_move(next_board, move_number, coord));
    state.viewed_step = move_number;
    state.next_player = player.opponent();

    debug!(%player, %coord, move_number, discarded, "Move placed");
    state
}

fn jump_to(state: GameState, step: usize) -> GameState {
    if step >= state.history.len() {
        warn!(step, len = state.history.len(), "No such step, ignoring jump");
        return state;
    }
    debug!(step, "Jumping to step");
    GameState {
        viewed_step: step,
        next_player: Player::for_step(step),
        ..state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[usize]) -> GameState {
        moves
            .iter()
            .fold(GameState::new(), |state, &pos| reduce(state, Action::Place(pos)))
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(*state.viewed_step(), 0);
        assert_eq!(state.status(), Status::Next(Player::X));
        assert_eq!(state.status().to_string(), "Next player: X");
    }

    #[test]
    fn test_place_records_entry() {
        let state = play(&[4]);
        assert_eq!(state.current_board().get(4), Some(Square::Occupied(Player::X)));
        assert_eq!(*state.current_entry().move_number(), 1);
        assert_eq!(
            *state.current_entry().coord(),
            Some(Coord::new(1, 1))
        );
        assert_eq!(state.status().to_string(), "Next player: O");
    }

    #[test]
    fn test_occupied_square_is_noop() {
        let before = play(&[4]);
        let after = reduce(before.clone(), Action::Place(4));
        assert_eq!(before, after);
    }

    #[test]
    fn test_out_of_range_square_is_noop() {
        let before = play(&[0]);
        assert_eq!(reduce(before.clone(), Action::Place(9)), before);
    }

    #[test]
    fn test_move_after_win_is_noop() {
        let won = play(&[0, 1, 4, 2, 8]);
        assert_eq!(won.status(), Status::Winner(Player::X));
        assert_eq!(reduce(won.clone(), Action::Place(5)), won);
    }

    #[test]
    fn test_toggle_sort_keeps_view_and_turn() {
        let state = play(&[0, 1]);
        let toggled = reduce(state.clone(), Action::ToggleSort);
        assert_eq!(*toggled.sort_order(), SortOrder::Descending);
        assert_eq!(toggled.viewed_step(), state.viewed_step());
        assert_eq!(toggled.next_player(), state.next_player());
        assert_eq!(toggled.sort_order().toggle_label(), "moves ascending");
    }

    #[test]
    fn test_jump_out_of_range_is_noop() {
        let state = play(&[0, 1]);
        assert_eq!(reduce(state.clone(), Action::JumpTo(3)), state);
    }

    #[test]
    fn test_jump_recomputes_turn_from_parity() {
        let state = play(&[0, 1, 2]);
        let state = reduce(state, Action::JumpTo(1));
        assert_eq!(*state.next_player(), Player::O);
        let state = reduce(state, Action::JumpTo(2));
        assert_eq!(*state.next_player(), Player::X);
    }

    #[test]
    fn test_move_list_descending() {
        let state = reduce(play(&[0, 4]), Action::ToggleSort);
        let steps: Vec<usize> = state.move_list().iter().map(|i| *i.step()).collect();
        assert_eq!(steps, vec![2, 1, 0]);
        assert!(*state.move_list()[0].current());
    }
}

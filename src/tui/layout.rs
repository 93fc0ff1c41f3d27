//! Screen layout and click hit-testing.
//!
//! The same [`GameLayout`] is used to draw a frame and to map the next click
//! back to the control under the pointer, so what the user sees is what they
//! click.

use derive_getters::Getters;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use tracing::{instrument, trace};

use crate::games::tictactoe::{Action, GameState, SQUARES};

/// Width of one square in columns.
pub const CELL_WIDTH: u16 = 7;
/// Height of one square in rows.
pub const CELL_HEIGHT: u16 = 3;
/// Board width including the two separator columns.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Board height including the two separator rows.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Rectangles for every clickable and drawable region of a frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameLayout {
    title: Rect,
    board: Rect,
    cells: [Rect; SQUARES],
    status: Rect,
    sort_toggle: Rect,
    moves: Rect,
    /// Lines of the move list scrolled out of view above the panel.
    move_scroll: u16,
    move_rows: Vec<(Rect, usize)>,
    help: Rect,
}

impl GameLayout {
    /// Computes the layout of `state` drawn into `area`.
    ///
    /// `move_scroll` is a requested move list offset, clamped to the list.
    /// Without one the list scrolls just far enough to show the viewed step.
    #[instrument(skip(state))]
    pub fn compute(area: Rect, state: &GameState, move_scroll: Option<u16>) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(BOARD_HEIGHT),
                Constraint::Length(1), // Help
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BOARD_WIDTH + 4), Constraint::Min(24)])
            .split(rows[1]);

        let info = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status
                Constraint::Length(3), // Sort toggle
                Constraint::Min(3),    // Move list
            ])
            .split(columns[1]);

        let board = center_rect(columns[0], BOARD_WIDTH, BOARD_HEIGHT);
        let cells = if board.width >= BOARD_WIDTH && board.height >= BOARD_HEIGHT {
            cell_areas(board)
        } else {
            [Rect::default(); SQUARES]
        };

        // Move rows sit inside the list's border, one line each, scrolled so
        // the viewed step stays on screen.
        let moves = info[2];
        let inner = inner_area(moves);
        let items = state.move_list();
        let max_scroll = u16::try_from(items.len().saturating_sub(usize::from(inner.height)))
            .unwrap_or(u16::MAX);
        let move_scroll = match move_scroll {
            Some(requested) => requested.min(max_scroll),
            None => {
                let current = items.iter().position(|item| *item.current()).unwrap_or(0);
                scroll_to_show(current, inner.height)
            }
        };
        let move_rows = items
            .iter()
            .skip(usize::from(move_scroll))
            .zip(0..inner.height)
            .map(|(item, line)| {
                (
                    Rect::new(inner.x, inner.y + line, inner.width, 1),
                    *item.step(),
                )
            })
            .collect();

        Self {
            title: rows[0],
            board,
            cells,
            status: info[0],
            sort_toggle: info[1],
            moves,
            move_scroll,
            move_rows,
            help: rows[2],
        }
    }

    /// Returns the action triggered by clicking at (`column`, `row`).
    pub fn hit(&self, column: u16, row: u16) -> Option<Action> {
        let pos = Position::new(column, row);

        let action = if let Some(index) = self.cells.iter().position(|cell| cell.contains(pos)) {
            Some(Action::Place(index))
        } else if self.sort_toggle.contains(pos) {
            Some(Action::ToggleSort)
        } else {
            self.move_rows
                .iter()
                .find(|(rect, _)| rect.contains(pos))
                .map(|(_, step)| Action::JumpTo(*step))
        };

        trace!(column, row, ?action, "Hit test");
        action
    }
}

/// Smallest scroll offset that keeps line `index` inside a `height`-line view.
fn scroll_to_show(index: usize, height: u16) -> u16 {
    let height = usize::from(height);
    if height == 0 || index < height {
        0
    } else {
        u16::try_from(index + 1 - height).unwrap_or(u16::MAX)
    }
}

/// Rectangles of the nine squares of a board drawn at `board`'s origin.
///
/// Squares are `CELL_WIDTH` x `CELL_HEIGHT` with a one-cell separator
/// between them, in row-major order.
pub fn cell_areas(board: Rect) -> [Rect; SQUARES] {
    std::array::from_fn(|index| {
        let (row, col) = ((index / 3) as u16, (index % 3) as u16);
        Rect::new(
            board.x + col * (CELL_WIDTH + 1),
            board.y + row * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
    })
}

/// Area inside a one-cell border.
pub fn inner_area(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

/// Centers a `width` x `height` rectangle inside `area`, shrinking it to fit.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

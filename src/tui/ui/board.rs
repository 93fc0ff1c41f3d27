//! The 3x3 board.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Paragraph, Widget, Wrap},
};

use super::square::SquareView;
use crate::games::tictactoe::{Board, WinningLine};
use crate::tui::layout::{BOARD_HEIGHT, BOARD_WIDTH, CELL_HEIGHT, CELL_WIDTH, cell_areas};

/// Lays out nine [`SquareView`]s, highlighting the winning line if there is one.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    winner: Option<WinningLine>,
}

impl<'a> BoardView<'a> {
    /// Creates a view of `board`.
    pub fn new(board: &'a Board, winner: Option<WinningLine>) -> Self {
        Self { board, winner }
    }

    fn is_highlighted(&self, pos: usize) -> bool {
        self.winner.is_some_and(|line| line.contains(pos))
    }
}

impl Widget for BoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < BOARD_WIDTH || area.height < BOARD_HEIGHT {
            Paragraph::new("Enlarge the terminal to see the board")
                .wrap(Wrap { trim: true })
                .render(area, buf);
            return;
        }

        let separator = Style::default().fg(Color::DarkGray);
        for row in 0..BOARD_HEIGHT {
            for col in [CELL_WIDTH, CELL_WIDTH * 2 + 1] {
                buf.set_string(area.x + col, area.y + row, "│", separator);
            }
        }
        for row in [CELL_HEIGHT, CELL_HEIGHT * 2 + 1] {
            for col in 0..BOARD_WIDTH {
                let symbol = if col == CELL_WIDTH || col == CELL_WIDTH * 2 + 1 {
                    "┼"
                } else {
                    "─"
                };
                buf.set_string(area.x + col, area.y + row, symbol, separator);
            }
        }

        for (pos, (cell, square)) in cell_areas(area).into_iter().zip(self.board.squares()).enumerate() {
            SquareView::new(*square, self.is_highlighted(pos)).render(cell, buf);
        }
    }
}

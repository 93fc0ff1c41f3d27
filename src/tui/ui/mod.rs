//! Stateless rendering of the game.
//!
//! Everything drawn here is a projection of [`GameState`]; winner and draw
//! status are recomputed on every frame.

mod board;
mod square;

pub use board::BoardView;
pub use square::SquareView;

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::instrument;

use super::layout::GameLayout;
use crate::games::tictactoe::{GameState, MoveListItem, Status};

/// Draws the whole game and returns the layout used, for hit-testing.
///
/// `move_scroll` is passed through to [`GameLayout::compute`].
#[instrument(skip_all)]
pub fn draw(frame: &mut Frame, state: &GameState, move_scroll: Option<u16>) -> GameLayout {
    let layout = GameLayout::compute(frame.area(), state, move_scroll);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, *layout.title());

    frame.render_widget(
        BoardView::new(state.current_board(), state.winner()),
        *layout.board(),
    );

    let status = state.status();
    let status_color = match status {
        Status::Winner(_) => Color::Green,
        Status::Draw => Color::Magenta,
        Status::Next(_) => Color::Yellow,
    };
    let status_text = Paragraph::new(status.to_string())
        .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status_text, *layout.status());

    let toggle = Paragraph::new(state.sort_order().toggle_label())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(toggle, *layout.sort_toggle());

    let moves: Vec<Line> = state.move_list().iter().map(move_line).collect();
    let list = Paragraph::new(moves)
        .scroll((*layout.move_scroll(), 0))
        .block(Block::default().borders(Borders::ALL).title("Moves"));
    frame.render_widget(list, *layout.moves());

    let help = Paragraph::new("Click a square to play, a move to jump back · scroll the moves · q to quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, *layout.help());

    layout
}

fn move_line(item: &MoveListItem) -> Line<'static> {
    let text = format!("{}. {}", item.step(), item.label());
    if *item.current() {
        Line::from(Span::styled(
            text,
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
        ))
    } else {
        Line::from(text)
    }
}

//! A single board square.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::games::tictactoe::{Player, Square};

/// Stateless view of one square. Clicks are resolved through the layout,
/// not by the widget itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct SquareView {
    value: Square,
    highlight: bool,
}

impl SquareView {
    /// Style for the square's contents.
    pub fn style(&self) -> Style {
        let base = match self.value {
            Square::Empty => Style::default().fg(Color::DarkGray),
            Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        };

        if self.highlight {
            base.bg(Color::Green).fg(Color::Black)
        } else {
            base
        }
    }
}

impl Widget for SquareView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.style();
        buf.set_style(area, style);

        // Vertically center the symbol.
        let padding = area.height.saturating_sub(1) / 2;
        let mut lines = vec![Line::default(); padding as usize];
        lines.push(Line::from(Span::styled(self.value.symbol(), style)));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

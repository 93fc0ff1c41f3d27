//! Classification of terminal events.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

/// What a terminal event means to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Left click at a screen cell.
    Click {
        /// Column of the click.
        column: u16,
        /// Row of the click.
        row: u16,
    },
    /// Mouse wheel at a screen cell; `delta` is -1 for up, 1 for down.
    Scroll {
        /// Column of the pointer.
        column: u16,
        /// Row of the pointer.
        row: u16,
        /// Lines to scroll.
        delta: i8,
    },
    /// Leave the program.
    Quit,
    /// Anything else: key releases, moves, resizes.
    Ignore,
}

/// Maps a crossterm event to an [`Input`].
pub fn classify(event: &Event) -> Input {
    match event {
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Input::Click {
                column: mouse.column,
                row: mouse.row,
            },
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => Input::Scroll {
                column: mouse.column,
                row: mouse.row,
                delta: if mouse.kind == MouseEventKind::ScrollUp { -1 } else { 1 },
            },
            _ => Input::Ignore,
        },
        // Crossterm reports both press and release on some platforms.
        Event::Key(key) if key.kind == KeyEventKind::Release => Input::Ignore,
        Event::Key(key) => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Input::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
            _ => Input::Ignore,
        },
        _ => Input::Ignore,
    }
}

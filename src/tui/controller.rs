//! Game controller: owns the state and drives the event loop.

use std::ops::ControlFlow;

use crossterm::event::{self, Event};
use derive_getters::Getters;
use ratatui::{Terminal, backend::Backend, layout::Position};
use tracing::{debug, error, info, instrument, trace};

use super::input::{Input, classify};
use super::layout::GameLayout;
use super::ui;
use crate::games::tictactoe::{
    Action, GameState,
    invariants::{GameInvariants, InvariantSet},
    reduce,
};

/// Single owner of the [`GameState`].
///
/// Every change goes through [`GameController::dispatch`]. The layout of the
/// last drawn frame is kept so clicks can be mapped back to actions.
#[derive(Debug, Getters)]
pub struct GameController {
    state: GameState,
    layout: Option<GameLayout>,
    /// Move list offset chosen with the mouse wheel. Cleared by every action
    /// so the list follows the viewed step again.
    move_scroll: Option<u16>,
}

impl GameController {
    /// Creates a controller around an initial state.
    #[instrument]
    pub fn new(state: GameState) -> Self {
        info!("Creating GameController");
        Self {
            state,
            layout: None,
            move_scroll: None,
        }
    }

    /// Applies an action through the reducer.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
        self.move_scroll = None;

        if let Err(violations) = GameInvariants::check_all(&self.state) {
            for violation in violations {
                error!(%violation, "Game state invariant broken");
            }
        }
        debug!(
            viewed_step = self.state.viewed_step(),
            len = self.state.history().len(),
            status = %self.state.status(),
            "Action applied"
        );
        trace!(board = %self.state.current_board(), "Viewed board");
    }

    /// Handles one terminal event. Breaks when the user asks to quit.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: &Event) -> ControlFlow<()> {
        match classify(event) {
            Input::Quit => return ControlFlow::Break(()),
            Input::Click { column, row } => {
                let action = self.layout.as_ref().and_then(|layout| layout.hit(column, row));
                match action {
                    Some(action) => self.dispatch(action),
                    None => debug!(column, row, "Click outside any control"),
                }
            }
            Input::Scroll { column, row, delta } => self.scroll_moves(column, row, delta),
            Input::Ignore => {}
        }
        ControlFlow::Continue(())
    }

    /// Scrolls the move list when the pointer is over it.
    fn scroll_moves(&mut self, column: u16, row: u16, delta: i8) {
        let Some(layout) = &self.layout else {
            return;
        };
        if !layout.moves().contains(Position::new(column, row)) {
            return;
        }
        let from = *layout.move_scroll();
        let to = if delta < 0 {
            from.saturating_sub(delta.unsigned_abs().into())
        } else {
            from.saturating_add(delta.unsigned_abs().into())
        };
        trace!(from, to, "Scrolling move list");
        self.move_scroll = Some(to);
    }

    /// Draws the current state and remembers its layout.
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        let state = &self.state;
        let move_scroll = self.move_scroll;
        let mut layout = None;
        terminal.draw(|f| layout = Some(ui::draw(f, state, move_scroll)))?;
        self.layout = layout;
        Ok(())
    }

    /// Runs the event loop until the user quits.
    ///
    /// Blocks on terminal input; every event is handled to completion
    /// before the next frame is drawn.
    #[instrument(skip_all)]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting game event loop");
        loop {
            self.draw(terminal)?;
            let event = event::read()?;
            if self.handle_event(&event).is_break() {
                info!("User quit");
                return Ok(());
            }
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(GameState::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::backend::TestBackend;

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_click_before_first_draw_is_ignored() {
        let mut controller = GameController::default();
        assert!(controller.handle_event(&click(10, 10)).is_continue());
        assert_eq!(controller.state(), &GameState::new());
    }

    #[test]
    fn test_click_on_square_places_mark() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
        let mut controller = GameController::default();
        controller.draw(&mut terminal).expect("draw");

        let center = controller.layout().as_ref().expect("drawn").cells()[4];
        controller.handle_event(&click(center.x + 1, center.y + 1));

        assert_eq!(controller.state().history().len(), 2);
        assert_eq!(controller.state().status().to_string(), "Next player: O");
    }

    #[test]
    fn test_wheel_scrolls_moves_until_next_action() {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).expect("test terminal");
        let mut controller = GameController::default();
        for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            controller.dispatch(Action::Place(pos));
        }
        controller.dispatch(Action::JumpTo(3));
        controller.draw(&mut terminal).expect("draw");

        let moves = *controller.layout().as_ref().expect("drawn").moves();
        let wheel = |kind| {
            Event::Mouse(MouseEvent {
                kind,
                column: moves.x + 2,
                row: moves.y + 2,
                modifiers: KeyModifiers::NONE,
            })
        };
        for _ in 0..5 {
            controller.handle_event(&wheel(MouseEventKind::ScrollDown));
            controller.draw(&mut terminal).expect("draw");
        }
        let layout = controller.layout().as_ref().expect("drawn");
        assert_eq!(*layout.move_scroll(), 2);
        let (row, step) = *layout.move_rows().last().expect("rows");
        assert_eq!(step, 9);

        controller.handle_event(&click(row.x, row.y));
        assert_eq!(*controller.state().viewed_step(), 9);
        assert_eq!(*controller.move_scroll(), None);

        controller.draw(&mut terminal).expect("draw");
        controller.handle_event(&wheel(MouseEventKind::ScrollUp));
        assert_eq!(*controller.move_scroll(), Some(1));
    }

    #[test]
    fn test_wheel_outside_moves_is_ignored() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
        let mut controller = GameController::default();
        controller.draw(&mut terminal).expect("draw");
        controller.handle_event(&Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(*controller.move_scroll(), None);
    }

    #[test]
    fn test_quit_key_breaks() {
        let mut controller = GameController::default();
        let quit = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(controller.handle_event(&quit).is_break());
    }
}

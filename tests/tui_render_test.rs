//! Rendering and click handling against an in-memory terminal.

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, layout::Rect, style::Color};
use tictactoe_replay::{GameController, GameState, SortOrder};

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("test terminal")
}

fn screen_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buf = terminal.backend().buffer();
    (0..buf.area.height)
        .map(|y| (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect::<String>())
        .collect()
}

fn screen_contains(terminal: &Terminal<TestBackend>, text: &str) -> bool {
    screen_lines(terminal).iter().any(|line| line.contains(text))
}

/// Draws, then left-clicks the middle of `pick(layout)`.
fn click(
    controller: &mut GameController,
    terminal: &mut Terminal<TestBackend>,
    pick: impl Fn(&tictactoe_replay::GameLayout) -> Rect,
) {
    controller.draw(terminal).expect("draw");
    let rect = pick(controller.layout().as_ref().expect("layout after draw"));
    controller.handle_event(&Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: rect.x + rect.width / 2,
        row: rect.y + rect.height / 2,
        modifiers: KeyModifiers::NONE,
    }));
}

fn click_square(controller: &mut GameController, terminal: &mut Terminal<TestBackend>, pos: usize) {
    click(controller, terminal, |layout| layout.cells()[pos]);
}

fn click_step(controller: &mut GameController, terminal: &mut Terminal<TestBackend>, step: usize) {
    click(controller, terminal, |layout| {
        layout
            .move_rows()
            .iter()
            .find(|(_, s)| *s == step)
            .map(|(rect, _)| *rect)
            .expect("step is listed")
    });
}

#[test]
fn test_initial_screen() {
    let mut terminal = terminal();
    let mut controller = GameController::default();
    controller.draw(&mut terminal).expect("draw");

    assert!(screen_contains(&terminal, "Next player: X"));
    assert!(screen_contains(&terminal, "moves descending"));
    assert!(screen_contains(&terminal, "0. Go to game start"));
}

#[test]
fn test_win_is_highlighted_and_reported() {
    let mut terminal = terminal();
    let mut controller = GameController::default();

    for pos in [0, 1, 4, 2, 8] {
        click_square(&mut controller, &mut terminal, pos);
    }
    controller.draw(&mut terminal).expect("draw");

    assert!(screen_contains(&terminal, "Winner: X"));
    assert!(screen_contains(&terminal, "5. Go to move #5 at (2,2)"));

    let cells = *controller.layout().as_ref().expect("layout").cells();
    let buf = terminal.backend().buffer();
    for (pos, cell) in cells.iter().enumerate() {
        let highlighted = buf[(cell.x, cell.y)].bg == Color::Green;
        assert_eq!(highlighted, [0, 4, 8].contains(&pos), "square {pos}");
    }
}

#[test]
fn test_clicks_after_win_do_nothing() {
    let mut terminal = terminal();
    let mut controller = GameController::default();
    for pos in [0, 1, 4, 2, 8, 5] {
        click_square(&mut controller, &mut terminal, pos);
    }
    assert_eq!(controller.state().history().len(), 6);
}

#[test]
fn test_jump_back_and_branch() {
    let mut terminal = terminal();
    let mut controller = GameController::default();
    for pos in [0, 4, 8] {
        click_square(&mut controller, &mut terminal, pos);
    }

    click_step(&mut controller, &mut terminal, 0);
    controller.draw(&mut terminal).expect("draw");
    assert!(screen_contains(&terminal, "Next player: X"));
    assert!(screen_contains(&terminal, "3. Go to move #3 at (2,2)"));

    click_square(&mut controller, &mut terminal, 2);
    controller.draw(&mut terminal).expect("draw");
    assert_eq!(controller.state().history().len(), 2);
    assert!(!screen_contains(&terminal, "Go to move #2"));
    assert!(screen_contains(&terminal, "1. Go to move #1 at (0,2)"));
}

#[test]
fn test_sort_toggle() {
    let mut terminal = terminal();
    let mut controller = GameController::default();
    for pos in [3, 5] {
        click_square(&mut controller, &mut terminal, pos);
    }

    click(&mut controller, &mut terminal, |layout| *layout.sort_toggle());
    assert_eq!(*controller.state().sort_order(), SortOrder::Descending);

    controller.draw(&mut terminal).expect("draw");
    assert!(screen_contains(&terminal, "moves ascending"));
    let steps: Vec<usize> = controller
        .layout()
        .as_ref()
        .expect("layout")
        .move_rows()
        .iter()
        .map(|(_, step)| *step)
        .collect();
    assert_eq!(steps, vec![2, 1, 0]);
}

#[test]
fn test_starts_descending_when_configured() {
    let mut terminal = terminal();
    let mut controller = GameController::new(GameState::with_sort_order(SortOrder::Descending));
    controller.draw(&mut terminal).expect("draw");
    assert!(screen_contains(&terminal, "moves ascending"));
}

#[test]
fn test_short_terminal_keeps_viewed_step_on_screen() {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).expect("test terminal");
    let mut controller = GameController::default();
    for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        click_square(&mut controller, &mut terminal, pos);
    }
    controller.draw(&mut terminal).expect("draw");

    assert!(screen_contains(&terminal, "Game ends in a draw!"));
    assert!(screen_contains(&terminal, "9. Go to move #9 at (2,2)"));
    assert!(!screen_contains(&terminal, "0. Go to game start"));

    // Every clickable row shows the entry it jumps to.
    let lines = screen_lines(&terminal);
    for (rect, step) in controller.layout().as_ref().expect("layout").move_rows() {
        let line: String = lines[usize::from(rect.y)]
            .chars()
            .skip(usize::from(rect.x))
            .collect();
        assert!(line.starts_with(&format!("{step}. ")), "row for step {step}: {line}");
    }

    click_step(&mut controller, &mut terminal, 3);
    controller.draw(&mut terminal).expect("draw");
    assert!(screen_contains(&terminal, "0. Go to game start"));
    assert_eq!(*controller.state().viewed_step(), 3);
}

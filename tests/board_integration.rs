//! Integration tests: the full app driven headlessly through a test
//! terminal, including mouse hit-testing against the rendered layout.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use argand::numeric::{AngleUnit, ComplexNumber};
use argand::persistence::config::{Config, SeedPoint};
use argand::scene::PointRegistry;
use argand::tui::app::App;

fn quiet_config(seed: Vec<SeedPoint>) -> Config {
    Config {
        scale: 20.0,
        speech_command: String::new(),
        show_details: true,
        seed,
    }
}

fn seed(re: f64, im: f64) -> SeedPoint {
    SeedPoint { re: Some(re), im: Some(im) }
}

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 50)).unwrap()
}

fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) {
    terminal.draw(|frame| app.render(frame)).unwrap();
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_seeded_session_renders_and_cycles_units() {
    let mut terminal = terminal();
    let mut app = App::new(quiet_config(vec![seed(5.0, 2.5), seed(-3.0, 2.0)]));
    draw(&mut terminal, &mut app);

    assert_eq!(app.registry.len(), 2);
    assert_eq!(app.sum.sum(), ComplexNumber::Full(2.0, 4.5));

    app.handle_key(key(KeyCode::Char('u')));
    assert_eq!(app.angle_unit, AngleUnit::PiRadians);
    app.handle_key(key(KeyCode::Char('u')));
    app.handle_key(key(KeyCode::Char('u')));
    assert_eq!(app.angle_unit, AngleUnit::Degrees);
    draw(&mut terminal, &mut app);
}

#[test]
fn test_mouse_grab_drag_release() {
    let mut terminal = terminal();
    let mut app = App::new(quiet_config(vec![seed(0.0, 0.0)]));
    draw(&mut terminal, &mut app);

    // The origin sits near the center of the plane widget.
    let grabbed = app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 50, 26));
    assert!(grabbed, "click near the marker should grab it");
    assert_eq!(app.active_index(), Some(0));

    // Drag to the right: plane and sum update on every move.
    for column in 51..=70 {
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), column, 26));
    }
    let dragged = app.entries()[0].0;
    assert!(dragged.re_or_zero() > 2.0, "point moved right, got {}", dragged);

    // Release forces the card refresh to the live value.
    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 70, 26));
    assert_eq!(app.cards.cards[0].cartesian, dragged.to_string());
}

#[test]
fn test_mouse_miss_does_not_grab() {
    let mut terminal = terminal();
    let mut app = App::new(quiet_config(vec![seed(5.0, 2.5)]));
    draw(&mut terminal, &mut app);

    // Far corner of the plane, nowhere near the marker.
    let grabbed = app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 45));
    assert!(!grabbed);

    // A drag without a grab is dropped.
    let before = app.entries()[0].0;
    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 20, 30));
    assert_eq!(app.entries()[0].0, before);
}

#[test]
fn test_add_card_click_plots_a_point() {
    let mut terminal = terminal();
    let mut app = App::new(quiet_config(vec![]));
    draw(&mut terminal, &mut app);

    // With no points, the first card slot is the add card.
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 3, 2));
    assert_eq!(app.registry.len(), 1);

    // The new point's slot now selects instead of adding.
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 3, 2));
    assert_eq!(app.registry.len(), 1);
    assert_eq!(app.cards.selected, 0);
}

#[test]
fn test_card_click_selects_point() {
    let mut terminal = terminal();
    let mut app = App::new(quiet_config(vec![seed(1.0, 0.0), seed(0.0, 1.0)]));
    draw(&mut terminal, &mut app);
    assert_eq!(app.cards.selected, 1);

    // First card occupies columns 0..20.
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 4, 3));
    assert_eq!(app.cards.selected, 0);
}

#[test]
fn test_palette_invariant_through_a_full_session() {
    let mut terminal = terminal();
    let mut app = App::new(quiet_config(vec![]));
    draw(&mut terminal, &mut app);

    let palette = PointRegistry::palette_size();
    for _ in 0..palette + 2 {
        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(
            app.registry.available_colors() + app.registry.len(),
            palette
        );
    }
    assert_eq!(app.registry.len(), palette);

    while !app.registry.is_empty() {
        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(
            app.registry.available_colors() + app.registry.len(),
            palette
        );
    }

    assert!(app.sum.marker().is_none());
    assert!(app.sum.aux_vectors().is_none());
    draw(&mut terminal, &mut app);
}

#[test]
fn test_sum_state_machine_through_removals() {
    let mut app = App::new(quiet_config(vec![
        seed(1.0, 0.0),
        seed(0.0, 2.0),
        seed(-1.0, -1.0),
    ]));

    // Three points: marker without projections.
    assert!(app.sum.marker().is_some());
    assert!(app.sum.aux_vectors().is_none());

    // Two points: the projection pair appears.
    app.remove_at(2);
    assert!(app.sum.aux_vectors().is_some());

    // One point: everything torn down.
    app.remove_at(1);
    assert!(app.sum.marker().is_none());
    assert!(app.sum.aux_vectors().is_none());
}

#[test]
fn test_glossary_overlay_renders_over_the_board() {
    let mut terminal = terminal();
    let mut app = App::new(quiet_config(vec![seed(1.0, 1.0)]));
    draw(&mut terminal, &mut app);

    app.handle_key(key(KeyCode::Char('g')));
    assert!(app.glossary.visible);
    draw(&mut terminal, &mut app);

    // Mouse input is ignored while the overlay is up.
    let handled = app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 50, 26));
    assert!(!handled);

    app.handle_key(key(KeyCode::Esc));
    assert!(!app.glossary.visible);
}

use std::path::PathBuf;

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use proptest::prelude::*;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use rangepick_tui::app::AppState;
use rangepick_tui::{input, ui};

fn app() -> AppState {
    AppState::new(PathBuf::from("state.json")).unwrap()
}

fn frame(terminal: &mut Terminal<TestBackend>, app: &mut AppState) -> ui::AppLayout {
    let mut out = None;
    terminal
        .draw(|f| {
            let layout = ui::layout(f.area());
            app.on_layout(layout.track);
            ui::draw(f, app, &layout);
            out = Some(layout);
        })
        .unwrap();
    out.unwrap()
}

fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf.cell((x, y)).map_or(" ", |c| c.symbol()).to_string())
        .collect()
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
fn first_frame_measures_track_and_lists_every_trip() {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let mut app = app();
    let layout = frame(&mut terminal, &mut app);

    assert_eq!(app.selector.geometry().measured_width(), Some(f64::from(layout.track.width)));

    let buf = terminal.backend().buffer();
    let track = row_text(buf, layout.track.y);
    assert_eq!(track.matches('●').count(), 2);

    let all: String = (0..buf.area.height).map(|y| row_text(buf, y)).collect();
    assert!(all.contains("Fjord Cruise"));
    assert!(all.contains("Safari Lodge"));
    assert!(all.contains("12/12 trips"));
}

#[test]
fn dragging_low_handle_hides_cheap_trips() {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let mut app = app();
    let layout = frame(&mut terminal, &mut app);

    let (x, y) = (layout.track.x, layout.track.y);
    input::handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), x, y));
    input::handle_mouse(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), x + 20, y));
    input::handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), x + 20, y));
    frame(&mut terminal, &mut app);

    let low = app.selector.low();
    assert!(low > 350.0);
    assert!(app.visible_trips().iter().all(|t| t.price >= low));

    let buf = terminal.backend().buffer();
    let all: String = (0..buf.area.height).map(|y| row_text(buf, y)).collect();
    assert!(!all.contains("Canal Stroll"));
}

#[test]
fn narrow_terminal_disables_slider() {
    let mut terminal = Terminal::new(TestBackend::new(4, 12)).unwrap();
    let mut app = app();
    let layout = frame(&mut terminal, &mut app);
    assert!(!app.selector.is_interactive());

    input::handle_mouse(
        &mut app,
        mouse(MouseEventKind::Down(MouseButton::Left), layout.track.x, layout.track.y),
    );
    assert!(app.pointer.is_none());
    assert_eq!(app.selector.values(), (350.0, 4650.0));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn arbitrary_pointer_input_keeps_band_ordered(
        ops in prop::collection::vec((0u8..3, 0u16..100, 0u16..30), 1..40),
    ) {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut app = app();
        frame(&mut terminal, &mut app);

        for (kind, column, row) in ops {
            let kind = match kind {
                0 => MouseEventKind::Down(MouseButton::Left),
                1 => MouseEventKind::Drag(MouseButton::Left),
                _ => MouseEventKind::Up(MouseButton::Left),
            };
            input::handle_mouse(&mut app, mouse(kind, column, row));
            let (low, high) = app.selector.values();
            prop_assert!(350.0 <= low && low < high && high <= 4650.0);
            prop_assert_eq!(app.query.price, Some((low, high)));
        }
    }
}

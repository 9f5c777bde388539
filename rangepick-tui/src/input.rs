//! Input dispatch: overlays first, then global keys; mouse goes to the slider.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{AppState, Overlay};

/// Steps moved by the uppercase nudge keys.
const BIG_NUDGE: i32 = 10;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter
            ) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::Search => {
            handle_search_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('?') => app.overlay = Overlay::Help,
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Char('h') | KeyCode::Left => app.nudge(-1),
        KeyCode::Char('l') | KeyCode::Right => app.nudge(1),
        KeyCode::Char('H') => app.nudge(-BIG_NUDGE),
        KeyCode::Char('L') => app.nudge(BIG_NUDGE),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::Char('r') => app.reset_price_band(),
        KeyCode::Char('/') => {
            app.search_input = app.query.text.clone();
            app.overlay = Overlay::Search;
        }
        KeyCode::Char('c') => {
            app.search_input.clear();
            app.apply_search();
        }
        _ => {}
    }
}

fn handle_search_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.overlay = Overlay::None;
            app.search_input = app.query.text.clone();
        }
        KeyCode::Enter => {
            app.apply_search();
            app.overlay = Overlay::None;
        }
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
        }
        _ => {}
    }
}

/// Handle a mouse event. Left-button press, drag and release drive the
/// slider; the wheel scrolls the trip list.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    if app.overlay != Overlay::None {
        return;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.press(mouse.column, mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => app.drag_to(mouse.column),
        MouseEventKind::Up(MouseButton::Left) => app.release(),
        MouseEventKind::ScrollDown => app.scroll_down(),
        MouseEventKind::ScrollUp => app.scroll_up(),
        _ => {}
    }
}

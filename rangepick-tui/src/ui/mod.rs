//! Top-level UI layout: header, price slider, trip list, status bar.

pub mod help_panel;
pub mod overlays;
pub mod price_panel;
pub mod status_bar;
pub mod trips_panel;
pub mod widgets;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, Overlay};
use crate::theme;

/// Screen regions for one frame.
///
/// `track` is the single row the slider is drawn on; pointer input is
/// mapped against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub price: Rect,
    pub track: Rect,
    pub trips: Rect,
    pub status: Rect,
}

pub fn layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let price = chunks[1];
    let inner = price_block(true).inner(price);
    // One column of padding either side keeps the end handles off the border.
    let track = Rect {
        x: inner.x.saturating_add(1),
        y: inner.y,
        width: inner.width.saturating_sub(2),
        height: inner.height.min(1),
    };

    AppLayout {
        header: chunks[0],
        price,
        track,
        trips: chunks[2],
        status: chunks[3],
    }
}

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState, layout: &AppLayout) {
    draw_header(f, layout.header, app);
    price_panel::render(f, layout, app);
    trips_panel::render(f, layout.trips, app);
    status_bar::render(f, layout.status, app);

    // Overlays on top.
    let main_area = Rect {
        height: layout.status.y.saturating_sub(layout.header.y),
        ..f.area()
    };
    match app.overlay {
        Overlay::Help => overlays::render_help(f, main_area),
        Overlay::Search => overlays::render_search(f, main_area, &app.search_input),
        Overlay::None => {}
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &AppState) {
    let count = app.visible_trips().len();
    let mut spans = vec![
        Span::styled(" Rangepick ", theme::accent_bold()),
        Span::styled(format!("{count}/{} trips", app.trips.len()), theme::text()),
        Span::styled(format!("  sort: {}", app.query.sort.label()), theme::neutral()),
    ];
    if !app.query.text.is_empty() {
        spans.push(Span::styled(
            format!("  search: \"{}\"", app.query.text),
            theme::warning(),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub(crate) fn price_block(active: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(active))
        .title(" Price ")
        .title_style(theme::panel_title(active))
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

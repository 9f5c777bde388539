//! Trip list filtered by the selected price band.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::AppState;
use crate::theme::{self, Theme};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let trips = app.visible_trips();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false))
        .title(format!(" Trips ({}) ", trips.len()))
        .title_style(theme::panel_title(false));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if trips.is_empty() {
        let msg = Paragraph::new(Span::styled(
            "No trips in this price band. Widen the range or press r to reset.",
            theme::warning(),
        ));
        f.render_widget(msg, inner);
        return;
    }

    let palette = Theme::default();
    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        format!(
            "{:<18} {:<24} {:>7} {:>6} {:>6}  {}",
            "Trip", "Destination", "Price", "Nights", "Rating", "Departs"
        ),
        theme::muted().add_modifier(Modifier::BOLD),
    ))];

    let rows = (inner.height as usize).saturating_sub(1);
    for trip in trips.iter().skip(app.trip_scroll).take(rows) {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<18} ", trip.title), theme::text()),
            Span::styled(format!("{:<24} ", trip.destination), theme::neutral()),
            Span::styled(format!("{:>7} ", format!("${:.0}", trip.price)), theme::accent()),
            Span::styled(format!("{:>6} ", trip.nights), theme::text()),
            Span::styled(
                format!("{:>6.1}  ", trip.rating),
                Style::default().fg(palette.rating_color(trip.rating)),
            ),
            Span::styled(trip.departs.format("%Y-%m-%d").to_string(), theme::muted()),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

//! Keyboard and mouse reference shown in the help overlay.

use ratatui::text::{Line, Span};

use crate::theme;

pub fn lines() -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Price band");
    key(&mut lines, "Tab", "Switch focus between low and high handle");
    key(&mut lines, "h / l, ← / →", "Nudge focused handle one step");
    key(&mut lines, "H / L", "Nudge focused handle ten steps");
    key(&mut lines, "mouse drag", "Grab a handle and drag it along the track");
    key(&mut lines, "r", "Reset to the full price range");
    lines.push(Line::from(""));

    section(&mut lines, "Trips");
    key(&mut lines, "j / k, ↓ / ↑", "Scroll the trip list");
    key(&mut lines, "s", "Cycle sort order");
    key(&mut lines, "/", "Search title or destination");
    key(&mut lines, "c", "Clear search");
    lines.push(Line::from(""));

    section(&mut lines, "General");
    key(&mut lines, "?", "Toggle this help");
    key(&mut lines, "q", "Quit (selection is saved)");

    lines
}

fn section(lines: &mut Vec<Line<'static>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key(lines: &mut Vec<Line<'static>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>14}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}

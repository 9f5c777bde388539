//! Dual-handle horizontal range slider.
//!
//! Draws one row: the track, the highlighted segment between the two handle
//! centres, and a glyph per handle. Positions come straight from the
//! selector, so one track column is one unit of track width.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use rangepick_core::{Handle, RangeSelector};

use crate::theme::Theme;

const TRACK: &str = "─";
const SELECTED: &str = "━";
const HANDLE: &str = "●";
const INERT: &str = "┄";

pub struct RangeSlider<'a> {
    selector: &'a RangeSelector,
    focus: Option<Handle>,
    theme: Theme,
}

impl<'a> RangeSlider<'a> {
    pub fn new(selector: &'a RangeSelector) -> Self {
        Self {
            selector,
            focus: None,
            theme: Theme::default(),
        }
    }

    pub fn focus(mut self, handle: Handle) -> Self {
        self.focus = Some(handle);
        self
    }

    fn handle_column(&self, area: Rect, handle: Handle) -> u16 {
        let offset = self.selector.position(handle).floor().max(0.0) as u16;
        area.x + offset.min(area.width.saturating_sub(1))
    }
}

impl Widget for RangeSlider<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let y = area.y;

        if !self.selector.is_interactive() {
            let style = Style::default().fg(self.theme.muted);
            for x in area.x..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(INERT).set_style(style);
                }
            }
            return;
        }

        let (from, to) = self.selector.highlight();
        let track_style = Style::default().fg(self.theme.muted);
        let selected_style = Style::default().fg(self.theme.accent);
        for x in area.x..area.right() {
            let centre = f64::from(x - area.x) + 0.5;
            let (symbol, style) = if centre >= from && centre <= to {
                (SELECTED, selected_style)
            } else {
                (TRACK, track_style)
            };
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(symbol).set_style(style);
            }
        }

        // Draw the focused handle last so it stays visible when they overlap.
        let order = match self.focus {
            Some(Handle::Low) => [Handle::High, Handle::Low],
            _ => [Handle::Low, Handle::High],
        };
        for handle in order {
            let color = self
                .theme
                .handle_color(self.focus == Some(handle), self.selector.is_dragging(handle));
            if let Some(cell) = buf.cell_mut((self.handle_column(area, handle), y)) {
                cell.set_symbol(HANDLE).set_style(Style::default().fg(color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rangepick_core::{GestureEvent, RangeConfig};

    fn selector(low: f64, high: f64) -> RangeSelector {
        let config = RangeConfig::new(0.0, 90.0)
            .with_step(10.0)
            .with_handle_diameter(1.0);
        let mut selector = RangeSelector::new(config, low, high).unwrap();
        selector.measure(10.0);
        selector
    }

    fn row(buf: &Buffer) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, 0)).map_or(" ", |c| c.symbol()).to_string())
            .collect()
    }

    #[test]
    fn full_band_is_highlighted_end_to_end() {
        let selector = selector(0.0, 90.0);
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        RangeSlider::new(&selector).render(buf.area, &mut buf);
        assert_eq!(row(&buf), "●━━━━━━━━●");
    }

    #[test]
    fn narrowed_band_leaves_plain_track_outside() {
        let selector = selector(20.0, 60.0);
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        RangeSlider::new(&selector).render(buf.area, &mut buf);
        assert_eq!(row(&buf), "──●━━━●───");
    }

    #[test]
    fn dragged_handle_uses_dragging_color() {
        let mut selector = selector(20.0, 60.0);
        selector.handle_event(GestureEvent::Start(Handle::High), &mut ());
        let theme = Theme::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        RangeSlider::new(&selector)
            .focus(Handle::Low)
            .render(buf.area, &mut buf);
        let high = buf.cell((6, 0)).unwrap();
        assert_eq!(high.fg, theme.positive);
        let low = buf.cell((2, 0)).unwrap();
        assert_eq!(low.fg, theme.accent);
    }

    #[test]
    fn degenerate_track_draws_inert_line() {
        let config = RangeConfig::new(0.0, 90.0).with_handle_diameter(20.0);
        let mut selector = RangeSelector::new(config, 0.0, 90.0).unwrap();
        selector.measure(10.0);
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        RangeSlider::new(&selector).render(buf.area, &mut buf);
        assert_eq!(row(&buf), "┄".repeat(10));
    }
}

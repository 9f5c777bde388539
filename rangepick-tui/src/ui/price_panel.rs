//! Price panel: the range slider plus a readout of the selected band.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use rangepick_core::Handle;

use crate::app::{AppState, Overlay};
use crate::theme;
use crate::ui::widgets::RangeSlider;
use crate::ui::{AppLayout, price_block};

pub fn render(f: &mut Frame, layout: &AppLayout, app: &AppState) {
    let block = price_block(app.overlay == Overlay::None);
    let inner = block.inner(layout.price);
    f.render_widget(block, layout.price);

    f.render_widget(RangeSlider::new(&app.selector).focus(app.focus), layout.track);

    if inner.height < 2 {
        return;
    }
    let readout = Rect {
        y: inner.y + 1,
        height: 1,
        ..layout.track
    };
    f.render_widget(Paragraph::new(readout_line(app)), readout);
}

fn readout_line(app: &AppState) -> Line<'static> {
    let geometry = app.selector.geometry();
    let mut spans = Vec::new();
    for handle in [Handle::Low, Handle::High] {
        let focused = app.focus == handle;
        let marker = if focused { "▸" } else { " " };
        let style = if focused {
            theme::accent_bold()
        } else {
            theme::text()
        };
        spans.push(Span::styled(
            format!("{marker}{} ${:.0}  ", handle.label(), app.selector.value(handle)),
            style,
        ));
    }
    if app.selector.is_interactive() {
        spans.push(Span::styled(
            format!(
                "range ${:.0}..${:.0}, step ${:.0}",
                geometry.domain_min(),
                geometry.domain_max(),
                geometry.step()
            ),
            theme::muted(),
        ));
    } else {
        spans.push(Span::styled("terminal too narrow for the slider", theme::warning()));
    }
    Line::from(spans)
}

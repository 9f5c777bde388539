//! Application state — single-owner, main-thread only.
//!
//! The trip query is the source of truth for the selected price band. The
//! range selector reports changes straight into it (the query is a
//! `RangeListener`) and is re-synced whenever the band is set from outside
//! (reset, restore).

use std::path::PathBuf;

use ratatui::layout::Rect;
use rangepick_core::{
    filter_trips, price_bounds, sample_trips, GestureEvent, Handle, RangeConfig, RangeSelector,
    SortKey, Trip, TripQuery,
};

/// Price granularity of the selector.
pub const PRICE_STEP: f64 = 50.0;

/// One terminal cell per handle.
pub const HANDLE_CELLS: f64 = 1.0;

/// Track width assumed before the first frame is laid out.
pub const FALLBACK_TRACK_CELLS: f64 = 60.0;

/// Overlay drawn on top of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    Search,
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// A pointer drag in progress, in terminal columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerDrag {
    pub handle: Handle,
    pub press_column: u16,
}

pub struct AppState {
    pub running: bool,

    pub selector: RangeSelector,
    pub trips: Vec<Trip>,
    pub query: TripQuery,
    pub focus: Handle,
    pub pointer: Option<PointerDrag>,
    /// Track rect from the last layout pass.
    pub track_area: Option<Rect>,
    pub trip_scroll: usize,

    pub overlay: Overlay,
    pub search_input: String,
    pub status_message: Option<(String, StatusLevel)>,

    pub state_path: PathBuf,
}

/// Selector domain covering every trip, widened out to whole steps.
pub fn price_domain(trips: &[Trip]) -> (f64, f64) {
    match price_bounds(trips) {
        Some((lo, hi)) => {
            let min = (lo / PRICE_STEP).floor() * PRICE_STEP;
            let max = (hi / PRICE_STEP).ceil() * PRICE_STEP;
            if max > min {
                (min, max)
            } else {
                (min, min + PRICE_STEP)
            }
        }
        None => (0.0, 5000.0),
    }
}

impl AppState {
    pub fn new(state_path: PathBuf) -> anyhow::Result<Self> {
        Self::with_trips(sample_trips(), state_path)
    }

    pub fn with_trips(trips: Vec<Trip>, state_path: PathBuf) -> anyhow::Result<Self> {
        let (min, max) = price_domain(&trips);
        let config = RangeConfig::new(min, max)
            .with_step(PRICE_STEP)
            .with_handle_diameter(HANDLE_CELLS)
            .with_fallback_track_width(FALLBACK_TRACK_CELLS);
        let selector = RangeSelector::new(config, min, max)?;
        Ok(Self {
            running: true,
            selector,
            trips,
            query: TripQuery {
                price: Some((min, max)),
                ..TripQuery::default()
            },
            focus: Handle::Low,
            pointer: None,
            track_area: None,
            trip_scroll: 0,
            overlay: Overlay::None,
            search_input: String::new(),
            status_message: None,
            state_path,
        })
    }

    /// Trips matching the current query.
    pub fn visible_trips(&self) -> Vec<&Trip> {
        filter_trips(&self.trips, &self.query)
    }

    /// Record where the track landed this frame and measure it.
    pub fn on_layout(&mut self, track: Rect) {
        self.track_area = Some(track);
        self.selector.measure(f64::from(track.width));
    }

    /// Push a price band into the selector and the query.
    pub fn set_price_band(&mut self, low: f64, high: f64) {
        self.selector.sync(low, high);
        self.query.price = Some(self.selector.values());
        self.trip_scroll = 0;
    }

    pub fn reset_price_band(&mut self) {
        let geometry = self.selector.geometry();
        let (min, max) = (geometry.domain_min(), geometry.domain_max());
        self.set_price_band(min, max);
        self.set_status("Price band reset");
    }

    pub fn nudge(&mut self, steps: i32) {
        if self.selector.nudge(self.focus, steps, &mut self.query).is_some() {
            self.trip_scroll = 0;
            self.report_band();
        }
    }

    /// Start a pointer drag if `column` lands on a handle.
    pub fn press(&mut self, column: u16, row: u16) {
        let Some(track) = self.track_area else {
            return;
        };
        if row != track.y || column < track.x || column >= track.right() {
            return;
        }
        self.release();
        let x = f64::from(column - track.x) + HANDLE_CELLS / 2.0;
        if let Some(handle) = self.selector.hit_test(x) {
            self.selector
                .handle_event(GestureEvent::Start(handle), &mut self.query);
            self.pointer = Some(PointerDrag {
                handle,
                press_column: column,
            });
            self.focus = handle;
        }
    }

    /// Continue the pointer drag with the cumulative column offset.
    pub fn drag_to(&mut self, column: u16) {
        let Some(drag) = self.pointer else {
            return;
        };
        let dx = f64::from(column) - f64::from(drag.press_column);
        let event = GestureEvent::Move {
            handle: drag.handle,
            dx,
        };
        if self.selector.handle_event(event, &mut self.query).is_some() {
            self.trip_scroll = 0;
            self.report_band();
        }
    }

    pub fn release(&mut self) {
        if let Some(drag) = self.pointer.take() {
            self.selector
                .handle_event(GestureEvent::Release(drag.handle), &mut self.query);
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.other();
    }

    pub fn cycle_sort(&mut self) {
        self.query.sort = self.query.sort.next();
        self.set_status(format!("Sorted by {}", self.query.sort.label()));
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
    }

    pub fn apply_search(&mut self) {
        self.query.text = self.search_input.trim().to_string();
        self.trip_scroll = 0;
        let count = self.visible_trips().len();
        if count == 0 {
            self.set_warning(format!("No trips match '{}'", self.query.text));
        } else {
            self.set_status(format!("{count} trips"));
        }
    }

    pub fn scroll_down(&mut self) {
        if self.trip_scroll + 1 < self.visible_trips().len() {
            self.trip_scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.trip_scroll = self.trip_scroll.saturating_sub(1);
    }

    fn report_band(&mut self) {
        let (low, high) = self.selector.values();
        let count = self.visible_trips().len();
        self.set_status(format!("${low:.0} – ${high:.0} · {count} trips"));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    /// Set an error status message.
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}

//! Dual-handle range selector — drag state machine over a measured track.
//!
//! The selector owns two values, `low` and `high`, and moves them in
//! response to gesture events:
//!
//! - `Start(handle)` records the handle's current position as the drag origin
//! - `Move { handle, dx }` places the handle at `origin + dx` (cumulative),
//!   clamped so it never touches the other handle, then quantizes
//! - `Release(handle)` forgets the origin; the value stays where it is
//!
//! Each handle has its own drag state, so two pointers can drag both
//! handles at once. A change is emitted only when the new value differs
//! from the old one and stays strictly ordered against the other handle.
//!
//! The caller owns the authoritative selection. Changes are reported through
//! a [`RangeListener`] and the caller may push values back with
//! [`RangeSelector::sync`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

use crate::config::RangeConfig;
use crate::error::RangeError;
use crate::geometry::TrackGeometry;

/// One of the two draggable endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    Low,
    High,
}

impl Handle {
    pub fn other(self) -> Handle {
        match self {
            Handle::Low => Handle::High,
            Handle::High => Handle::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Handle::Low => "low",
            Handle::High => "high",
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Handle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" | "lo" | "min" => Ok(Handle::Low),
            "high" | "hi" | "max" => Ok(Handle::High),
            other => Err(format!("unknown handle '{other}' (expected low or high)")),
        }
    }
}

/// Pointer gesture delivered by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Start(Handle),
    /// `dx` is the horizontal displacement since the drag started.
    Move { handle: Handle, dx: f64 },
    Release(Handle),
}

/// Per-handle drag state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        origin: f64,
    },
}

/// A value emitted for one handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeChange {
    pub handle: Handle,
    pub value: f64,
}

/// Receives value changes, one callback per handle.
pub trait RangeListener {
    fn on_low_change(&mut self, value: f64);
    fn on_high_change(&mut self, value: f64);
}

/// Discards every change.
impl RangeListener for () {
    fn on_low_change(&mut self, _value: f64) {}
    fn on_high_change(&mut self, _value: f64) {}
}

/// Records every change in order.
impl RangeListener for Vec<RangeChange> {
    fn on_low_change(&mut self, value: f64) {
        self.push(RangeChange {
            handle: Handle::Low,
            value,
        });
    }

    fn on_high_change(&mut self, value: f64) {
        self.push(RangeChange {
            handle: Handle::High,
            value,
        });
    }
}

/// Adapts a pair of closures into a [`RangeListener`].
pub struct Callbacks<L, H> {
    on_low: L,
    on_high: H,
}

impl<L, H> Callbacks<L, H>
where
    L: FnMut(f64),
    H: FnMut(f64),
{
    pub fn new(on_low: L, on_high: H) -> Self {
        Self { on_low, on_high }
    }
}

impl<L, H> RangeListener for Callbacks<L, H>
where
    L: FnMut(f64),
    H: FnMut(f64),
{
    fn on_low_change(&mut self, value: f64) {
        (self.on_low)(value);
    }

    fn on_high_change(&mut self, value: f64) {
        (self.on_high)(value);
    }
}

#[derive(Debug, Clone)]
pub struct RangeSelector {
    geometry: TrackGeometry,
    low: f64,
    high: f64,
    low_drag: DragState,
    high_drag: DragState,
    active: Option<Handle>,
}

impl RangeSelector {
    /// Build a selector over `config` with an initial selection.
    ///
    /// Rejects invalid configs and selections that are unordered or outside
    /// the domain. The initial values are taken as given, not quantized.
    pub fn new(config: RangeConfig, low: f64, high: f64) -> Result<Self, RangeError> {
        let geometry = TrackGeometry::new(&config)?;
        config.validate_selection(low, high)?;
        Ok(Self {
            geometry,
            low,
            high,
            low_drag: DragState::Idle,
            high_drag: DragState::Idle,
            active: None,
        })
    }

    pub fn geometry(&self) -> &TrackGeometry {
        &self.geometry
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn values(&self) -> (f64, f64) {
        (self.low, self.high)
    }

    pub fn value(&self, handle: Handle) -> f64 {
        match handle {
            Handle::Low => self.low,
            Handle::High => self.high,
        }
    }

    /// The most recently grabbed handle still being dragged. Visual only.
    pub fn active_handle(&self) -> Option<Handle> {
        self.active
    }

    pub fn drag_state(&self, handle: Handle) -> DragState {
        match handle {
            Handle::Low => self.low_drag,
            Handle::High => self.high_drag,
        }
    }

    pub fn is_dragging(&self, handle: Handle) -> bool {
        matches!(self.drag_state(handle), DragState::Dragging { .. })
    }

    pub fn is_interactive(&self) -> bool {
        self.geometry.is_interactive()
    }

    /// Feed a layout measurement of the track width.
    pub fn measure(&mut self, width: f64) -> bool {
        self.geometry.measure(width)
    }

    /// Left-edge position of a handle on the track.
    pub fn position(&self, handle: Handle) -> f64 {
        self.geometry.value_to_position(self.value(handle))
    }

    /// Span of the highlighted segment, from the low handle's centre to the
    /// high handle's centre.
    pub fn highlight(&self) -> (f64, f64) {
        let radius = self.geometry.handle_diameter() / 2.0;
        (
            self.position(Handle::Low) + radius,
            self.position(Handle::High) + radius,
        )
    }

    /// Which handle a press at track offset `x` grabs.
    ///
    /// The nearest handle centre wins if it lies within one handle diameter.
    /// When both handles overlap, the high handle is grabbed unless it is
    /// pinned at the domain maximum, so the user can always pull them apart.
    pub fn hit_test(&self, x: f64) -> Option<Handle> {
        if !x.is_finite() || !self.is_interactive() {
            return None;
        }
        let (low_centre, high_centre) = self.highlight();
        let reach = self.geometry.handle_diameter();
        let low_dist = (x - low_centre).abs();
        let high_dist = (x - high_centre).abs();

        let nearest = if low_centre == high_centre {
            if self.high >= self.geometry.domain_max() {
                Handle::Low
            } else {
                Handle::High
            }
        } else if low_dist < high_dist {
            Handle::Low
        } else {
            Handle::High
        };

        let dist = low_dist.min(high_dist);
        (reach == 0.0 || dist <= reach).then_some(nearest)
    }

    /// Run one gesture through the state machine and notify `listener` of
    /// any resulting change.
    pub fn handle_event(
        &mut self,
        event: GestureEvent,
        listener: &mut impl RangeListener,
    ) -> Option<RangeChange> {
        let change = match event {
            GestureEvent::Start(handle) => {
                self.start_drag(handle);
                None
            }
            GestureEvent::Move { handle, dx } => self.drag_move(handle, dx),
            GestureEvent::Release(handle) => {
                self.release(handle);
                None
            }
        };
        if let Some(change) = change {
            notify(listener, change);
        }
        change
    }

    /// Move a handle by whole steps, as a keyboard or accessibility action.
    ///
    /// The handle stays inside the domain and at least one step away from
    /// the other handle; if there is no room, nothing changes.
    pub fn nudge(
        &mut self,
        handle: Handle,
        steps: i32,
        listener: &mut impl RangeListener,
    ) -> Option<RangeChange> {
        if steps == 0 {
            return None;
        }
        let step = self.geometry.step();
        let target = self.geometry.snap(self.value(handle) + f64::from(steps) * step);
        let target = match handle {
            Handle::Low if target >= self.high => self.geometry.quantize(self.high - step),
            Handle::High if target <= self.low => self.geometry.quantize(self.low + step),
            _ => target,
        };
        let change = self.commit(handle, target)?;
        notify(listener, change);
        Some(change)
    }

    /// Apply values pushed by the caller (a prop change).
    ///
    /// Values are snapped into the domain and put in order. Non-finite
    /// input is ignored. No listener is notified.
    pub fn sync(&mut self, low: f64, high: f64) -> bool {
        if !low.is_finite() || !high.is_finite() {
            debug!(low, high, "ignoring non-finite sync");
            return false;
        }
        let (mut low, mut high) = (self.geometry.snap(low), self.geometry.snap(high));
        if low > high {
            std::mem::swap(&mut low, &mut high);
        }
        let changed = low != self.low || high != self.high;
        self.low = low;
        self.high = high;
        changed
    }

    fn start_drag(&mut self, handle: Handle) {
        let origin = self.position(handle);
        debug!(%handle, origin, "drag start");
        self.set_drag_state(handle, DragState::Dragging { origin });
        self.active = Some(handle);
    }

    fn release(&mut self, handle: Handle) {
        if !self.is_dragging(handle) {
            trace!(%handle, "release without drag");
            return;
        }
        debug!(%handle, value = self.value(handle), "drag release");
        self.set_drag_state(handle, DragState::Idle);
        if self.active == Some(handle) {
            self.active = if self.is_dragging(handle.other()) {
                Some(handle.other())
            } else {
                None
            };
        }
    }

    fn drag_move(&mut self, handle: Handle, dx: f64) -> Option<RangeChange> {
        let DragState::Dragging { origin } = self.drag_state(handle) else {
            trace!(%handle, dx, "move without drag");
            return None;
        };
        if !dx.is_finite() {
            trace!(%handle, "ignoring non-finite delta");
            return None;
        }
        let Some(usable) = self.geometry.usable_width() else {
            trace!(%handle, width = self.geometry.track_width(), "track too narrow, ignoring move");
            return None;
        };

        let diameter = self.geometry.handle_diameter();
        let candidate = origin + dx;
        // Chained min/max rather than clamp: the bounds cross when the
        // handles are closer than one diameter.
        let position = match handle {
            Handle::Low => candidate
                .min(self.position(Handle::High) - diameter)
                .max(0.0),
            Handle::High => candidate
                .max(self.position(Handle::Low) + diameter)
                .min(usable),
        };
        let value = self.geometry.position_to_value(position)?;
        self.commit(handle, value)
    }

    fn commit(&mut self, handle: Handle, value: f64) -> Option<RangeChange> {
        let (current, ordered) = match handle {
            Handle::Low => (self.low, value < self.high),
            Handle::High => (self.high, value > self.low),
        };
        if value == current {
            return None;
        }
        if !ordered {
            trace!(%handle, value, "rejecting value that would cross the other handle");
            return None;
        }
        match handle {
            Handle::Low => self.low = value,
            Handle::High => self.high = value,
        }
        debug!(%handle, value, "value changed");
        Some(RangeChange { handle, value })
    }

    fn set_drag_state(&mut self, handle: Handle, state: DragState) {
        match handle {
            Handle::Low => self.low_drag = state,
            Handle::High => self.high_drag = state,
        }
    }
}

fn notify(listener: &mut impl RangeListener, change: RangeChange) {
    match change.handle {
        Handle::Low => listener.on_low_change(change.value),
        Handle::High => listener.on_high_change(change.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(min: f64, max: f64, step: f64, low: f64, high: f64) -> RangeSelector {
        RangeSelector::new(RangeConfig::new(min, max).with_step(step), low, high).unwrap()
    }

    fn drag(sel: &mut RangeSelector, handle: Handle, dx: f64) -> Vec<RangeChange> {
        let mut changes = Vec::new();
        sel.handle_event(GestureEvent::Start(handle), &mut changes);
        sel.handle_event(GestureEvent::Move { handle, dx }, &mut changes);
        sel.handle_event(GestureEvent::Release(handle), &mut changes);
        changes
    }

    #[test]
    fn new_rejects_bad_selection() {
        let config = RangeConfig::new(0.0, 100.0);
        assert!(RangeSelector::new(config, 80.0, 20.0).is_err());
        assert!(RangeSelector::new(config, -5.0, 20.0).is_err());
        assert!(RangeSelector::new(RangeConfig::new(5.0, 5.0), 5.0, 5.0).is_err());
    }

    #[test]
    fn handle_parses_from_str() {
        assert_eq!("low".parse::<Handle>(), Ok(Handle::Low));
        assert_eq!(" HIGH ".parse::<Handle>(), Ok(Handle::High));
        assert_eq!("max".parse::<Handle>(), Ok(Handle::High));
        assert!("middle".parse::<Handle>().is_err());
    }

    #[test]
    fn drag_start_and_release_track_active_handle() {
        let mut sel = selector(0.0, 100.0, 1.0, 20.0, 80.0);
        assert_eq!(sel.active_handle(), None);

        sel.handle_event(GestureEvent::Start(Handle::Low), &mut ());
        assert_eq!(sel.active_handle(), Some(Handle::Low));
        let DragState::Dragging { origin } = sel.drag_state(Handle::Low) else {
            panic!("low handle should be dragging");
        };
        assert!((origin - 56.0).abs() < 1e-9);

        sel.handle_event(GestureEvent::Release(Handle::Low), &mut ());
        assert_eq!(sel.active_handle(), None);
        assert_eq!(sel.drag_state(Handle::Low), DragState::Idle);
    }

    #[test]
    fn release_hands_priority_to_other_dragged_handle() {
        let mut sel = selector(0.0, 100.0, 1.0, 20.0, 80.0);
        sel.handle_event(GestureEvent::Start(Handle::Low), &mut ());
        sel.handle_event(GestureEvent::Start(Handle::High), &mut ());
        assert_eq!(sel.active_handle(), Some(Handle::High));

        sel.handle_event(GestureEvent::Release(Handle::High), &mut ());
        assert_eq!(sel.active_handle(), Some(Handle::Low));
    }

    #[test]
    fn move_is_cumulative_from_drag_origin() {
        let mut sel = selector(0.0, 100.0, 1.0, 20.0, 80.0);
        let mut changes = Vec::new();
        sel.handle_event(GestureEvent::Start(Handle::Low), &mut changes);
        // 28px of 280 usable = 10 units
        sel.handle_event(GestureEvent::Move { handle: Handle::Low, dx: 28.0 }, &mut changes);
        sel.handle_event(GestureEvent::Move { handle: Handle::Low, dx: 56.0 }, &mut changes);
        assert_eq!(
            changes,
            vec![
                RangeChange { handle: Handle::Low, value: 30.0 },
                RangeChange { handle: Handle::Low, value: 40.0 },
            ]
        );
    }

    #[test]
    fn move_without_start_is_ignored() {
        let mut sel = selector(0.0, 100.0, 1.0, 20.0, 80.0);
        let mut changes = Vec::new();
        let change =
            sel.handle_event(GestureEvent::Move { handle: Handle::High, dx: -50.0 }, &mut changes);
        assert_eq!(change, None);
        assert!(changes.is_empty());
        assert_eq!(sel.values(), (20.0, 80.0));
    }

    #[test]
    fn unchanged_value_is_not_emitted() {
        let mut sel = selector(0.0, 100.0, 1.0, 20.0, 80.0);
        // Less than half a step of travel.
        let changes = drag(&mut sel, Handle::High, 1.0);
        assert!(changes.is_empty());
    }

    #[test]
    fn huge_deltas_clamp_to_domain_bounds() {
        let mut sel = selector(0.0, 100.0, 1.0, 20.0, 80.0);
        assert_eq!(drag(&mut sel, Handle::Low, -1e9).last().map(|c| c.value), Some(0.0));
        assert_eq!(drag(&mut sel, Handle::High, 1e9).last().map(|c| c.value), Some(100.0));
        assert_eq!(sel.values(), (0.0, 100.0));
    }

    #[test]
    fn low_stops_short_of_high() {
        let mut sel = selector(0.0, 100.0, 1.0, 20.0, 80.0);
        let changes = drag(&mut sel, Handle::Low, 0.9 * 300.0);
        let value = changes.last().map(|c| c.value).unwrap();
        assert!(value <= 79.0, "low reached {value}");
        assert!(!value.is_nan());
        assert!(sel.low() < sel.high());
    }

    #[test]
    fn high_stops_short_of_low() {
        let mut sel = selector(0.0, 100.0, 1.0, 20.0, 80.0);
        drag(&mut sel, Handle::High, -1e6);
        assert!(sel.high() > sel.low());
        assert!(sel.high() >= 21.0);
    }

    #[test]
    fn narrow_track_ignores_moves() {
        let mut sel = selector(0.0, 100.0, 1.0, 20.0, 80.0);
        sel.measure(15.0);
        assert!(!sel.is_interactive());
        let changes = drag(&mut sel, Handle::Low, 100.0);
        assert!(changes.is_empty());
        assert_eq!(sel.values(), (20.0, 80.0));
    }

    #[test]
    fn non_finite_delta_is_ignored() {
        let mut sel = selector(0.0, 100.0, 1.0, 20.0, 80.0);
        assert!(drag(&mut sel, Handle::Low, f64::NAN).is_empty());
        assert!(drag(&mut sel, Handle::Low, f64::INFINITY).is_empty());
        assert_eq!(sel.low(), 20.0);
    }

    #[test]
    fn closures_receive_changes() {
        let mut sel = selector(0.0, 100.0, 1.0, 20.0, 80.0);
        let mut lows = Vec::new();
        let mut highs = Vec::new();
        {
            let mut callbacks = Callbacks::new(|v: f64| lows.push(v), |v: f64| highs.push(v));
            sel.handle_event(GestureEvent::Start(Handle::High), &mut callbacks);
            sel.handle_event(
                GestureEvent::Move {
                    handle: Handle::High,
                    dx: -28.0,
                },
                &mut callbacks,
            );
        }
        assert!(lows.is_empty());
        assert_eq!(highs, vec![70.0]);
    }

    #[test]
    fn nudge_moves_by_whole_steps() {
        let mut sel = selector(0.0, 1000.0, 10.0, 400.0, 600.0);
        let mut changes = Vec::new();
        sel.nudge(Handle::Low, 3, &mut changes);
        sel.nudge(Handle::High, -1, &mut changes);
        assert_eq!(sel.values(), (430.0, 590.0));
        assert_eq!(changes.len(), 2);
    }

    #[test]
    fn nudge_keeps_one_step_gap() {
        let mut sel = selector(0.0, 1000.0, 10.0, 400.0, 420.0);
        sel.nudge(Handle::Low, 10, &mut ());
        assert_eq!(sel.low(), 410.0);
        assert_eq!(sel.nudge(Handle::Low, 1, &mut ()), None);
        sel.nudge(Handle::High, -10, &mut ());
        assert_eq!(sel.high(), 420.0);
    }

    #[test]
    fn nudge_reaches_uneven_domain_max() {
        let mut sel = selector(0.0, 95.0, 10.0, 0.0, 80.0);
        sel.nudge(Handle::High, 1, &mut ());
        assert_eq!(sel.high(), 90.0);
        sel.nudge(Handle::High, 1, &mut ());
        assert_eq!(sel.high(), 95.0);
        assert_eq!(sel.nudge(Handle::High, 1, &mut ()), None);
    }

    #[test]
    fn sync_snaps_and_orders() {
        let mut sel = selector(0.0, 100.0, 5.0, 20.0, 80.0);
        assert!(sel.sync(91.0, 12.0));
        assert_eq!(sel.values(), (10.0, 90.0));
        assert!(sel.sync(-40.0, 400.0));
        assert_eq!(sel.values(), (0.0, 100.0));
        assert!(!sel.sync(f64::NAN, 50.0));
        assert!(!sel.sync(0.0, 100.0));
    }

    #[test]
    fn highlight_spans_handle_centres() {
        let sel = selector(0.0, 100.0, 1.0, 25.0, 75.0);
        assert_eq!(sel.highlight(), (80.0, 220.0));
    }

    #[test]
    fn hit_test_picks_nearest_handle() {
        let sel = selector(0.0, 100.0, 1.0, 25.0, 75.0);
        assert_eq!(sel.hit_test(80.0), Some(Handle::Low));
        assert_eq!(sel.hit_test(215.0), Some(Handle::High));
        assert_eq!(sel.hit_test(150.0), None);
        assert_eq!(sel.hit_test(f64::NAN), None);
    }

    #[test]
    fn hit_test_on_overlapping_handles() {
        let sel = selector(0.0, 100.0, 1.0, 50.0, 50.0);
        assert_eq!(sel.hit_test(150.0), Some(Handle::High));

        let pinned = selector(0.0, 100.0, 1.0, 100.0, 100.0);
        assert_eq!(pinned.hit_test(290.0), Some(Handle::Low));
    }

    #[test]
    fn coarse_step_drag_snapping_onto_high_is_dropped() {
        // One step is 70px but a handle only 20px, so the farthest low can
        // travel (50px) still rounds up to high's value.
        let mut sel = selector(0.0, 1000.0, 250.0, 0.0, 250.0);
        assert!(drag(&mut sel, Handle::Low, 60.0).is_empty());
        assert_eq!(sel.values(), (0.0, 250.0));
        assert!(!sel.is_dragging(Handle::Low));
    }
}

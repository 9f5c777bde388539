//! Property tests for selector invariants.
//!
//! Uses proptest to verify:
//! 1. Ordering — `min <= low <= high <= max` after every gesture
//! 2. Quantization — every emitted value sits on the step grid or at `max`
//! 3. Idempotence — one quantization pass is a fixed point
//! 4. Non-crossing — a low handle dragged at a close high handle stays a step below it

use proptest::prelude::*;
use rangepick_core::{GestureEvent, Handle, RangeChange, RangeConfig, RangeSelector};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_step() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.5), Just(1.0), Just(5.0), Just(10.0), Just(25.0)]
}

/// (config, steps in domain) with a domain that is a whole number of steps.
fn arb_config() -> impl Strategy<Value = (RangeConfig, u32)> {
    (-500i32..500, 2u32..400, arb_step(), 0.0..40.0_f64).prop_map(|(min, n, step, diameter)| {
        let min = f64::from(min);
        let config = RangeConfig::new(min, min + f64::from(n) * step)
            .with_step(step)
            .with_handle_diameter(diameter);
        (config, n)
    })
}

fn arb_handle() -> impl Strategy<Value = Handle> {
    prop_oneof![Just(Handle::Low), Just(Handle::High)]
}

#[derive(Debug, Clone)]
enum Op {
    Start(Handle),
    Move(Handle, f64),
    Release(Handle),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arb_handle().prop_map(Op::Start),
        (arb_handle(), -2000.0..2000.0_f64).prop_map(|(h, dx)| Op::Move(h, dx)),
        arb_handle().prop_map(Op::Release),
    ]
}

fn to_event(op: &Op) -> GestureEvent {
    match *op {
        Op::Start(handle) => GestureEvent::Start(handle),
        Op::Move(handle, dx) => GestureEvent::Move { handle, dx },
        Op::Release(handle) => GestureEvent::Release(handle),
    }
}

fn on_grid(config: &RangeConfig, value: f64) -> bool {
    let k = ((value - config.domain_min) / config.step).round();
    value == config.domain_max || value == config.domain_min + k * config.step
}

// ── 1 + 2. Ordering and quantization ─────────────────────────────────

proptest! {
    #[test]
    fn ordering_and_grid_hold_under_any_gestures(
        (config, n) in arb_config(),
        picks in (0u32..1000, 0u32..1000),
        width in 0.0..900.0_f64,
        ops in prop::collection::vec(arb_op(), 1..60),
    ) {
        let (a, b) = (picks.0 % (n + 1), picks.1 % (n + 1));
        let low = config.domain_min + f64::from(a.min(b)) * config.step;
        let high = config.domain_min + f64::from(a.max(b)) * config.step;
        let mut selector = RangeSelector::new(config, low, high).unwrap();
        selector.measure(width);

        let mut changes: Vec<RangeChange> = Vec::new();
        for op in &ops {
            selector.handle_event(to_event(op), &mut changes);
            let (low, high) = selector.values();
            prop_assert!(config.domain_min <= low, "low {} below min", low);
            prop_assert!(low <= high, "low {} above high {}", low, high);
            prop_assert!(high <= config.domain_max, "high {} above max", high);
        }
        for change in &changes {
            prop_assert!(change.value.is_finite());
            prop_assert!(on_grid(&config, change.value), "{} is off the grid", change.value);
        }
    }
}

// ── 3. Idempotence ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn quantization_is_idempotent(
        (config, n) in arb_config(),
        pick in 0u32..1000,
        width in 50.0..900.0_f64,
    ) {
        let mut selector =
            RangeSelector::new(config, config.domain_min, config.domain_max).unwrap();
        selector.measure(width);
        let geometry = selector.geometry();

        let value = config.domain_min + f64::from(pick % (n + 1)) * config.step;
        let position = geometry.value_to_position(value);
        let back = geometry.position_to_value(position).unwrap();
        prop_assert_eq!(back, value);
        prop_assert_eq!(geometry.value_to_position(back), position);
    }
}

// ── 4. Non-crossing ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn low_never_passes_close_high(
        dx in -5000.0..5000.0_f64,
        width in 0.0..1200.0_f64,
    ) {
        let config = RangeConfig::new(0.0, 1000.0).with_step(10.0);
        let mut selector = RangeSelector::new(config, 400.0, 420.0).unwrap();
        selector.measure(width);

        selector.handle_event(GestureEvent::Start(Handle::Low), &mut ());
        selector.handle_event(GestureEvent::Move { handle: Handle::Low, dx }, &mut ());
        prop_assert!(selector.low() <= selector.high() - 10.0);
        prop_assert_eq!(selector.high(), 420.0);
    }
}

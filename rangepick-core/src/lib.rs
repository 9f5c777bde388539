//! Rangepick Core — headless dual-handle range selector.
//!
//! This crate contains everything a host UI needs to drive a range selector
//! without owning any of the maths:
//! - Config with validation and TOML loading
//! - Track geometry: value ↔ position mapping and step quantization
//! - Drag state machine with per-handle origins and non-crossing clamps
//! - Scripted drag scenarios with JSON-serializable reports
//! - Trip catalog filtering, the selector's main consumer

pub mod catalog;
pub mod config;
pub mod error;
pub mod geometry;
pub mod scenario;
pub mod script;
pub mod selector;

pub use catalog::{filter_trips, price_bounds, sample_trips, SortKey, Trip, TripQuery};
pub use config::RangeConfig;
pub use error::{ConfigError, RangeError};
pub use geometry::TrackGeometry;
pub use scenario::{Scenario, ScenarioReport, StepReport};
pub use script::{DragOp, ScriptError};
pub use selector::{
    Callbacks, DragState, GestureEvent, Handle, RangeChange, RangeListener, RangeSelector,
};

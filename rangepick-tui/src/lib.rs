//! Rangepick TUI: browse trips by dragging a price band.
//!
//! The library half exposes app state, input handling and rendering so they
//! can be driven against a test backend.

pub mod app;
pub mod input;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use theme::Theme;

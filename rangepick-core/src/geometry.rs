//! Track geometry — value ↔ position mapping and step quantization.
//!
//! Positions are the left edge of a handle, measured from the start of the
//! track. A handle at position `p` covers `[p, p + handle_diameter]`, so the
//! usable travel is `track_width - handle_diameter`.
//!
//! The track width is unknown until the host lays the track out. Until then
//! the configured fallback width stands in so the selector stays usable,
//! even if positions are only approximate.

use tracing::debug;

use crate::config::RangeConfig;
use crate::error::RangeError;

#[derive(Debug, Clone, PartialEq)]
pub struct TrackGeometry {
    domain_min: f64,
    domain_max: f64,
    step: f64,
    handle_diameter: f64,
    fallback_width: f64,
    measured_width: Option<f64>,
}

impl TrackGeometry {
    pub fn new(config: &RangeConfig) -> Result<Self, RangeError> {
        config.validate()?;
        Ok(Self {
            domain_min: config.domain_min,
            domain_max: config.domain_max,
            step: config.step,
            handle_diameter: config.handle_diameter,
            fallback_width: config.fallback_track_width,
            measured_width: None,
        })
    }

    pub fn domain_min(&self) -> f64 {
        self.domain_min
    }

    pub fn domain_max(&self) -> f64 {
        self.domain_max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn handle_diameter(&self) -> f64 {
        self.handle_diameter
    }

    fn span(&self) -> f64 {
        self.domain_max - self.domain_min
    }

    /// Record a layout measurement. Non-finite or negative widths are dropped.
    ///
    /// Returns true if the stored width changed.
    pub fn measure(&mut self, width: f64) -> bool {
        if !width.is_finite() || width < 0.0 {
            debug!(width, "ignoring invalid track measurement");
            return false;
        }
        if self.measured_width == Some(width) {
            return false;
        }
        debug!(width, previous = ?self.measured_width, "track measured");
        self.measured_width = Some(width);
        true
    }

    /// The measured width, if a layout pass has happened.
    pub fn measured_width(&self) -> Option<f64> {
        self.measured_width
    }

    /// The width conversions use: measured, else the fallback.
    pub fn track_width(&self) -> f64 {
        self.measured_width.unwrap_or(self.fallback_width)
    }

    /// Travel available to a handle's left edge, or `None` when the track
    /// is not wider than one handle.
    pub fn usable_width(&self) -> Option<f64> {
        let usable = self.track_width() - self.handle_diameter;
        (usable > 0.0).then_some(usable)
    }

    pub fn is_interactive(&self) -> bool {
        self.usable_width().is_some()
    }

    /// Round to the nearest `domain_min + k * step`, clamped into the domain.
    pub fn quantize(&self, value: f64) -> f64 {
        let k = ((value - self.domain_min) / self.step).round();
        (self.domain_min + k * self.step).clamp(self.domain_min, self.domain_max)
    }

    /// Like [`quantize`](Self::quantize), but the domain bounds themselves
    /// always survive, even when `step` does not divide the domain.
    pub fn snap(&self, value: f64) -> f64 {
        if value <= self.domain_min {
            self.domain_min
        } else if value >= self.domain_max {
            self.domain_max
        } else {
            self.quantize(value)
        }
    }

    /// Left-edge position of a handle showing `value`.
    ///
    /// A degenerate track collapses every value onto position 0.
    pub fn value_to_position(&self, value: f64) -> f64 {
        match self.usable_width() {
            Some(usable) => (value - self.domain_min) / self.span() * usable,
            None => 0.0,
        }
    }

    /// Quantized value for a handle whose left edge sits at `position`.
    ///
    /// The track ends map to the exact domain bounds. Returns `None` when
    /// the track is degenerate or the position is not finite.
    pub fn position_to_value(&self, position: f64) -> Option<f64> {
        let usable = self.usable_width()?;
        if !position.is_finite() {
            return None;
        }
        if position <= 0.0 {
            return Some(self.domain_min);
        }
        if position >= usable {
            return Some(self.domain_max);
        }
        Some(self.quantize(position / usable * self.span() + self.domain_min))
    }
}

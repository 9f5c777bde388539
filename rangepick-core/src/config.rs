//! Range selector configuration — domain, step, and track geometry.
//!
//! Stored as TOML. Every field has a default so a config file only needs
//! to name what it changes:
//!
//! ```toml
//! domain_min = 0.0
//! domain_max = 5000.0
//! step = 50.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, RangeError};

/// Track width assumed until the first layout measurement lands.
pub const DEFAULT_TRACK_WIDTH: f64 = 300.0;

/// Handle diameter in track units (pixels for touch hosts).
pub const DEFAULT_HANDLE_DIAMETER: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    pub domain_min: f64,
    pub domain_max: f64,
    pub step: f64,
    pub handle_diameter: f64,
    pub fallback_track_width: f64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            domain_min: 0.0,
            domain_max: 100.0,
            step: 1.0,
            handle_diameter: DEFAULT_HANDLE_DIAMETER,
            fallback_track_width: DEFAULT_TRACK_WIDTH,
        }
    }
}

impl RangeConfig {
    /// Config for the given domain with default step and geometry.
    pub fn new(domain_min: f64, domain_max: f64) -> Self {
        Self {
            domain_min,
            domain_max,
            ..Self::default()
        }
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn with_handle_diameter(mut self, handle_diameter: f64) -> Self {
        self.handle_diameter = handle_diameter;
        self
    }

    pub fn with_fallback_track_width(mut self, width: f64) -> Self {
        self.fallback_track_width = width;
        self
    }

    /// Load a config from a TOML file and validate it.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string and validate it.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check domain ordering, step positivity, and geometry.
    pub fn validate(&self) -> Result<(), RangeError> {
        let (min, max) = (self.domain_min, self.domain_max);
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(RangeError::InvalidDomain { min, max });
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(RangeError::InvalidStep(self.step));
        }
        let diameter_ok = self.handle_diameter.is_finite() && self.handle_diameter >= 0.0;
        let width_ok = self.fallback_track_width.is_finite() && self.fallback_track_width > 0.0;
        if !diameter_ok || !width_ok {
            return Err(RangeError::InvalidGeometry {
                handle_diameter: self.handle_diameter,
                fallback_track_width: self.fallback_track_width,
            });
        }
        Ok(())
    }

    /// Check that `[low, high]` is an ordered selection inside the domain.
    pub fn validate_selection(&self, low: f64, high: f64) -> Result<(), RangeError> {
        let ordered = low.is_finite()
            && high.is_finite()
            && self.domain_min <= low
            && low <= high
            && high <= self.domain_max;
        if ordered {
            Ok(())
        } else {
            Err(RangeError::InvalidSelection {
                low,
                high,
                min: self.domain_min,
                max: self.domain_max,
            })
        }
    }
}

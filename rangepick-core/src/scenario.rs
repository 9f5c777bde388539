//! Drag scenarios — replay a sequence of drags against a selector.
//!
//! A scenario is a TOML document:
//!
//! ```toml
//! low = 20.0
//! high = 80.0
//! track_width = 300.0
//!
//! [range]
//! domain_min = 0.0
//! domain_max = 100.0
//!
//! [[drag]]
//! handle = "low"
//! dx = 270.0
//! ```
//!
//! Running it produces a [`ScenarioReport`] with every emitted change and
//! the selection after each step.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::RangeConfig;
use crate::error::{ConfigError, RangeError};
use crate::script::DragOp;
use crate::selector::{GestureEvent, Handle, RangeChange, RangeSelector};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub range: RangeConfig,
    pub low: f64,
    pub high: f64,
    /// Measured track width. Without it the fallback width applies.
    #[serde(default)]
    pub track_width: Option<f64>,
    #[serde(default, rename = "drag")]
    pub drags: Vec<DragOp>,
}

/// Outcome of one drag op.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub handle: Handle,
    pub dx: f64,
    pub emitted: Option<f64>,
    pub low: f64,
    pub high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub track_width: f64,
    pub interactive: bool,
    pub steps: Vec<StepReport>,
    pub changes: Vec<RangeChange>,
    pub low: f64,
    pub high: f64,
}

impl Scenario {
    pub fn new(range: RangeConfig, low: f64, high: f64) -> Self {
        Self {
            range,
            low,
            high,
            track_width: None,
            drags: Vec::new(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let scenario: Self = toml::from_str(content)?;
        scenario.range.validate()?;
        scenario.range.validate_selection(scenario.low, scenario.high)?;
        Ok(scenario)
    }

    /// Replay every drag op.
    ///
    /// A held op (`release = false`) leaves the pointer down; a following op
    /// on the same handle continues that drag instead of starting a new one.
    pub fn run(&self) -> Result<ScenarioReport, RangeError> {
        let mut selector = RangeSelector::new(self.range, self.low, self.high)?;
        if let Some(width) = self.track_width {
            selector.measure(width);
        }

        let mut changes = Vec::new();
        let mut steps = Vec::with_capacity(self.drags.len());
        for (index, op) in self.drags.iter().enumerate() {
            if !selector.is_dragging(op.handle) {
                selector.handle_event(GestureEvent::Start(op.handle), &mut changes);
            }
            let emitted = selector
                .handle_event(
                    GestureEvent::Move {
                        handle: op.handle,
                        dx: op.dx,
                    },
                    &mut changes,
                )
                .map(|change| change.value);
            if op.release {
                selector.handle_event(GestureEvent::Release(op.handle), &mut changes);
            }
            steps.push(StepReport {
                index,
                handle: op.handle,
                dx: op.dx,
                emitted,
                low: selector.low(),
                high: selector.high(),
            });
        }

        Ok(ScenarioReport {
            track_width: selector.geometry().track_width(),
            interactive: selector.is_interactive(),
            steps,
            changes,
            low: selector.low(),
            high: selector.high(),
        })
    }
}

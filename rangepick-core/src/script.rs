//! Scripted drag operations — `low:+270`, `high:-40`, `low:+30~`.
//!
//! A trailing `~` keeps the pointer pressed after the move, so the next
//! operation on the same handle continues the drag with a delta measured
//! from the original press.

use serde::{Deserialize, Serialize};
use std::num::ParseFloatError;
use std::str::FromStr;
use thiserror::Error;

use crate::selector::Handle;

#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("drag op '{0}' must look like <handle>:<dx>, e.g. low:+40")]
    MissingSeparator(String),

    #[error("{0}")]
    UnknownHandle(String),

    #[error("invalid delta in '{input}': {source}")]
    InvalidDelta {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("delta in '{0}' is not finite")]
    NonFiniteDelta(String),
}

fn default_release() -> bool {
    true
}

/// One scripted drag: press `handle`, move by `dx`, optionally release.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragOp {
    pub handle: Handle,
    pub dx: f64,
    #[serde(default = "default_release")]
    pub release: bool,
}

impl DragOp {
    pub fn new(handle: Handle, dx: f64) -> Self {
        Self {
            handle,
            dx,
            release: true,
        }
    }

    pub fn held(mut self) -> Self {
        self.release = false;
        self
    }
}

impl FromStr for DragOp {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let (handle, delta) = input
            .split_once(':')
            .ok_or_else(|| ScriptError::MissingSeparator(input.to_string()))?;
        let handle: Handle = handle.parse().map_err(ScriptError::UnknownHandle)?;

        let (delta, release) = match delta.trim().strip_suffix('~') {
            Some(rest) => (rest, false),
            None => (delta.trim(), true),
        };
        let dx: f64 = delta
            .trim_start_matches('+')
            .parse()
            .map_err(|source| ScriptError::InvalidDelta {
                input: input.to_string(),
                source,
            })?;
        if !dx.is_finite() {
            return Err(ScriptError::NonFiniteDelta(input.to_string()));
        }
        Ok(Self { handle, dx, release })
    }
}

use std::path::PathBuf;

use thiserror::Error;

/// Errors from constructing or validating a range selector.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    #[error("invalid domain [{min}, {max}]: bounds must be finite with min < max")]
    InvalidDomain { min: f64, max: f64 },

    #[error("invalid step {0}: must be finite and positive")]
    InvalidStep(f64),

    #[error(
        "invalid geometry: handle diameter {handle_diameter} must be finite and non-negative, \
         fallback track width {fallback_track_width} must be finite and positive"
    )]
    InvalidGeometry {
        handle_diameter: f64,
        fallback_track_width: f64,
    },

    #[error("selection [{low}, {high}] is not ordered inside [{min}, {max}]")]
    InvalidSelection {
        low: f64,
        high: f64,
        min: f64,
        max: f64,
    },
}

/// Errors from loading a TOML config or scenario file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] RangeError),
}

impl ConfigError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

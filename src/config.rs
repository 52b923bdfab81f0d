//! Agent configuration.
//!
//! The only configurable surface is the grid: `bounds.min` and `bounds.max`,
//! both inclusive. Every field is optional in the JSON form and falls back
//! to the default 5x5 grid.
//!
//! ```json
//! { "bounds": { "min": { "x": 0, "y": 0 }, "max": { "x": 4, "y": 4 } } }
//! ```

use crate::core::{Bounds, BoundsViolation};
use serde::{Deserialize, Serialize};
use std::path::Path;
use stillwater::validation::Validation;
use thiserror::Error;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid bounds: {}", join(.0))]
    InvalidBounds(Vec<BoundsViolation>),
}

fn join(violations: &[BoundsViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Agent configuration.
///
/// # Example
///
/// ```rust
/// use gridwalk::config::Config;
/// use gridwalk::core::Position;
///
/// let config = Config::from_json_str(r#"{"bounds":{"max":{"x":9,"y":9}}}"#).unwrap();
/// assert_eq!(config.bounds.min, Position::new(0, 0));
/// assert_eq!(config.bounds.max, Position::new(9, 9));
///
/// assert!(Config::from_json_str(r#"{"bounds":{"min":{"x":5,"y":0},"max":{"x":4,"y":4}}}"#).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bounds: Bounds,
}

impl Config {
    /// Parse and validate configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check the bounds describe a non-empty grid, reporting every
    /// violation at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.bounds.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(ConfigError::InvalidBounds(
                errors.iter().cloned().collect(),
            )),
        }
    }
}

//! Checkpoint error types.

use crate::core::{BoundsViolation, Position};
use thiserror::Error;

/// A way a checkpoint's contents contradict the agent invariants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckpointViolation {
    /// The stored grid has min > max on some axis
    #[error(transparent)]
    InvalidBounds(#[from] BoundsViolation),

    /// State is `Placed` but no pose was ever recorded
    #[error("placed agent has an empty history")]
    EmptyHistory,

    /// A recorded pose lies off the stored grid
    #[error("record {index} at {position} is outside the grid")]
    RecordOutOfBounds { index: usize, position: Position },
}

/// Errors raised while saving or resuming an agent
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The agent could not be encoded as JSON or bincode
    #[error("Failed to encode checkpoint: {0}")]
    SerializationFailed(String),

    /// The input is not a checkpoint in the expected encoding
    #[error("Failed to decode checkpoint: {0}")]
    DeserializationFailed(String),

    /// Written by a newer or older checkpoint layout
    #[error("Checkpoint version {found} cannot be resumed (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Every violation found in the bounds and pose history
    #[error("Checkpoint rejected: {}", join(.0))]
    ValidationFailed(Vec<CheckpointViolation>),
}

fn join(violations: &[CheckpointViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

//! Checkpoint and resume for agents.
//!
//! A checkpoint captures the grid bounds and the full pose history, so an
//! agent can be persisted between runs and resumed exactly where it left
//! off. Checkpoints are validated on resume: a checkpoint whose history
//! leaves its own bounds is rejected rather than producing an agent in an
//! impossible state.

use crate::agent::Agent;
use crate::core::{AgentState, Bounds};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::{CheckpointError, CheckpointViolation};

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of an agent.
///
/// # Example
///
/// ```rust
/// use gridwalk::checkpoint::Checkpoint;
/// use gridwalk::Agent;
///
/// let mut agent = Agent::default();
/// agent.instruct("PLACE 1,2,EAST");
/// agent.instruct("MOVE");
///
/// let json = agent.checkpoint().to_json().unwrap();
/// let resumed = Agent::resume(Checkpoint::from_json(&json).unwrap()).unwrap();
/// assert_eq!(resumed.report(), agent.report());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub created_at: DateTime<Utc>,

    /// Grid the history was recorded on
    pub bounds: Bounds,

    /// Agent state, including the complete pose history
    pub state: AgentState,
}

impl Checkpoint {
    /// Snapshot `bounds` and `state` under a fresh id.
    pub fn new(bounds: Bounds, state: AgentState) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            bounds,
            state,
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Check the version and every agent invariant, reporting all
    /// violations at once.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let mut checks: Vec<Validation<(), NonEmptyVec<CheckpointViolation>>> = Vec::new();

        if let Validation::Failure(errors) = self.bounds.validate() {
            for error in errors.iter() {
                checks.push(Validation::fail(CheckpointViolation::from(error.clone())));
            }
        }

        if let Some(history) = self.state.history() {
            if history.is_empty() {
                checks.push(Validation::fail(CheckpointViolation::EmptyHistory));
            }
            for (index, record) in history.records().iter().enumerate() {
                let position = record.pose.position;
                let check = if self.bounds.contains(position) {
                    Validation::success(())
                } else {
                    Validation::fail(CheckpointViolation::RecordOutOfBounds { index, position })
                };
                checks.push(check);
            }
        }

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(CheckpointError::ValidationFailed(
                errors.iter().cloned().collect(),
            )),
        }
    }
}

impl Agent {
    /// Capture the agent's bounds and full history.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(*self.bounds(), self.state().clone())
    }

    /// Rebuild an agent from a validated checkpoint.
    pub fn resume(checkpoint: Checkpoint) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        debug!(
            id = %checkpoint.id,
            state = checkpoint.state.name(),
            "Resuming from checkpoint"
        );
        Ok(Self::from_parts(checkpoint.bounds, checkpoint.state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cause, Heading, Pose, PoseHistory, PoseRecord, Position};

    fn walked_agent() -> Agent {
        let mut agent = Agent::default();
        for line in ["PLACE 1,2,EAST", "MOVE", "MOVE", "LEFT", "MOVE"] {
            agent.instruct(line);
        }
        agent
    }

    #[test]
    fn new_checkpoint_has_current_version_and_unique_id() {
        let first = Checkpoint::new(Bounds::default(), AgentState::Unplaced);
        let second = Checkpoint::new(Bounds::default(), AgentState::Unplaced);

        assert_eq!(first.version, CHECKPOINT_VERSION);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn id_survives_both_formats() {
        let checkpoint = walked_agent().checkpoint();

        let from_json = Checkpoint::from_json(&checkpoint.to_json().unwrap()).unwrap();
        let from_binary = Checkpoint::from_binary(&checkpoint.to_binary().unwrap()).unwrap();

        assert_eq!(from_json.id, checkpoint.id);
        assert_eq!(from_binary.id, checkpoint.id);
        assert!(checkpoint.to_json().unwrap().contains(&checkpoint.id.to_string()));
    }

    #[test]
    fn json_checkpoint_resumes_identical_agent() {
        let agent = walked_agent();

        let json = agent.checkpoint().to_json().unwrap();
        let resumed = Agent::resume(Checkpoint::from_json(&json).unwrap()).unwrap();

        assert_eq!(resumed, agent);
        assert_eq!(
            resumed.report().map(|p| p.to_string()).as_deref(),
            Some("3,3,NORTH")
        );
    }

    #[test]
    fn binary_checkpoint_resumes_identical_agent() {
        let agent = walked_agent();

        let bytes = agent.checkpoint().to_binary().unwrap();
        let resumed = Agent::resume(Checkpoint::from_binary(&bytes).unwrap()).unwrap();

        assert_eq!(resumed, agent);
    }

    #[test]
    fn unplaced_agent_round_trips() {
        let agent = Agent::default();
        let resumed = Agent::resume(agent.checkpoint()).unwrap();
        assert!(!resumed.is_placed());
    }

    #[test]
    fn resumed_agent_keeps_extending_history() {
        let mut resumed = Agent::resume(walked_agent().checkpoint()).unwrap();
        let before = resumed.history().map(PoseHistory::len);

        resumed.instruct("RIGHT");

        assert_eq!(
            resumed.history().map(PoseHistory::len),
            before.map(|n| n + 1)
        );
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut checkpoint = walked_agent().checkpoint();
        checkpoint.version = 99;

        assert!(matches!(
            Agent::resume(checkpoint),
            Err(CheckpointError::UnsupportedVersion {
                found: 99,
                supported: CHECKPOINT_VERSION
            })
        ));
    }

    #[test]
    fn out_of_bounds_history_is_rejected() {
        let history = PoseHistory::new()
            .record(PoseRecord::now(
                Pose::new(Position::new(0, 0), Heading::North),
                Cause::Place,
            ))
            .record(PoseRecord::now(
                Pose::new(Position::new(0, 9), Heading::North),
                Cause::Move,
            ))
            .record(PoseRecord::now(
                Pose::new(Position::new(-3, 9), Heading::West),
                Cause::Move,
            ));
        let checkpoint = Checkpoint::new(Bounds::default(), AgentState::Placed(history));

        match Agent::resume(checkpoint) {
            Err(CheckpointError::ValidationFailed(violations)) => {
                assert_eq!(
                    violations,
                    vec![
                        CheckpointViolation::RecordOutOfBounds {
                            index: 1,
                            position: Position::new(0, 9),
                        },
                        CheckpointViolation::RecordOutOfBounds {
                            index: 2,
                            position: Position::new(-3, 9),
                        },
                    ]
                );
            }
            other => panic!("Expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn empty_placed_history_is_rejected() {
        let checkpoint = Checkpoint::new(Bounds::default(), AgentState::Placed(PoseHistory::new()));
        match checkpoint.validate() {
            Err(CheckpointError::ValidationFailed(violations)) => {
                assert_eq!(violations, vec![CheckpointViolation::EmptyHistory]);
            }
            other => panic!("Expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn inverted_bounds_and_stray_records_are_reported_together() {
        let bounds = Bounds::new(Position::new(3, 0), Position::new(1, 4));
        let history = PoseHistory::new().record(PoseRecord::now(
            Pose::new(Position::new(2, 2), Heading::East),
            Cause::Place,
        ));
        let checkpoint = Checkpoint::new(bounds, AgentState::Placed(history));

        let err = Agent::resume(checkpoint).unwrap_err();

        match &err {
            CheckpointError::ValidationFailed(violations) => {
                assert_eq!(violations.len(), 2);
                assert!(matches!(
                    violations[0],
                    CheckpointViolation::InvalidBounds(_)
                ));
                assert!(matches!(
                    violations[1],
                    CheckpointViolation::RecordOutOfBounds { index: 0, .. }
                ));
            }
            other => panic!("Expected ValidationFailed, got {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "Checkpoint rejected: bounds.min.x (3) is greater than bounds.max.x (1); \
             record 0 at 2,2 is outside the grid"
        );
    }

    #[test]
    fn garbage_input_fails_to_deserialize() {
        assert!(matches!(
            Checkpoint::from_json("not json"),
            Err(CheckpointError::DeserializationFailed(_))
        ));
        assert!(matches!(
            Checkpoint::from_binary(&[0xff, 0x01]),
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }
}

//! Pose history tracking.
//!
//! Every successful transition appends one [`PoseRecord`]. Records are never
//! removed or rewritten; the last record is the agent's current pose.

use super::pose::Pose;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The operation that produced a history record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cause {
    Place,
    Rotate,
    Move,
}

/// Record of a single successful transition.
///
/// # Example
///
/// ```rust
/// use gridwalk::core::{Cause, Heading, Pose, PoseRecord, Position};
///
/// let record = PoseRecord::now(Pose::new(Position::new(0, 0), Heading::North), Cause::Place);
/// assert_eq!(record.cause, Cause::Place);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoseRecord {
    /// Pose after the transition
    pub pose: Pose,
    /// Which operation produced it
    pub cause: Cause,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

impl PoseRecord {
    /// Record stamped with the current time.
    pub fn now(pose: Pose, cause: Cause) -> Self {
        Self {
            pose,
            cause,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered, append-only history of poses.
///
/// `record` consumes the history and returns the extended one, so a
/// history value is never mutated in place.
///
/// # Example
///
/// ```rust
/// use gridwalk::core::{Cause, Heading, Pose, PoseHistory, PoseRecord, Position};
///
/// let start = Pose::new(Position::new(0, 0), Heading::North);
/// let history = PoseHistory::new()
///     .record(PoseRecord::now(start, Cause::Place))
///     .record(PoseRecord::now(start.with_heading(Heading::East), Cause::Rotate));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.current().map(|p| p.heading), Some(Heading::East));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseHistory {
    records: Vec<PoseRecord>,
}

impl PoseHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning the extended history.
    pub fn record(mut self, record: PoseRecord) -> Self {
        self.records.push(record);
        self
    }

    /// The most recent pose, if any.
    pub fn current(&self) -> Option<Pose> {
        self.records.last().map(|r| r.pose)
    }

    /// Poses in the order they were recorded.
    pub fn path(&self) -> Vec<Pose> {
        self.records.iter().map(|r| r.pose).collect()
    }

    /// All records in order.
    pub fn records(&self) -> &[PoseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Elapsed time between the first and last record.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}

//! The agent's placement on the grid.

use super::heading::Heading;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position paired with a heading.
///
/// `Display` renders the canonical report line `X,Y,HEADING`.
///
/// # Example
///
/// ```rust
/// use gridwalk::core::{Heading, Pose, Position};
///
/// let pose = Pose::new(Position::new(0, 1), Heading::North);
/// assert_eq!(pose.to_string(), "0,1,NORTH");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
    pub position: Position,
    pub heading: Heading,
}

impl Pose {
    pub const fn new(position: Position, heading: Heading) -> Self {
        Self { position, heading }
    }

    /// Same position, new heading.
    pub fn with_heading(self, heading: Heading) -> Self {
        Self { heading, ..self }
    }

    /// Same heading, new position.
    pub fn with_position(self, position: Position) -> Self {
        Self { position, ..self }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.position, self.heading)
    }
}

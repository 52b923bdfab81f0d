//! Core agent types and logic.
//!
//! This module contains the pure functional core of the agent:
//! - Headings, positions, bounds and poses
//! - Append-only pose history
//! - The `AgentState` value and the transitions between states
//!
//! Nothing in this module performs I/O or logging.

mod heading;
mod history;
mod pose;
mod position;
mod state;
pub mod transition;

pub use heading::{Heading, HeadingParseError, Turn, COMPASS};
pub use history::{Cause, PoseHistory, PoseRecord};
pub use pose::Pose;
pub use position::{Axis, Bounds, BoundsViolation, Position};
pub use state::AgentState;
pub use transition::{Outcome, Rejection};

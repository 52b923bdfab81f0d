//! The agent state as an explicit tagged value.

use super::history::PoseHistory;
use super::pose::Pose;
use serde::{Deserialize, Serialize};

/// Agent state.
///
/// `Placed` always carries a non-empty history whose last record is the
/// current pose; `Unplaced` carries nothing. States are plain values:
/// transitions consume one and produce the next.
///
/// # Example
///
/// ```rust
/// use gridwalk::core::AgentState;
///
/// let state = AgentState::default();
/// assert_eq!(state.name(), "Unplaced");
/// assert!(state.pose().is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum AgentState {
    #[default]
    Unplaced,
    Placed(PoseHistory),
}

impl AgentState {
    /// State name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unplaced => "Unplaced",
            Self::Placed(_) => "Placed",
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed(_))
    }

    /// Current pose, or `None` while unplaced.
    pub fn pose(&self) -> Option<Pose> {
        match self {
            Self::Unplaced => None,
            Self::Placed(history) => history.current(),
        }
    }

    /// History of successful transitions, or `None` while unplaced.
    pub fn history(&self) -> Option<&PoseHistory> {
        match self {
            Self::Unplaced => None,
            Self::Placed(history) => Some(history),
        }
    }
}

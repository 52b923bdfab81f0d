//! Pure transition functions.
//!
//! Each function consumes the current [`AgentState`] and returns an
//! [`Outcome`]: either the next state, or the unchanged state together with
//! the reason the transition was refused. Nothing here logs or panics.

use super::heading::Turn;
use super::history::{Cause, PoseHistory, PoseRecord};
use super::pose::Pose;
use super::position::{Bounds, Position};
use super::state::AgentState;
use thiserror::Error;

/// Why a transition left the state unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("Agent is not placed")]
    NotPlaced,

    #[error("Position {position} is outside the grid")]
    OutOfBounds { position: Position },

    #[error("Step from {from} cannot be represented")]
    Unrepresentable { from: Position },
}

/// Result of applying a transition.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Transition succeeded; this is the next state
    Applied(AgentState),

    /// Transition refused; `state` is the input, untouched
    Ignored { state: AgentState, reason: Rejection },
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// The state to continue from, whichever way the transition went.
    pub fn into_state(self) -> AgentState {
        match self {
            Self::Applied(state) | Self::Ignored { state, .. } => state,
        }
    }
}

/// Place the agent at `pose`.
///
/// Allowed from either state; a valid re-placement extends the existing
/// history.
///
/// # Example
///
/// ```rust
/// use gridwalk::core::{transition, AgentState, Bounds, Heading, Pose, Position};
///
/// let pose = Pose::new(Position::new(1, 2), Heading::East);
/// let next = transition::place(AgentState::Unplaced, &Bounds::default(), pose).into_state();
/// assert_eq!(next.pose(), Some(pose));
///
/// let off_grid = Pose::new(Position::new(7, 0), Heading::East);
/// let outcome = transition::place(AgentState::Unplaced, &Bounds::default(), off_grid);
/// assert!(!outcome.is_applied());
/// ```
pub fn place(state: AgentState, bounds: &Bounds, pose: Pose) -> Outcome {
    if !bounds.contains(pose.position) {
        return Outcome::Ignored {
            state,
            reason: Rejection::OutOfBounds {
                position: pose.position,
            },
        };
    }

    let history = match state {
        AgentState::Unplaced => PoseHistory::new(),
        AgentState::Placed(history) => history,
    };
    Outcome::Applied(AgentState::Placed(
        history.record(PoseRecord::now(pose, Cause::Place)),
    ))
}

/// Turn the agent a quarter turn in place.
pub fn rotate(state: AgentState, turn: Turn) -> Outcome {
    let (history, pose) = match current(state) {
        Ok(placed) => placed,
        Err(state) => {
            return Outcome::Ignored {
                state,
                reason: Rejection::NotPlaced,
            }
        }
    };

    let next = pose.with_heading(pose.heading.turn(turn));
    Outcome::Applied(AgentState::Placed(
        history.record(PoseRecord::now(next, Cause::Rotate)),
    ))
}

/// Move the agent one unit along its heading, unless that leaves `bounds`.
pub fn advance(state: AgentState, bounds: &Bounds) -> Outcome {
    let (history, pose) = match current(state) {
        Ok(placed) => placed,
        Err(state) => {
            return Outcome::Ignored {
                state,
                reason: Rejection::NotPlaced,
            }
        }
    };

    let reason = match pose.position.step(pose.heading) {
        Some(candidate) if bounds.contains(candidate) => {
            let next = pose.with_position(candidate);
            return Outcome::Applied(AgentState::Placed(
                history.record(PoseRecord::now(next, Cause::Move)),
            ));
        }
        Some(candidate) => Rejection::OutOfBounds {
            position: candidate,
        },
        None => Rejection::Unrepresentable {
            from: pose.position,
        },
    };

    Outcome::Ignored {
        state: AgentState::Placed(history),
        reason,
    }
}

/// Split a placed state into its history and current pose, handing the
/// state back if there is no pose to act on.
fn current(state: AgentState) -> Result<(PoseHistory, Pose), AgentState> {
    match state {
        AgentState::Placed(history) => match history.current() {
            Some(pose) => Ok((history, pose)),
            None => Err(AgentState::Placed(history)),
        },
        AgentState::Unplaced => Err(AgentState::Unplaced),
    }
}

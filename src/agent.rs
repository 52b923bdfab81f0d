//! The agent: owns the current state and bounds, and applies transitions.
//!
//! Rejected transitions and malformed instructions are logged at `debug`
//! level and otherwise ignored. Nothing here returns an error to the caller.

use crate::command::Instruction;
use crate::config::Config;
use crate::core::{
    transition, AgentState, Bounds, Heading, Outcome, Pose, PoseHistory, Position, Turn,
};
use tracing::{debug, trace};

/// A single agent on a bounded grid.
///
/// # Example
///
/// ```rust
/// use gridwalk::Agent;
///
/// let mut agent = Agent::default();
/// assert_eq!(agent.instruct("REPORT"), None);
///
/// agent.instruct("PLACE 0,0,NORTH");
/// agent.instruct("MOVE");
/// let report = agent.instruct("REPORT").map(|pose| pose.to_string());
/// assert_eq!(report.as_deref(), Some("0,1,NORTH"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Agent {
    bounds: Bounds,
    state: AgentState,
}

impl Agent {
    /// Create an unplaced agent on the given grid.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            state: AgentState::Unplaced,
        }
    }

    /// Create an unplaced agent from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.bounds)
    }

    pub(crate) fn from_parts(bounds: Bounds, state: AgentState) -> Self {
        Self { bounds, state }
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn state(&self) -> &AgentState {
        &self.state
    }

    pub fn is_placed(&self) -> bool {
        self.state.is_placed()
    }

    /// History of successful transitions, or `None` while unplaced.
    pub fn history(&self) -> Option<&PoseHistory> {
        self.state.history()
    }

    /// Place the agent. Returns whether the placement was applied.
    pub fn place(&mut self, position: Position, heading: Heading) -> bool {
        let bounds = self.bounds;
        self.commit("PLACE", |state| {
            transition::place(state, &bounds, Pose::new(position, heading))
        })
    }

    /// Turn a quarter turn. Returns whether the turn was applied.
    pub fn rotate(&mut self, turn: Turn) -> bool {
        let op = match turn {
            Turn::Left => "LEFT",
            Turn::Right => "RIGHT",
        };
        self.commit(op, |state| transition::rotate(state, turn))
    }

    /// Move one unit forward. Returns whether the move was applied.
    pub fn advance(&mut self) -> bool {
        let bounds = self.bounds;
        self.commit("MOVE", |state| transition::advance(state, &bounds))
    }

    /// Current pose, or `None` while unplaced.
    pub fn report(&self) -> Option<Pose> {
        self.state.pose()
    }

    /// Route a command name and its split arguments.
    ///
    /// Unknown commands and malformed arguments are ignored. Returns the
    /// pose only for a `REPORT` issued while placed.
    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> Option<Pose> {
        match Instruction::from_parts(command, args) {
            Ok(instruction) => self.apply(instruction),
            Err(error) => {
                debug!(command, %error, "Ignoring malformed instruction");
                None
            }
        }
    }

    /// Parse and apply one raw instruction line.
    pub fn instruct(&mut self, line: &str) -> Option<Pose> {
        match line.parse::<Instruction>() {
            Ok(instruction) => self.apply(instruction),
            Err(error) => {
                debug!(line, %error, "Ignoring malformed instruction");
                None
            }
        }
    }

    /// Apply a parsed instruction.
    pub fn apply(&mut self, instruction: Instruction) -> Option<Pose> {
        match instruction {
            Instruction::Place { position, heading } => {
                self.place(position, heading);
            }
            Instruction::Move => {
                self.advance();
            }
            Instruction::Left => {
                self.rotate(Turn::Left);
            }
            Instruction::Right => {
                self.rotate(Turn::Right);
            }
            Instruction::Report => {
                let pose = self.report();
                if pose.is_none() {
                    debug!("Ignoring REPORT: agent is not placed");
                }
                return pose;
            }
            Instruction::Invalid => {
                debug!("Ignoring invalid instruction");
            }
        }
        None
    }

    fn commit(&mut self, op: &'static str, step: impl FnOnce(AgentState) -> Outcome) -> bool {
        match step(std::mem::take(&mut self.state)) {
            Outcome::Applied(next) => {
                trace!(op, pose = ?next.pose(), "Transition applied");
                self.state = next;
                true
            }
            Outcome::Ignored { state, reason } => {
                debug!(op, %reason, "Transition ignored");
                self.state = state;
                false
            }
        }
    }
}

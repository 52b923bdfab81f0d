//! Gridwalk: a directional agent on a bounded grid
//!
//! Gridwalk follows a "pure core, imperative shell" layout. The agent's
//! state is an explicit value, and placement, rotation and movement are pure
//! functions from one state to the next. The [`Agent`] shell owns the
//! current state, applies transitions and logs the ones it refuses.
//!
//! # Core Concepts
//!
//! - **Pose**: a grid position plus a cardinal heading
//! - **State**: `Unplaced`, or `Placed` with an append-only pose history
//! - **Bounds**: the inclusive rectangle every recorded position lies in
//! - **Instructions**: `PLACE X,Y,F`, `MOVE`, `LEFT`, `RIGHT`, `REPORT`
//!
//! Invalid input never fails: out-of-bounds moves, malformed lines and
//! commands issued before the first `PLACE` are ignored, leaving the agent
//! exactly as it was.
//!
//! # Example
//!
//! ```rust
//! use gridwalk::Agent;
//!
//! let mut agent = Agent::default();
//! let reports: Vec<String> = ["PLACE 1,2,EAST", "MOVE", "MOVE", "LEFT", "MOVE", "REPORT"]
//!     .into_iter()
//!     .filter_map(|line| agent.instruct(line))
//!     .map(|pose| pose.to_string())
//!     .collect();
//!
//! assert_eq!(reports, vec!["3,3,NORTH"]);
//! ```

pub mod agent;
pub mod checkpoint;
pub mod command;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use agent::Agent;
pub use command::Instruction;
pub use config::Config;
pub use crate::core::{AgentState, Bounds, Heading, Pose, Position, Turn};

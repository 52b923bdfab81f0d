//! Grid positions and the rectangular bounds that constrain them.

use super::heading::Heading;
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Integer grid coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position one unit along `heading`.
    ///
    /// Returns `None` when the step is not representable as an `i32`
    /// coordinate.
    pub fn step(self, heading: Heading) -> Option<Self> {
        let (dx, dy) = heading.delta();
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Axis of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// A reason a [`Bounds`] value cannot describe a grid.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoundsViolation {
    #[error("bounds.min.{axis} ({min}) is greater than bounds.max.{axis} ({max})")]
    Inverted { axis: Axis, min: i32, max: i32 },
}

/// Inclusive rectangular region of valid positions.
///
/// Defaults to a 5x5 grid from `(0,0)` to `(4,4)`.
///
/// # Example
///
/// ```rust
/// use gridwalk::core::{Bounds, Position};
///
/// let bounds = Bounds::default();
/// assert!(bounds.contains(Position::new(0, 0)));
/// assert!(bounds.contains(Position::new(4, 4)));
/// assert!(!bounds.contains(Position::new(5, 0)));
/// assert!(!bounds.contains(Position::new(0, -1)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub min: Position,
    pub max: Position,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: Position::new(0, 0),
            max: Position::new(4, 4),
        }
    }
}

impl Bounds {
    pub const fn new(min: Position, max: Position) -> Self {
        Self { min, max }
    }

    /// Check whether `position` lies inside the bounds on both axes (pure).
    pub fn contains(&self, position: Position) -> bool {
        (self.min.x..=self.max.x).contains(&position.x)
            && (self.min.y..=self.max.y).contains(&position.y)
    }

    /// Validate the bounds, accumulating every violation rather than
    /// stopping at the first one.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<BoundsViolation>> {
        let checks = vec![
            check_axis(Axis::X, self.min.x, self.max.x),
            check_axis(Axis::Y, self.min.y, self.max.y),
        ];
        Validation::all_vec(checks).map(|_| ())
    }
}

fn check_axis(axis: Axis, min: i32, max: i32) -> Validation<(), NonEmptyVec<BoundsViolation>> {
    if min > max {
        Validation::fail(BoundsViolation::Inverted { axis, min, max })
    } else {
        Validation::success(())
    }
}

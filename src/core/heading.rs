//! Cardinal headings and rotation arithmetic.
//!
//! Headings live on a fixed four-element cycle. Rotation is plain modulo
//! arithmetic over the cycle index, so turning can never leave the cycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The four headings in rotational (clockwise) order.
pub const COMPASS: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

/// A cardinal heading.
///
/// # Example
///
/// ```rust
/// use gridwalk::core::{Heading, Turn};
///
/// assert_eq!(Heading::North.turn(Turn::Right), Heading::East);
/// assert_eq!(Heading::North.turn(Turn::Left), Heading::West);
/// assert_eq!("SOUTH".parse::<Heading>().unwrap(), Heading::South);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Heading {
    North,
    East,
    South,
    West,
}

/// Direction of a quarter turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    Left,
    Right,
}

impl Turn {
    /// Signed step along the compass cycle.
    fn step(self) -> isize {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

/// Error returned when a token does not name a heading.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown heading '{0}', expected one of NORTH, EAST, SOUTH, WEST")]
pub struct HeadingParseError(pub String);

impl Heading {
    /// Position of this heading in [`COMPASS`].
    pub fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Heading at `index`, wrapping around the cycle.
    pub fn from_index(index: usize) -> Self {
        COMPASS[index % COMPASS.len()]
    }

    /// Heading after a quarter turn (pure).
    pub fn turn(self, turn: Turn) -> Self {
        let len = COMPASS.len() as isize;
        let next = (self.index() as isize + turn.step()).rem_euclid(len);
        Self::from_index(next as usize)
    }

    /// Unit offset `(dx, dy)` for one step along this heading.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }

    /// Canonical uppercase token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Heading {
    type Err = HeadingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        COMPASS
            .iter()
            .copied()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| HeadingParseError(s.to_string()))
    }
}

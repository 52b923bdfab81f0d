//! Instruction parsing.
//!
//! Turns raw text lines into [`Instruction`] records. The grammar is one
//! instruction per line: `PLACE X,Y,F` or one of the bare keywords `MOVE`,
//! `LEFT`, `RIGHT`, `REPORT`. Keywords and headings are case-sensitive.

use crate::core::{Axis, Heading, HeadingParseError, Position};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A parsed instruction.
///
/// # Example
///
/// ```rust
/// use gridwalk::command::Instruction;
/// use gridwalk::core::{Heading, Position};
///
/// assert_eq!(
///     Instruction::parse("PLACE 1,2,EAST"),
///     Instruction::Place { position: Position::new(1, 2), heading: Heading::East }
/// );
/// assert_eq!(Instruction::parse("MOVE"), Instruction::Move);
/// assert_eq!(Instruction::parse("JUMP"), Instruction::Invalid);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    Place { position: Position, heading: Heading },
    Move,
    Left,
    Right,
    Report,
    /// Anything the parser could not make sense of
    Invalid,
}

/// Why a line did not parse.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty instruction")]
    Empty,

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("{command} takes no arguments")]
    UnexpectedArguments { command: &'static str },

    #[error("PLACE expects 3 arguments X,Y,F, found {found}")]
    WrongArity { found: usize },

    #[error("Invalid {axis} coordinate '{token}'")]
    InvalidCoordinate { axis: Axis, token: String },

    #[error(transparent)]
    InvalidHeading(#[from] HeadingParseError),
}

impl Instruction {
    /// Parse a line, mapping every malformed input to [`Instruction::Invalid`].
    pub fn parse(line: &str) -> Self {
        line.parse().unwrap_or(Self::Invalid)
    }

    /// Build an instruction from a command name and its already-split
    /// arguments (`["X", "Y", "F"]` for PLACE, empty otherwise).
    pub fn from_parts(command: &str, args: &[&str]) -> Result<Self, ParseError> {
        match command {
            "PLACE" => place(args),
            "MOVE" => bare("MOVE", Self::Move, args),
            "LEFT" => bare("LEFT", Self::Left, args),
            "RIGHT" => bare("RIGHT", Self::Right, args),
            "REPORT" => bare("REPORT", Self::Report, args),
            "" => Err(ParseError::Empty),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }

    /// Command keyword, used in diagnostics.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Place { .. } => "PLACE",
            Self::Move => "MOVE",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Report => "REPORT",
            Self::Invalid => "INVALID",
        }
    }
}

impl FromStr for Instruction {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        match line.split_once(' ') {
            Some((command, rest)) => {
                let args: Vec<&str> = rest.split(',').collect();
                Self::from_parts(command, &args)
            }
            None => Self::from_parts(line, &[]),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Place { position, heading } => write!(f, "PLACE {position},{heading}"),
            other => f.write_str(other.keyword()),
        }
    }
}

fn bare(
    command: &'static str,
    instruction: Instruction,
    args: &[&str],
) -> Result<Instruction, ParseError> {
    if args.is_empty() {
        Ok(instruction)
    } else {
        Err(ParseError::UnexpectedArguments { command })
    }
}

fn place(args: &[&str]) -> Result<Instruction, ParseError> {
    let [x, y, heading] = args else {
        return Err(ParseError::WrongArity { found: args.len() });
    };

    Ok(Instruction::Place {
        position: Position::new(coordinate(Axis::X, x)?, coordinate(Axis::Y, y)?),
        heading: heading.trim().parse()?,
    })
}

fn coordinate(axis: Axis, token: &str) -> Result<i32, ParseError> {
    token
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidCoordinate {
            axis,
            token: token.to_string(),
        })
}

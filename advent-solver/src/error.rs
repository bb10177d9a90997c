//! Errors raised while registering, parsing and solving puzzles

use crate::registry::{BASE_YEAR, DAYS_PER_YEAR};
use thiserror::Error;

/// Puzzle input could not be turned into `SharedData`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A line or token breaks the puzzle's input grammar
    #[error("malformed input: {0}")]
    InvalidFormat(String),
    /// A section the puzzle needs is absent
    #[error("input is missing {0}")]
    MissingData(String),
    #[error("{0}")]
    Other(String),
}

/// A part could not produce an answer
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver declares the part but has no `PartSolver` for it
    #[error("part {0} has no solver")]
    PartNotImplemented(u8),
    /// Part number outside `1..=parts`
    #[error("part {part} is outside 1..={parts}")]
    PartOutOfRange { part: u8, parts: u8 },
    /// The computation itself failed; displays the underlying error as-is
    #[error("{0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap a puzzle-level error, keeping its message as this error's message.
    pub fn failed<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        SolveError::SolveFailed(error.into())
    }
}

/// Failure looking up, parsing or solving a registered puzzle
#[derive(Debug, Error)]
pub enum SolverError {
    /// Nothing registered under this `(year, day)`
    #[error("no solver registered for {year}/{day:02}")]
    NotFound { year: u16, day: u8 },
    #[error("could not parse input: {0}")]
    ParseError(#[from] ParseError),
    #[error("could not solve: {0}")]
    SolveError(#[from] SolveError),
}

/// Registry rejected a solver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("{year}/{day:02} is already registered")]
    DuplicateSolver { year: u16, day: u8 },
    /// Not a puzzle day: years start at [`BASE_YEAR`], days run 1 to [`DAYS_PER_YEAR`]
    #[error(
        "{year}/{day:02} is not a puzzle day (years from {}, days 1-{})",
        BASE_YEAR,
        DAYS_PER_YEAR
    )]
    InvalidYearDay { year: u16, day: u8 },
}

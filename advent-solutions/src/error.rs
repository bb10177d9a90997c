//! Errors raised by the puzzle computations

use advent_solver::{ParseError, SolveError};
use thiserror::Error;

/// Failure inside a puzzle parser or computation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// Token does not follow its grammar (e.g. a dial code without `R`/`L`)
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    /// Token or line could not be parsed into the expected values
    #[error("parse error: {0}")]
    Parse(String),
    /// Parameter outside its valid domain
    #[error("out of range: {0}")]
    Range(String),
    /// Grid is not a rectangular 2D array
    #[error("shape error: {0}")]
    Shape(String),
}

impl From<PuzzleError> for ParseError {
    fn from(e: PuzzleError) -> Self {
        ParseError::InvalidFormat(e.to_string())
    }
}

impl From<PuzzleError> for SolveError {
    fn from(e: PuzzleError) -> Self {
        SolveError::failed(e)
    }
}

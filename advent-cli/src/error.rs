//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] advent_solver::RegistrationError),

    /// Some requested parts did not produce an answer
    #[error("{failed} of {total} part(s) failed")]
    Failed { failed: usize, total: usize },
}

/// Input file errors
#[derive(Error, Debug)]
pub enum InputError {
    /// No input file at the expected location
    #[error("No input for {year}/{day:02}: {} does not exist", .path.display())]
    Missing { year: u16, day: u8, path: PathBuf },

    /// File exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a single part produced no answer
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Input could not be loaded
    #[error(transparent)]
    Input(#[from] InputError),

    /// Solver failed to parse or solve
    #[error("Solver error: {0}")]
    Solver(#[from] advent_solver::SolverError),
}

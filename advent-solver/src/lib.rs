//! Advent of Code solver library
//!
//! A small, type-safe framework that gives every puzzle the same shape:
//! parse the input once, then solve each part against the parsed data.
//!
//! # Overview
//!
//! - [`AocParser`] turns raw input into `SharedData`
//! - [`PartSolver<N>`] solves part `N`; `#[derive(AocSolver)]` dispatches to them
//! - [`SolverInstance`] / [`DynSolver`] erase the concrete solver type and record timing
//! - [`RegistryBuilder`] / [`SolverRegistry`] map `(year, day)` to solver factories
//! - `#[derive(AutoRegisterSolver)]` submits a [`SolverPlugin`] for automatic discovery
//!
//! # Quick Example
//!
//! ```
//! use advent_solver::{AocParser, ParseError, RegistryBuilder, SolveError, Solver};
//!
//! pub struct MyDay1;
//!
//! impl AocParser for MyDay1 {
//!     type SharedData = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
//!         input.lines()
//!             .map(|line| line.parse().map_err(|_|
//!                 ParseError::InvalidFormat("Expected integer".to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl Solver for MyDay1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(shared: &mut Self::SharedData, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(shared.iter().sum::<i32>().to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<MyDay1>(2025, 1, &[])
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2025, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, DAYS_PER_YEAR, FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory,
    SolverPlugin, SolverRegistry,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use advent_solver_macros::{AocSolver, AutoRegisterSolver};

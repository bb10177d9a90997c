//! Advent of Code 2025 puzzle solutions with automatic registration
//!
//! Each day lives in its own module under [`year_2025`] and derives
//! `AutoRegisterSolver`, so linking this crate is enough to make every day
//! available through `RegistryBuilder::register_all_plugins`.
//!
//! The building blocks of each puzzle (dial rotation, pattern checks, peak digit
//! extraction, grid neighbour sums, interval merging) are public so they can be
//! used and tested on their own.

pub mod error;
pub mod input;
pub mod year_2025;

pub use error::PuzzleError;

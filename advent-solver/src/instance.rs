//! A parsed puzzle, solvable part by part through a type-erased handle

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{TimeDelta, Utc};

/// Run `f` and measure it on the wall clock.
fn timed<T>(f: impl FnOnce() -> T) -> (T, TimeDelta) {
    let start = Utc::now();
    let out = f();
    (out, Utc::now() - start)
}

/// One part's answer and how long producing it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub part: u8,
    pub answer: String,
    pub elapsed: TimeDelta,
}

/// Puzzle input already parsed into `S::SharedData`.
///
/// Parts run against the same data, so a part may leave results behind for later parts.
pub struct SolverInstance<S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData,
    parse_elapsed: TimeDelta,
}

impl<S: Solver> SolverInstance<S> {
    pub fn new(year: u16, day: u8, input: &str) -> Result<Self, ParseError> {
        let (shared, parse_elapsed) = timed(|| S::parse(input));
        Ok(Self {
            year,
            day,
            shared: shared?,
            parse_elapsed,
        })
    }

    pub fn shared(&self) -> &S::SharedData {
        &self.shared
    }
}

/// What the registry hands out: any solver, already fed its input
///
/// ```no_run
/// use advent_solver::DynSolver;
///
/// fn report(solver: &mut dyn DynSolver) -> Result<(), advent_solver::SolveError> {
///     let (year, day) = solver.puzzle();
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("{year}/{day:02} part {part}: {} in {}", result.answer, result.elapsed);
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// `(year, day)` this input was parsed for
    fn puzzle(&self) -> (u16, u8);

    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta;

    /// Solve `part`, rejecting anything outside `1..=parts()`
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;
}

impl<S: SolverExt> DynSolver for SolverInstance<S> {
    fn puzzle(&self) -> (u16, u8) {
        (self.year, self.day)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn parse_duration(&self) -> TimeDelta {
        self.parse_elapsed
    }

    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, elapsed) = timed(|| S::solve_part_checked_range(&mut self.shared, part));
        Ok(SolveResult {
            part,
            answer: answer?,
            elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::AocParser;

    /// Doubles its numbers in place on every solve, then reports their sum.
    struct Doubler;

    impl AocParser for Doubler {
        type SharedData = Vec<u32>;

        fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
            input
                .split_whitespace()
                .map(|t| {
                    t.parse()
                        .map_err(|_| ParseError::InvalidFormat(format!("not a number: {t}")))
                })
                .collect()
        }
    }

    impl Solver for Doubler {
        const PARTS: u8 = 1;

        fn solve_part(shared: &mut Self::SharedData, _part: u8) -> Result<String, SolveError> {
            shared.iter_mut().for_each(|v| *v *= 2);
            Ok(shared.iter().sum::<u32>().to_string())
        }
    }

    #[test]
    fn test_parse_failure_surfaces() {
        let result = SolverInstance::<Doubler>::new(2025, 1, "1 two 3");
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_timed_returns_output() {
        let (value, elapsed) = timed(|| 6 * 7);
        assert_eq!(value, 42);
        assert!(elapsed >= TimeDelta::zero());
    }

    #[test]
    fn test_solve_reports_part_and_keeps_state() {
        let mut instance = SolverInstance::<Doubler>::new(2025, 1, "1 2 3").unwrap();
        assert!(instance.parse_duration() >= TimeDelta::zero());

        let first = instance.solve(1).unwrap();
        assert_eq!((first.part, first.answer.as_str()), (1, "12"));
        assert!(first.elapsed >= TimeDelta::zero());

        assert_eq!(instance.solve(1).unwrap().answer, "24");
        assert_eq!(instance.shared(), &vec![4, 8, 12]);
    }

    #[test]
    fn test_out_of_range_part() {
        let mut instance = SolverInstance::<Doubler>::new(2025, 3, "1").unwrap();
        assert!(matches!(
            instance.solve(2),
            Err(SolveError::PartOutOfRange { part: 2, parts: 1 })
        ));
        assert_eq!(instance.puzzle(), (2025, 3));
        assert_eq!(instance.parts(), 1);
        // a rejected part leaves the data untouched
        assert_eq!(instance.shared(), &vec![1]);
    }
}

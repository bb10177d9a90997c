//! Day 1: a 100-position dial turned by `R<n>` / `L<n>` codes.

use crate::error::PuzzleError;
use crate::input::parse_lines;
use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use tracing::{debug, trace};

/// Number of positions on the dial.
pub(crate) const DIAL_SIZE: i64 = 100;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 1, tags = ["dial", "parsing"])]
pub struct Solver;

/// Dial parameters for both parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialSettings {
    /// Position the dial points at before the first code.
    pub start: i64,
}

impl Default for DialSettings {
    fn default() -> Self {
        Self { start: 50 }
    }
}

#[derive(Debug)]
pub struct SharedData {
    codes: Vec<i64>,
    settings: DialSettings,
}

/// Parse `R<n>` as `+n` and `L<n>` as `-n`.
pub fn parse_code(token: &str) -> Result<i64, PuzzleError> {
    let token = token.trim();
    let mut chars = token.chars();
    let sign = match chars.next() {
        Some('R') => 1,
        Some('L') => -1,
        Some(other) => {
            return Err(PuzzleError::InvalidFormat(format!(
                "invalid prefix '{other}' in '{token}', expected 'R' or 'L'"
            )));
        }
        None => return Err(PuzzleError::InvalidFormat("empty code".into())),
    };

    let magnitude = chars.as_str();
    if magnitude.is_empty() || !magnitude.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PuzzleError::InvalidFormat(format!(
            "invalid numeric value in '{token}'"
        )));
    }
    magnitude
        .parse::<i64>()
        .map(|value| sign * value)
        .map_err(|e| PuzzleError::InvalidFormat(format!("'{token}': {e}")))
}

/// Turn the dial from `position` by `delta`; the result is always in `[0, DIAL_SIZE)`.
///
/// Both operands are reduced first, so any pair of `i64` values is accepted.
pub fn rotate(position: i64, delta: i64) -> i64 {
    (position.rem_euclid(DIAL_SIZE) + delta.rem_euclid(DIAL_SIZE)).rem_euclid(DIAL_SIZE)
}

/// Split a code into its sub-revolution remainder (same sign as `code`) and
/// the number of full revolutions it implies.
pub fn decompose(code: i64) -> (i64, u64) {
    (code % DIAL_SIZE, code.unsigned_abs() / DIAL_SIZE as u64)
}

/// Count codes after which the dial rests exactly on zero.
pub fn count_zero_landings(codes: &[i64], settings: DialSettings) -> u64 {
    let mut position = rotate(settings.start, 0);
    let mut landings = 0;
    for &code in codes {
        position = rotate(position, code);
        if position == 0 {
            landings += 1;
        }
    }
    landings
}

/// Count every time the dial points at zero, including while a code is turning it.
///
/// Each full revolution passes zero once. The remainder adds one more if it carries the
/// dial onto or across zero, unless the dial already started the code on zero (that visit
/// was counted by the previous code).
pub fn count_zero_passes(codes: &[i64], settings: DialSettings) -> Result<u64, PuzzleError> {
    let mut position = rotate(settings.start, 0);
    let mut passes = 0u64;
    for &code in codes {
        let (remainder, full_turns) = decompose(code);
        passes = passes
            .checked_add(full_turns)
            .ok_or_else(|| PuzzleError::Range(format!("zero passes overflow u64 at code {code}")))?;

        let unbounded = position + remainder;
        trace!(code, position, remainder, full_turns, unbounded, "turning dial");
        if position != 0 && (unbounded >= DIAL_SIZE || unbounded <= 0) {
            passes += 1;
        }
        position = rotate(position, remainder);
    }
    debug!(codes = codes.len(), passes, "counted zero passes");
    Ok(passes)
}

impl AocParser for Solver {
    type SharedData = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        let codes = parse_lines(input, parse_code)?;
        debug!(codes = codes.len(), "parsed dial codes");
        Ok(SharedData {
            codes,
            settings: DialSettings::default(),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut SharedData) -> Result<String, SolveError> {
        Ok(count_zero_landings(&shared.codes, shared.settings).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut SharedData) -> Result<String, SolveError> {
        Ok(count_zero_passes(&shared.codes, shared.settings)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EXAMPLE: &str = include_str!("../../../data/raw/2025/test_day_1.txt");

    #[test]
    fn test_parse_code() {
        assert_eq!(parse_code("L1"), Ok(-1));
        assert_eq!(parse_code("R9"), Ok(9));
        assert_eq!(parse_code(" L99 "), Ok(-99));
    }

    #[test]
    fn test_parse_code_rejects_malformed() {
        for token in ["", "X5", "R", "L-3", "R1a", "5"] {
            assert!(
                matches!(parse_code(token), Err(PuzzleError::InvalidFormat(_))),
                "{token:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_decompose() {
        assert_eq!(decompose(42), (42, 0));
        assert_eq!(decompose(-10), (-10, 0));
        assert_eq!(decompose(142), (42, 1));
        assert_eq!(decompose(-310), (-10, 3));
        assert_eq!(decompose(200), (0, 2));
    }

    #[test]
    fn test_rotate() {
        assert_eq!(rotate(2, 10), 12);
        assert_eq!(rotate(99, 2), 1);
        assert_eq!(rotate(10, -2), 8);
        assert_eq!(rotate(2, -4), 98);
    }

    #[test]
    fn test_rotate_extreme_values() {
        // i64::MAX = 92233720368547758_07
        assert_eq!(rotate(50, i64::MAX), 57);
        // i64::MIN = -92233720368547758_08, which is 92 mod 100
        assert_eq!(rotate(50, i64::MIN), 42);
        assert_eq!(rotate(i64::MAX, i64::MAX), 14);
        assert_eq!(rotate(i64::MIN, i64::MIN), 84);
    }

    #[test]
    fn test_largest_code_solves() {
        let mut shared = Solver::parse("R9223372036854775807\nL9223372036854775807\n").unwrap();
        assert_eq!(shared.codes, vec![i64::MAX, -i64::MAX]);
        // 50 -> 57 -> 50
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "0");
        // Each code makes 92233720368547758 full turns; the remainders never reach zero
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut shared).unwrap(),
            (2 * 92233720368547758u64).to_string()
        );
    }

    #[test]
    fn test_zero_pass_overflow_is_an_error() {
        let codes = vec![i64::MAX; 201];
        assert!(matches!(
            count_zero_passes(&codes, DialSettings::default()),
            Err(PuzzleError::Range(_))
        ));
    }

    #[test]
    fn test_zero_remainder_from_nonzero_position_does_not_count() {
        let settings = DialSettings { start: 30 };
        assert_eq!(count_zero_passes(&[100], settings), Ok(1));
        assert_eq!(count_zero_passes(&[-300], settings), Ok(3));
    }

    #[test]
    fn test_start_on_zero_suppresses_boundary() {
        let settings = DialSettings { start: 0 };
        assert_eq!(count_zero_passes(&[-5, 5], settings), Ok(1));
        assert_eq!(count_zero_landings(&[-5, 5], settings), 1);
    }

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "3");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "6");
    }

    #[test]
    fn test_parse_reports_line() {
        let err = Solver::parse("R1\nQ2\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }

    proptest! {
        #[test]
        fn prop_rotate_in_range(p in any::<i64>(), d in any::<i64>()) {
            let r = rotate(p, d);
            prop_assert!((0..DIAL_SIZE).contains(&r));
        }

        #[test]
        fn prop_decompose_recomposes(code in -10_000_000i64..10_000_000) {
            let (remainder, full_turns) = decompose(code);
            prop_assert!(remainder.abs() < DIAL_SIZE);
            prop_assert_eq!(remainder + code.signum() * DIAL_SIZE * full_turns as i64, code);
        }

        /// Stepping one click at a time and counting zeros gives the same answer.
        #[test]
        fn prop_passes_match_click_by_click(
            start in 0i64..100,
            codes in prop::collection::vec(-450i64..450, 0..20),
        ) {
            let mut position = start;
            let mut expected = 0u64;
            for &code in &codes {
                for _ in 0..code.abs() {
                    position = rotate(position, code.signum());
                    if position == 0 {
                        expected += 1;
                    }
                }
            }
            prop_assert_eq!(count_zero_passes(&codes, DialSettings { start }), Ok(expected));
        }
    }
}

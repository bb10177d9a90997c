//! Day 3: battery banks, picking the largest `k`-digit joltage from each bank.

use crate::error::PuzzleError;
use crate::input::parse_lines;
use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use tracing::debug;

/// Digits switched on per bank in part 1.
pub const PART_1_DIGITS: usize = 2;
/// Digits switched on per bank in part 2.
pub const PART_2_DIGITS: usize = 12;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 3, tags = ["greedy", "digits"])]
pub struct Solver;

/// One bank: its decimal digits in order, most significant first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Battery(Vec<u8>);

impl Battery {
    /// Digits of a single line; anything other than `0-9` is rejected.
    pub fn from_digits(line: &str) -> Result<Self, PuzzleError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(PuzzleError::Parse("empty battery line".into()));
        }
        line.bytes()
            .map(|b| match b {
                b'0'..=b'9' => Ok(b - b'0'),
                _ => Err(PuzzleError::Parse(format!(
                    "unexpected character '{}' in '{line}'",
                    b as char
                ))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Battery)
    }

    pub(crate) fn digits(&self) -> &[u8] {
        &self.0
    }
}

impl From<u64> for Battery {
    fn from(value: u64) -> Self {
        Battery(value.to_string().bytes().map(|b| b - b'0').collect())
    }
}

/// Largest number formed by `k` digits of `digits`, keeping their order.
///
/// Each pick takes the largest digit (first occurrence on ties) from the part of the
/// remaining window that still leaves enough digits behind it for the picks after.
pub fn extract_peak_digits(digits: &[u8], k: usize) -> Result<u64, PuzzleError> {
    let m = digits.len();
    if k < 1 || k > m {
        return Err(PuzzleError::Range(format!(
            "k must be between 1 and {m}, got {k}"
        )));
    }

    let mut start = 0;
    let mut value: u64 = 0;
    for remaining in (1..=k).rev() {
        let window = &digits[start..m - remaining + 1];
        let (offset, best) = window
            .iter()
            .copied()
            .enumerate()
            .fold((0, window[0]), |(best_idx, best), (idx, d)| {
                if d > best { (idx, d) } else { (best_idx, best) }
            });
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(best)))
            .ok_or_else(|| PuzzleError::Range(format!("{k} digits overflow u64")))?;
        start += offset + 1;
    }
    Ok(value)
}

/// [`extract_peak_digits`] on the decimal digits of `n`.
pub fn extract_peak(n: u64, k: usize) -> Result<u64, PuzzleError> {
    extract_peak_digits(Battery::from(n).digits(), k)
}

/// Total joltage of a bank: the sum of every battery's `k`-digit peak.
pub fn bank_joltage(bank: &[Battery], k: usize) -> Result<u64, PuzzleError> {
    bank.iter().try_fold(0u64, |total, battery| {
        let peak = extract_peak_digits(battery.digits(), k)?;
        total
            .checked_add(peak)
            .ok_or_else(|| PuzzleError::Range(format!("bank joltage overflows u64 at {peak}")))
    })
}

impl AocParser for Solver {
    type SharedData = Vec<Battery>;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        let bank = parse_lines(input, Battery::from_digits)?;
        debug!(batteries = bank.len(), "parsed battery bank");
        Ok(bank)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Vec<Battery>) -> Result<String, SolveError> {
        Ok(bank_joltage(shared, PART_1_DIGITS)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Vec<Battery>) -> Result<String, SolveError> {
        Ok(bank_joltage(shared, PART_2_DIGITS)?.to_string())
    }
}

//! Day 2: product IDs made of a repeated digit pattern.

use crate::error::PuzzleError;
use crate::input::into_parse_error;
use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use anyhow::Context;
use std::ops::RangeInclusive;
use std::str::FromStr;
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 2, tags = ["strings", "ranges"])]
pub struct Solver;

/// Inclusive range of candidate IDs, written `start-end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    pub start: u64,
    pub end: u64,
}

impl IdRange {
    pub(crate) fn ids(&self) -> RangeInclusive<u64> {
        self.start..=self.end
    }
}

impl FromStr for IdRange {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| PuzzleError::Parse(format!("'{s}' is missing '-'")))?;
        let bound = |text: &str| {
            text.parse::<u64>()
                .map_err(|e| PuzzleError::Parse(format!("bad bound '{text}' in '{s}': {e}")))
        };
        let (start, end) = (bound(start)?, bound(end)?);
        if start > end {
            return Err(PuzzleError::Parse(format!("'{s}' starts after it ends")));
        }
        Ok(Self { start, end })
    }
}

/// Which repetitions make an ID invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternRule {
    /// Some pattern written exactly twice (`6464`).
    Twice,
    /// Some pattern written two or more times (`646464`).
    AtLeastTwice,
}

/// Is `digits` a repetition of a shorter pattern under `rule`?
pub fn is_invalid_id(digits: &str, rule: PatternRule) -> bool {
    let len = digits.len();
    match rule {
        PatternRule::Twice => {
            len % 2 == 0 && {
                let (first, second) = digits.split_at(len / 2);
                first == second
            }
        }
        // A string built from a repeated block reappears inside its own doubling
        // once the first and last characters are dropped.
        PatternRule::AtLeastTwice => {
            len >= 2 && {
                let doubled = digits.repeat(2);
                doubled[1..2 * len - 1].contains(digits)
            }
        }
    }
}

/// Every ID covered by `ranges`, in input order.
pub fn expand(ranges: &[IdRange]) -> impl Iterator<Item = u64> + '_ {
    ranges.iter().flat_map(IdRange::ids)
}

/// The invalid IDs among `ids`, in order.
pub fn invalid_ids(ids: impl IntoIterator<Item = u64>, rule: PatternRule) -> Vec<u64> {
    ids.into_iter()
        .filter(|id| is_invalid_id(&id.to_string(), rule))
        .collect()
}

/// Sum of the invalid IDs in `ranges`, or `None` when there are none.
pub fn invalid_id_total(ranges: &[IdRange], rule: PatternRule) -> Result<Option<u64>, PuzzleError> {
    expand(ranges)
        .filter(|id| is_invalid_id(&id.to_string(), rule))
        .try_fold(None, |total: Option<u64>, id| {
            total
                .unwrap_or(0)
                .checked_add(id)
                .map(Some)
                .ok_or_else(|| PuzzleError::Range(format!("invalid id sum overflows u64 at {id}")))
        })
}

impl AocParser for Solver {
    type SharedData = Vec<IdRange>;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        let ranges = input
            .trim()
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .enumerate()
            .map(|(idx, token)| {
                token
                    .parse::<IdRange>()
                    .with_context(|| format!("range {}", idx + 1))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(into_parse_error)?;
        debug!(ranges = ranges.len(), "parsed id ranges");
        Ok(ranges)
    }
}

fn solve_with(ranges: &[IdRange], rule: PatternRule) -> Result<String, PuzzleError> {
    let total = invalid_id_total(ranges, rule)?;
    if total.is_none() {
        debug!(?rule, "no invalid ids found");
    }
    Ok(total.unwrap_or(0).to_string())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Vec<IdRange>) -> Result<String, SolveError> {
        Ok(solve_with(shared, PatternRule::Twice)?)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Vec<IdRange>) -> Result<String, SolveError> {
        Ok(solve_with(shared, PatternRule::AtLeastTwice)?)
    }
}

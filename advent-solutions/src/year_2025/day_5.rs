//! Day 5: fresh ingredient ID ranges, then a list of ingredient IDs to check.

use crate::error::PuzzleError;
use crate::input::{into_parse_error, split_sections};
use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use anyhow::Context;
use itertools::Itertools;
use std::str::FromStr;
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 5, tags = ["intervals", "sections"])]
pub struct Solver;

/// Closed interval `[start, end]`, always with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: u64,
    pub end: u64,
}

impl Interval {
    pub fn new(start: u64, end: u64) -> Result<Self, PuzzleError> {
        if start > end {
            return Err(PuzzleError::Parse(format!(
                "interval {start}-{end} starts after it ends"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, value: u64) -> bool {
        (self.start..=self.end).contains(&value)
    }

    /// Number of integers covered. `None` only for `0..=u64::MAX`.
    pub fn size(&self) -> Option<u64> {
        (self.end - self.start).checked_add(1)
    }
}

impl FromStr for Interval {
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
        Interval::new(bound(start)?, bound(end)?)
    }
}

/// Sort by start and fold overlapping or touching intervals together.
pub fn merge_intervals(intervals: &[Interval]) -> Vec<Interval> {
    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for next in intervals.iter().sorted_by_key(|i| i.start) {
        match merged.last_mut() {
            Some(current) if next.start <= current.end => {
                current.end = current.end.max(next.end);
            }
            _ => merged.push(*next),
        }
    }
    merged
}

/// Whether any interval contains `value`. The list does not need to be merged.
pub fn is_member(value: u64, intervals: &[Interval]) -> bool {
    intervals.iter().any(|i| i.contains(value))
}

/// Distinct integers covered by `intervals`, overlaps counted once.
pub fn total_covered(intervals: &[Interval]) -> Result<u64, PuzzleError> {
    let merged = merge_intervals(intervals);
    debug!(before = intervals.len(), after = merged.len(), "merged intervals");
    merged.iter().try_fold(0u64, |total, interval| {
        interval
            .size()
            .and_then(|size| total.checked_add(size))
            .ok_or_else(|| {
                PuzzleError::Range(format!(
                    "covered count passes u64::MAX at {}-{}",
                    interval.start, interval.end
                ))
            })
    })
}

/// How many of `values` fall inside some interval.
pub fn count_members(values: &[u64], intervals: &[Interval]) -> usize {
    values.iter().filter(|&&v| is_member(v, intervals)).count()
}

#[derive(Debug)]
pub struct SharedData {
    fresh: Vec<Interval>,
    available: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        let (ranges, ids) = split_sections(input);

        let fresh = ranges
            .iter()
            .enumerate()
            .map(|(idx, line)| {
                line.parse::<Interval>()
                    .with_context(|| format!("range line {}", idx + 1))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(into_parse_error)?;

        let available = ids
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(idx, line)| {
                line.parse::<u64>()
                    .with_context(|| format!("id {} ('{line}')", idx + 1))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(into_parse_error)?;

        debug!(
            ranges = fresh.len(),
            ids = available.len(),
            "parsed ingredient database"
        );
        Ok(SharedData { fresh, available })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut SharedData) -> Result<String, SolveError> {
        Ok(count_members(&shared.available, &shared.fresh).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut SharedData) -> Result<String, SolveError> {
        Ok(total_covered(&shared.fresh)?.to_string())
    }
}

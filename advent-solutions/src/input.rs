//! Line and section helpers shared by the puzzle parsers

use crate::error::PuzzleError;
use advent_solver::ParseError;
use anyhow::Context;

/// Parse every line with `parse`, tagging failures with their 1-based line number.
///
/// Trailing newlines are ignored; a blank line in the middle of the input is handed
/// to `parse` like any other.
pub fn parse_lines<T, F>(input: &str, mut parse: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&str) -> Result<T, PuzzleError>,
{
    input
        .trim_end()
        .lines()
        .enumerate()
        .map(|(idx, line)| parse(line.trim()).with_context(|| format!("line {}", idx + 1)))
        .collect::<anyhow::Result<Vec<T>>>()
        .map_err(into_parse_error)
}

/// Split input at its first blank line.
///
/// Lines before the blank line form the first section, everything after it the
/// second. Without a blank line the second section is empty.
pub fn split_sections(input: &str) -> (Vec<&str>, Vec<&str>) {
    let mut lines = input.lines();
    let first = lines.by_ref().take_while(|line| !line.trim().is_empty()).collect();
    let second = lines.collect();
    (first, second)
}

/// Flatten an `anyhow` chain ("line 3: invalid format: ...") into a [`ParseError`].
pub fn into_parse_error(e: anyhow::Error) -> ParseError {
    ParseError::InvalidFormat(format!("{e:#}"))
}

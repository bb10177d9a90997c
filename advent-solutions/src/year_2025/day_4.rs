//! Day 4: paper rolls on a grid; a roll is reachable when fewer than four of its
//! eight neighbours hold rolls.

use crate::error::PuzzleError;
use crate::input::into_parse_error;
use advent_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use anyhow::Context;
use itertools::iproduct;
use std::str::FromStr;
use tracing::{debug, trace};

/// Neighbour count at which a roll is stuck.
pub const DEFAULT_THRESHOLD: u32 = 4;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 4, tags = ["grid", "simulation"])]
pub struct Solver;

/// Rectangular row-major grid of cell values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl Grid {
    /// Grid of `rows x cols` cells given in row-major order.
    pub fn new(rows: usize, cols: usize, cells: Vec<u32>) -> Result<Self, PuzzleError> {
        if rows == 0 || cols == 0 {
            return Err(PuzzleError::Shape(format!("{rows}x{cols} grid has no cells")));
        }
        if cells.len() != rows * cols {
            return Err(PuzzleError::Shape(format!(
                "{} cells do not fill a {rows}x{cols} grid",
                cells.len()
            )));
        }
        Ok(Self { rows, cols, cells })
    }

    /// Grid from nested rows, which must all have the same length.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, PuzzleError> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(PuzzleError::Shape(format!(
                "row {} has {} cells, expected {cols}",
                idx + 1,
                row.len()
            )));
        }
        let height = rows.len();
        Self::new(height, cols, rows.into_iter().flatten().collect())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn get(&self, row: usize, col: usize) -> Option<u32> {
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    /// Sum of all cells; for a 0/1 grid, the number of marked cells.
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&c| u64::from(c)).sum()
    }

    /// Same-shape grid with `f` applied to every cell.
    fn map(&self, f: impl Fn(u32) -> u32) -> Grid {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(|&c| f(c)).collect(),
        }
    }

    /// Cell-by-cell product of two same-shape grids.
    fn mask(&self, other: &Grid) -> Grid {
        debug_assert_eq!((self.rows, self.cols), (other.rows, other.cols));
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().zip(&other.cells).map(|(a, b)| a * b).collect(),
        }
    }
}

impl FromStr for Grid {
    type Err = PuzzleError;

    /// `@` is a roll (1), `.` is empty floor (0); blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|ch| match ch {
                        '@' => Ok(1),
                        '.' => Ok(0),
                        other => Err(PuzzleError::Parse(format!(
                            "unexpected character '{other}' in grid"
                        ))),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::from_rows(rows)
    }
}

/// For each cell, the sum of its eight neighbours; cells beyond the edge count as 0.
pub fn neighbor_sums(grid: &Grid) -> Grid {
    // zero border, so every shifted view stays in bounds
    let (rows, cols) = (grid.rows, grid.cols);
    let width = cols + 2;
    let mut padded = vec![0u32; (rows + 2) * width];
    for (r, c) in iproduct!(0..rows, 0..cols) {
        padded[(r + 1) * width + c + 1] = grid.cells[r * cols + c];
    }

    let cells = iproduct!(0..rows, 0..cols)
        .map(|(r, c)| {
            iproduct!(0..3, 0..3)
                .filter(|&shift| shift != (1, 1))
                .map(|(dr, dc)| padded[(r + dr) * width + c + dc])
                .sum()
        })
        .collect();

    Grid { rows, cols, cells }
}

/// 1 where the sum is below `threshold`, else 0.
pub fn below_threshold(sums: &Grid, threshold: u32) -> Grid {
    sums.map(|s| u32::from(s < threshold))
}

/// 1 where the sum is at or above `threshold`, else 0.
pub fn at_or_above_threshold(sums: &Grid, threshold: u32) -> Grid {
    sums.map(|s| u32::from(s >= threshold))
}

/// Neighbour sums of `grid` split into its (free, stuck) masks.
pub fn threshold_masks(grid: &Grid, threshold: u32) -> (Grid, Grid) {
    let sums = neighbor_sums(grid);
    (
        below_threshold(&sums, threshold),
        at_or_above_threshold(&sums, threshold),
    )
}

/// One removal round: how much can be taken this round, and the grid left afterwards.
pub fn removal_round(grid: &Grid, threshold: u32) -> (u64, Grid) {
    let (free, stuck) = threshold_masks(grid, threshold);
    (grid.mask(&free).total(), grid.mask(&stuck))
}

/// Marked cells that can be removed straight away.
pub fn count_accessible(grid: &Grid, threshold: u32) -> u64 {
    removal_round(grid, threshold).0
}

/// Keep removing free cells round after round until nothing more comes loose.
///
/// The marked total never grows between rounds, so the loop ends.
pub fn total_removed(grid: &Grid, threshold: u32) -> u64 {
    let mut current = grid.clone();
    let mut removed = 0;
    let mut rounds = 0;
    loop {
        let (count, next) = removal_round(&current, threshold);
        if count == 0 {
            break;
        }
        rounds += 1;
        removed += count;
        trace!(round = rounds, count, removed, "removal round");
        current = next;
    }
    debug!(rounds, removed, "grid settled");
    removed
}

impl AocParser for Solver {
    type SharedData = Grid;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        let grid = input
            .parse::<Grid>()
            .context("paper roll grid")
            .map_err(into_parse_error)?;
        debug!(rows = grid.rows(), cols = grid.cols(), "parsed grid");
        Ok(grid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Grid) -> Result<String, SolveError> {
        Ok(count_accessible(shared, DEFAULT_THRESHOLD).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Grid) -> Result<String, SolveError> {
        Ok(total_removed(shared, DEFAULT_THRESHOLD).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EXAMPLE: &str = include_str!("../../../data/raw/2025/test_day_4.txt");

    fn grid(rows: &[&[u32]]) -> Grid {
        Grid::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_neighbor_sums() {
        let g = grid(&[&[1, 2], &[3, 4]]);
        assert_eq!(neighbor_sums(&g), grid(&[&[9, 8], &[7, 6]]));
    }

    #[test]
    fn test_neighbor_sums_interior() {
        let g = grid(&[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]]);
        let sums = neighbor_sums(&g);
        assert_eq!(sums.get(1, 1), Some(8));
        assert_eq!(sums.get(0, 0), Some(3));
        assert_eq!(sums.get(0, 1), Some(5));
        assert_eq!(sums.get(3, 0), None);
    }

    #[test]
    fn test_below_threshold() {
        let g = grid(&[&[1, 2], &[3, 4]]);
        assert_eq!(below_threshold(&g, 4), grid(&[&[1, 1], &[1, 0]]));
    }

    #[test]
    fn test_threshold_masks() {
        let g = grid(&[&[1, 2], &[3, 4]]);
        let (free, stuck) = threshold_masks(&g, 8);
        assert_eq!(free, grid(&[&[0, 0], &[1, 1]]));
        assert_eq!(stuck, grid(&[&[1, 1], &[0, 0]]));
    }

    #[test]
    fn test_shape_errors() {
        assert!(matches!(
            Grid::from_rows(vec![vec![1, 0], vec![1]]),
            Err(PuzzleError::Shape(_))
        ));
        assert!(matches!(Grid::new(2, 2, vec![1, 0, 1]), Err(PuzzleError::Shape(_))));
        assert!(matches!("\n\n".parse::<Grid>(), Err(PuzzleError::Shape(_))));
        assert!(matches!("@.\n@".parse::<Grid>(), Err(PuzzleError::Shape(_))));
    }

    #[test]
    fn test_parse_rejects_unknown_cell() {
        assert!(matches!("@.#".parse::<Grid>(), Err(PuzzleError::Parse(_))));
    }

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!((shared.rows(), shared.cols()), (10, 10));
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "13");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "43");
    }

    #[test]
    fn test_isolated_roll_removed_in_one_round() {
        let g: Grid = "...\n.@.\n...".parse().unwrap();
        assert_eq!(count_accessible(&g, DEFAULT_THRESHOLD), 1);
        assert_eq!(total_removed(&g, DEFAULT_THRESHOLD), 1);
    }

    fn binary_grid() -> impl Strategy<Value = Grid> {
        (1usize..8, 1usize..8).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(0u32..2, rows * cols)
                .prop_map(move |cells| Grid::new(rows, cols, cells).unwrap())
        })
    }

    proptest! {
        #[test]
        fn prop_removal_bounded_by_marked(g in binary_grid(), threshold in 0u32..9) {
            prop_assert!(total_removed(&g, threshold) <= g.total());
        }

        /// A round never marks a cell that was empty.
        #[test]
        fn prop_round_only_clears(g in binary_grid(), threshold in 0u32..9) {
            let (count, next) = removal_round(&g, threshold);
            prop_assert_eq!(next.total() + count, g.total());
            for (r, c) in iproduct!(0..g.rows(), 0..g.cols()) {
                prop_assert!(next.get(r, c) <= g.get(r, c));
            }
        }
    }
}

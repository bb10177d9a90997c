//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code 2025 solver runner
#[derive(Parser, Debug)]
#[command(name = "advent", about = "Run Advent of Code solvers on local inputs", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `<year>/day_<d>.txt` input files
    #[arg(long, default_value = "data/raw")]
    pub input_dir: PathBuf,

    /// Run on the worked example (`test_day_<d>.txt`) instead of the puzzle input
    #[arg(short, long)]
    pub example: bool,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Log filter directive, e.g. `debug` or `advent_solutions=trace`
    #[arg(long)]
    pub log_level: Option<String>,
}

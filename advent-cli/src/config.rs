//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use crate::inputs::InputVariant;
use advent_solver::BASE_YEAR;
use std::path::{Path, PathBuf};

/// Log filter used when neither `--log-level` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Resolved runtime configuration
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Root of the input tree
    pub input_dir: PathBuf,
    /// Puzzle or example inputs
    pub variant: InputVariant,
    /// Quiet mode
    pub quiet: bool,
    /// Tracing filter directive
    pub log_filter: String,
}

impl Config {
    /// Build config from CLI args and the environment
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        if let Some(year) = args.year
            && year < BASE_YEAR
        {
            return Err(CliError::Config(format!(
                "Year {year} is before the first Advent of Code ({BASE_YEAR})"
            )));
        }

        let input_dir = expand_tilde(&args.input_dir);
        if input_dir.exists() && !input_dir.is_dir() {
            return Err(CliError::Config(format!(
                "Input directory {} is not a directory",
                input_dir.display()
            )));
        }

        let variant = if args.example {
            InputVariant::Example
        } else {
            InputVariant::Puzzle
        };

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir,
            variant,
            quiet: args.quiet,
            log_filter: resolve_log_filter(args.log_level, std::env::var("RUST_LOG").ok()),
        })
    }
}

/// `--log-level` wins over `RUST_LOG`, which wins over [`DEFAULT_LOG_FILTER`]
fn resolve_log_filter(flag: Option<String>, env: Option<String>) -> String {
    flag.or(env)
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(home) = dirs::home_dir()
    {
        if path_str == "~" {
            return home;
        }
        if let Some(rest) = path_str.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

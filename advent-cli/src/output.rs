//! Printing answers as they stream in, then a run summary

use crate::executor::SolverResult;
use chrono::{DateTime, TimeDelta, Utc};

/// Totals over every reported part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Summary {
    solved: usize,
    failed: usize,
    parse: TimeDelta,
    solve: TimeDelta,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            solved: 0,
            failed: 0,
            parse: TimeDelta::zero(),
            solve: TimeDelta::zero(),
        }
    }
}

impl Summary {
    /// Solve time only counts parts that produced an answer.
    fn record(mut self, result: &SolverResult) -> Self {
        self.parse += result.parse_duration.unwrap_or_else(TimeDelta::zero);
        if result.answer.is_ok() {
            self.solved += 1;
            self.solve += result.solve_duration;
        } else {
            self.failed += 1;
        }
        self
    }

    fn lines(&self) -> [String; 4] {
        [
            "--- Summary ---".to_string(),
            format!("Parts: {} solved, {} failed", self.solved, self.failed),
            format!("Total parse time: {}", format_duration(self.parse)),
            format!("Total solve time: {}", format_duration(self.solve)),
        ]
    }
}

pub struct OutputFormatter {
    quiet: bool,
    started: DateTime<Utc>,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            started: Utc::now(),
        }
    }

    /// Answers go to stdout, failures to stderr
    pub fn print_result(&self, result: &SolverResult) {
        let line = self.format_result(result);
        match result.answer {
            Ok(_) => println!("{line}"),
            Err(_) => eprintln!("{line}"),
        }
    }

    pub fn format_result(&self, result: &SolverResult) -> String {
        let SolverResult {
            year, day, part, ..
        } = result;
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => answer.clone(),
            (Err(e), true) => format!("Error: {e}"),
            (Ok(answer), false) => {
                let timings: Vec<String> = result
                    .parse_duration
                    .map(|d| format!("parse: {}", format_duration(d)))
                    .into_iter()
                    .chain([format!("solve: {}", format_duration(result.solve_duration))])
                    .collect();
                format!("{year}/{day:02} Part {part}: {answer} ({})", timings.join(", "))
            }
            (Err(e), false) => format!("{year}/{day:02} Part {part}: Error - {e}"),
        }
    }

    /// Nothing is printed in quiet mode
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }
        println!();
        for line in summarize(results).lines() {
            println!("{line}");
        }
        println!(
            "Elapsed wall-clock time: {}",
            format_duration(Utc::now() - self.started)
        );
    }
}

fn summarize(results: &[SolverResult]) -> Summary {
    results.iter().fold(Summary::default(), Summary::record)
}

/// `µs` below a millisecond, then `ms`, then `s`, with two decimals above µs.
fn format_duration(d: TimeDelta) -> String {
    match d.num_microseconds() {
        None => "N/A".to_string(),
        Some(micros) if micros < 0 => format!("-{}", format_duration(-d)),
        Some(micros) if micros < 1_000 => format!("{micros}µs"),
        Some(micros) if micros < 1_000_000 => format!("{:.2}ms", micros as f64 / 1e3),
        Some(micros) => format!("{:.2}s", micros as f64 / 1e6),
    }
}

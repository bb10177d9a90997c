//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::ExecutorError;
use crate::inputs::InputStore;
use advent_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use std::sync::Arc;
use tracing::{debug, info_span};

/// Result from a single solver part
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, Arc<ExecutorError>>,
    /// Parse time, attached to the first part reported for a day only
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs every selected solver on its input, in `(year, day, part)` order
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputStore::new(config.input_dir.clone(), config.variant),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    pub fn inputs(&self) -> &InputStore {
        &self.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and the solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Run all work items, handing each result to `on_result` as soon as it is ready
    pub fn execute<F>(&self, mut on_result: F)
    where
        F: FnMut(SolverResult),
    {
        for work in self.collect_work_items() {
            self.run_work_item(&work, &mut on_result);
        }
    }

    fn run_work_item<F>(&self, work: &WorkItem, on_result: &mut F)
    where
        F: FnMut(SolverResult),
    {
        let (year, day) = (work.year, work.day);
        let _span = info_span!("solve", year, day).entered();

        let loaded = self
            .inputs
            .read(year, day)
            .map_err(ExecutorError::from)
            .and_then(|input| {
                debug!(bytes = input.len(), "loaded input");
                self.registry
                    .create_solver(year, day, &input)
                    .map_err(ExecutorError::from)
            });

        let mut solver = match loaded {
            Ok(solver) => solver,
            Err(e) => {
                // One failure, reported once per requested part
                let error = Arc::new(e);
                for part in work.parts.clone() {
                    on_result(make_error_result(year, day, part, &error));
                }
                return;
            }
        };

        let mut parse_duration = Some(solver.parse_duration());
        for part in work.parts.clone() {
            let mut result = solve_part(year, day, part, &mut *solver);
            result.parse_duration = parse_duration.take();
            on_result(result);
        }
    }
}

fn make_error_result(year: u16, day: u8, part: u8, error: &Arc<ExecutorError>) -> SolverResult {
    SolverResult {
        year,
        day,
        part,
        answer: Err(Arc::clone(error)),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

fn solve_part(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    match solver.solve(part) {
        Ok(solved) => {
            debug!(part, answer = %solved.answer, "solved");
            SolverResult {
                year,
                day,
                part,
                solve_duration: solved.elapsed,
                answer: Ok(solved.answer),
                parse_duration: None,
            }
        }
        Err(e) => SolverResult {
            year,
            day,
            part,
            answer: Err(Arc::new(ExecutorError::Solver(e.into()))),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;
    use crate::inputs::InputVariant;
    use advent_solver::{RegistryBuilder, SolverError};
    use proptest::prelude::*;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    // Link the solutions so their plugins are collected
    use advent_solutions as _;

    fn config(input_dir: &Path) -> Config {
        Config {
            year_filter: None,
            day_filter: None,
            part_filter: None,
            tags: Vec::new(),
            input_dir: input_dir.to_path_buf(),
            variant: InputVariant::Puzzle,
            quiet: true,
            log_filter: "off".to_string(),
        }
    }

    fn executor(config: &Config) -> Executor {
        let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();
        Executor::new(registry, config)
    }

    fn write_input(dir: &Path, day: u8, content: &str) -> PathBuf {
        let year_dir = dir.join("2025");
        fs::create_dir_all(&year_dir).unwrap();
        let path = year_dir.join(format!("day_{day}.txt"));
        fs::write(&path, content).unwrap();
        path
    }

    fn error(result: &SolverResult) -> Option<&ExecutorError> {
        result.answer.as_ref().err().map(|e| e.as_ref())
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let mut results = Vec::new();
        executor.execute(|r| results.push(r));
        results
    }

    #[test]
    fn test_collect_work_items_filters() {
        let temp = TempDir::new().unwrap();
        let mut cfg = config(temp.path());
        cfg.year_filter = Some(2025);
        cfg.day_filter = Some(3);
        cfg.part_filter = Some(2);

        let items = executor(&cfg).collect_work_items();
        assert_eq!(
            items,
            vec![WorkItem {
                year: 2025,
                day: 3,
                parts: 2..=2
            }]
        );

        cfg.year_filter = Some(2016);
        assert!(executor(&cfg).collect_work_items().is_empty());
    }

    #[test]
    fn test_filter_parts() {
        let temp = TempDir::new().unwrap();
        let mut cfg = config(temp.path());
        assert_eq!(executor(&cfg).filter_parts(2), 1..=2);
        cfg.part_filter = Some(1);
        assert_eq!(executor(&cfg).filter_parts(2), 1..=1);
        cfg.part_filter = Some(2);
        assert!(executor(&cfg).filter_parts(1).is_empty());
    }

    proptest! {
        /// Selected parts are a subset of `1..=max_parts`, honouring the part filter.
        #[test]
        fn prop_filter_parts_within_bounds(
            part_filter in proptest::option::of(1u8..=2),
            max_parts in 0u8..5,
        ) {
            let temp = TempDir::new().unwrap();
            let mut cfg = config(temp.path());
            cfg.part_filter = part_filter;

            let parts: Vec<u8> = executor(&cfg).filter_parts(max_parts).collect();
            prop_assert!(parts.iter().all(|p| (1..=max_parts).contains(p)));
            match part_filter {
                Some(p) if p <= max_parts => prop_assert_eq!(parts, vec![p]),
                Some(_) => prop_assert!(parts.is_empty()),
                None => prop_assert_eq!(parts, (1..=max_parts).collect::<Vec<_>>()),
            }
        }
    }

    #[test]
    fn test_execute_in_order_with_parse_time_once() {
        let temp = TempDir::new().unwrap();
        write_input(temp.path(), 1, "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n");
        let mut cfg = config(temp.path());
        cfg.day_filter = Some(1);

        let results = run(&executor(&cfg));
        let answers: Vec<_> = results
            .iter()
            .map(|r| (r.part, r.answer.as_ref().map(String::as_str).ok()))
            .collect();
        assert_eq!(answers, vec![(1, Some("3")), (2, Some("6"))]);
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_missing_input_reported_per_part() {
        let temp = TempDir::new().unwrap();
        let mut cfg = config(temp.path());
        cfg.day_filter = Some(5);

        let results = run(&executor(&cfg));
        assert_eq!(results.len(), 2);
        for result in &results {
            assert!(matches!(
                error(result),
                Some(ExecutorError::Input(InputError::Missing { day: 5, .. }))
            ));
        }
    }

    #[test]
    fn test_parse_failure_does_not_stop_other_days() {
        let temp = TempDir::new().unwrap();
        write_input(temp.path(), 1, "L68\nforward 5\n");
        write_input(temp.path(), 3, "987654321111111\n811111111111119\n");
        let cfg = config(temp.path());

        let results = run(&executor(&cfg));
        let day_1: Vec<_> = results.iter().filter(|r| r.day == 1).collect();
        assert_eq!(day_1.len(), 2);
        assert!(day_1.iter().all(|r| matches!(
            error(r),
            Some(ExecutorError::Solver(SolverError::ParseError(_)))
        )));

        let day_3: Vec<_> = results
            .iter()
            .filter(|r| r.day == 3)
            .map(|r| r.answer.as_deref().ok())
            .collect();
        assert_eq!(day_3, vec![Some("187"), Some("1798765432230")]);
    }

    #[test]
    fn test_example_variant_reads_test_files() {
        let temp = TempDir::new().unwrap();
        let year_dir = temp.path().join("2025");
        fs::create_dir_all(&year_dir).unwrap();
        fs::write(year_dir.join("test_day_5.txt"), "3-5\n10-14\n\n4\n12\n20\n").unwrap();

        let mut cfg = config(temp.path());
        cfg.variant = InputVariant::Example;
        cfg.day_filter = Some(5);

        let answers: Vec<_> = run(&executor(&cfg))
            .into_iter()
            .map(|r| r.answer.ok())
            .collect();
        assert_eq!(answers, vec![Some("2".to_string()), Some("8".to_string())]);
    }
}

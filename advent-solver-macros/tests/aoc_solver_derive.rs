use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};

#[derive(Debug, Clone, PartialEq)]
struct SharedData {
    numbers: Vec<i64>,
    sum: Option<i64>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 3)]
struct ThreeParts;

impl AocParser for ThreeParts {
    type SharedData = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        let numbers = input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i64>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SharedData { numbers, sum: None })
    }
}

// Part 1: sum, stored for part 3
impl PartSolver<1> for ThreeParts {
    fn solve(shared: &mut SharedData) -> Result<String, SolveError> {
        let sum: i64 = shared.numbers.iter().sum();
        shared.sum = Some(sum);
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for ThreeParts {
    fn solve(shared: &mut SharedData) -> Result<String, SolveError> {
        if shared.numbers.is_empty() {
            Err(SolveError::failed("Empty input"))
        } else {
            Ok(shared.numbers.iter().product::<i64>().to_string())
        }
    }
}

impl PartSolver<3> for ThreeParts {
    fn solve(shared: &mut SharedData) -> Result<String, SolveError> {
        match shared.sum {
            Some(sum) => Ok((sum * 10).to_string()),
            None => Err(SolveError::failed("part 1 has not run")),
        }
    }
}

#[test]
fn test_parts_constant() {
    assert_eq!(<ThreeParts as Solver>::PARTS, 3);
}

#[test]
fn test_dispatch_matches_part_solver() {
    let mut via_solver = ThreeParts::parse("2\n3\n4").unwrap();
    let mut direct = via_solver.clone();

    assert_eq!(
        <ThreeParts as Solver>::solve_part(&mut via_solver, 2).unwrap(),
        <ThreeParts as PartSolver<2>>::solve(&mut direct).unwrap()
    );
    assert_eq!(<ThreeParts as Solver>::solve_part(&mut via_solver, 2).unwrap(), "24");
}

#[test]
fn test_error_from_part_propagates() {
    let mut shared = SharedData {
        numbers: vec![],
        sum: None,
    };
    let result = <ThreeParts as Solver>::solve_part(&mut shared, 2);
    assert!(matches!(result, Err(SolveError::SolveFailed(_))));
}

#[test]
fn test_shared_state_between_parts() {
    let mut shared = ThreeParts::parse("1\n2").unwrap();
    assert!(<ThreeParts as Solver>::solve_part(&mut shared, 3).is_err());

    assert_eq!(<ThreeParts as Solver>::solve_part(&mut shared, 1).unwrap(), "3");
    assert_eq!(shared.sum, Some(3));
    assert_eq!(<ThreeParts as Solver>::solve_part(&mut shared, 3).unwrap(), "30");
}

#[test]
fn test_unknown_part_not_implemented() {
    let mut shared = ThreeParts::parse("1").unwrap();
    for part in [0u8, 4, 200] {
        let result = <ThreeParts as Solver>::solve_part(&mut shared, part);
        assert!(matches!(result, Err(SolveError::PartNotImplemented(p)) if p == part));
    }
}

#[test]
fn test_checked_range_rejects_before_dispatch() {
    let mut shared = ThreeParts::parse("1").unwrap();
    let result = ThreeParts::solve_part_checked_range(&mut shared, 4);
    assert!(matches!(result, Err(SolveError::PartOutOfRange { part: 4, parts: 3 })));
}

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError, Solver};
use aoc_solver_macros::AocSolver;

/// Part 2 reuses an intermediate result memoized by part 1.
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct RunningTotals;

#[derive(Debug)]
struct SharedData {
    values: Vec<i64>,
    prefix_sums: Option<Vec<i64>>,
}

impl SharedData {
    fn prefix_sums(&mut self) -> &[i64] {
        self.prefix_sums.get_or_insert_with(|| {
            self.values
                .iter()
                .scan(0, |acc, v| {
                    *acc += v;
                    Some(*acc)
                })
                .collect()
        })
    }
}

impl AocParser for RunningTotals {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let values = input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i64>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SharedData {
            values,
            prefix_sums: None,
        })
    }
}

impl PartSolver<1> for RunningTotals {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let last = shared
            .prefix_sums()
            .last()
            .copied()
            .ok_or_else(|| SolveError::SolveFailed("empty input".into()))?;
        Ok(last.to_string())
    }
}

impl PartSolver<2> for RunningTotals {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let max = shared
            .prefix_sums()
            .iter()
            .max()
            .copied()
            .ok_or_else(|| SolveError::SolveFailed("empty input".into()))?;
        Ok(max.to_string())
    }
}

#[test]
fn test_parts_share_memoized_data() {
    let mut shared = RunningTotals::parse("3\n-1\n4\n-2").unwrap();
    assert!(shared.prefix_sums.is_none());

    assert_eq!(RunningTotals::solve_part(&mut shared, 1).unwrap(), "4");
    assert!(shared.prefix_sums.is_some());

    assert_eq!(RunningTotals::solve_part(&mut shared, 2).unwrap(), "6");
}

#[test]
fn test_part_order_does_not_matter() {
    let mut shared = RunningTotals::parse("3\n-1\n4\n-2").unwrap();
    assert_eq!(RunningTotals::solve_part(&mut shared, 2).unwrap(), "6");
    assert_eq!(RunningTotals::solve_part(&mut shared, 1).unwrap(), "4");
}

#[test]
fn test_empty_input_surfaces_solve_error() {
    let mut shared = RunningTotals::parse("").unwrap();
    let result = RunningTotals::solve_part(&mut shared, 1);
    assert!(matches!(result, Err(SolveError::SolveFailed(_))));
}

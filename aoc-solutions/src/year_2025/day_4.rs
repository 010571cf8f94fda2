use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 4, tags = ["2025", "grid"])]
pub struct Solver;

const ROLL: u8 = b'@';
const EMPTY: u8 = b'.';

const DIRECTIONS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub type Grid = Vec<Vec<u8>>;

/// Remove every roll with fewer than 4 occupied neighbours; returns how many
/// were removed. Removal decisions use the neighbour counts of the grid as it
/// was at the start of the step.
fn removal_step(grid: &mut Grid) -> u64 {
    let rows = grid.len() as i64;
    let cols = grid.first().map_or(0, |row| row.len()) as i64;

    let mut counts = vec![vec![0u8; cols as usize]; rows as usize];
    for i in 0..rows {
        for j in 0..cols {
            if grid[i as usize][j as usize] != ROLL {
                continue;
            }
            for (di, dj) in DIRECTIONS {
                let (ni, nj) = (i + di, j + dj);
                if (0..rows).contains(&ni) && (0..cols).contains(&nj) {
                    counts[ni as usize][nj as usize] += 1;
                }
            }
        }
    }

    let mut removed = 0;
    for i in 0..rows as usize {
        for j in 0..cols as usize {
            if grid[i][j] == ROLL && counts[i][j] < 4 {
                grid[i][j] = EMPTY;
                removed += 1;
            }
        }
    }
    removed
}

fn removable_now(grid: &Grid) -> u64 {
    let mut scratch = grid.clone();
    removal_step(&mut scratch)
}

fn total_removable(grid: &Grid) -> u64 {
    let mut scratch = grid.clone();
    let mut total = 0;
    loop {
        let removed = removal_step(&mut scratch);
        if removed == 0 {
            return total;
        }
        total += removed;
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Grid;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid: Grid = input
            .trim()
            .lines()
            .map(|line| line.trim().as_bytes().to_vec())
            .collect();

        let Some(first) = grid.first() else {
            return Err(ParseError::MissingData("empty grid".into()));
        };
        let width = first.len();
        for (i, row) in grid.iter().enumerate() {
            if row.len() != width {
                return Err(ParseError::InvalidFormat(format!(
                    "row {} has width {}, expected {width}",
                    i + 1,
                    row.len()
                )));
            }
            if let Some(&bad) = row.iter().find(|&&b| b != ROLL && b != EMPTY) {
                return Err(ParseError::InvalidFormat(format!(
                    "unexpected character '{}' in row {}",
                    bad as char,
                    i + 1
                )));
            }
        }
        Ok(grid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(removable_now(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_removable(shared).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.";

    #[test]
    fn example_first_step() {
        let grid = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(removable_now(&grid), 13);
    }

    #[test]
    fn example_until_stable() {
        let grid = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(total_removable(&grid), 43);
    }

    #[test]
    fn isolated_rolls_all_removable() {
        let grid = Solver::parse("@.@\n...\n@.@").unwrap();
        assert_eq!(removable_now(&grid), 4);
        assert_eq!(total_removable(&grid), 4);
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        assert!(Solver::parse("@@@\n@@").is_err());
    }
}

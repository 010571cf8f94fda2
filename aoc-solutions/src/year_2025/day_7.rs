use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 7, tags = ["2025", "simulation"])]
pub struct Solver;

const SOURCE: u8 = b'S';
const SPLITTER: u8 = b'^';
const SPACE: u8 = b'.';

#[derive(Debug)]
pub struct SharedData<'a> {
    rows: Vec<&'a str>,
    outcome: Option<BeamOutcome>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BeamOutcome {
    splits: i64,
    timelines: i64,
}

/// March the beam front one row at a time, tracking how many timelines pass
/// through each column. A splitter consumes the beam above it and feeds both
/// diagonal neighbours of the next row.
fn trace_beams(rows: &[&str]) -> BeamOutcome {
    let width = rows.first().map_or(0, |row| row.len());
    let mut current = vec![0i64; width];
    let mut next = vec![0i64; width];
    let mut splits = 0;

    for row in rows {
        next.fill(0);
        for (i, cell) in row.bytes().enumerate() {
            match cell {
                SOURCE => next[i] = 1,
                SPACE => next[i] += current[i],
                SPLITTER => {
                    if current[i] > 0 {
                        splits += 1;
                    }
                    next[i - 1] += current[i];
                    next[i + 1] += current[i];
                }
                _ => {}
            }
        }
        std::mem::swap(&mut current, &mut next);
    }

    BeamOutcome {
        splits,
        timelines: current.iter().sum(),
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let rows: Vec<&str> = input
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();

        let width = rows.first().map_or(0, |row| row.len());
        for (i, row) in rows.iter().enumerate() {
            let bytes = row.as_bytes();
            if bytes.len() != width {
                return Err(ParseError::InvalidFormat(format!(
                    "row {} has width {}, expected {width}",
                    i + 1,
                    bytes.len()
                )));
            }
            if let Some(bad) = bytes
                .iter()
                .position(|&b| b != SOURCE && b != SPLITTER && b != SPACE)
            {
                return Err(ParseError::InvalidFormat(format!(
                    "unexpected character '{}' at row {}, column {}",
                    bytes[bad] as char,
                    i + 1,
                    bad + 1
                )));
            }
            // Splitters need both diagonal targets in bounds
            if bytes.first() == Some(&SPLITTER) || bytes.last() == Some(&SPLITTER) {
                return Err(ParseError::InvalidFormat(format!(
                    "splitter on the edge of row {}",
                    i + 1
                )));
            }
        }
        Ok(SharedData {
            rows,
            outcome: None,
        })
    }
}

fn solve_once_for_both(shared: &mut SharedData<'_>) -> BeamOutcome {
    *shared
        .outcome
        .get_or_insert_with(|| trace_beams(&shared.rows))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared).splits.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared).timelines.to_string())
    }
}

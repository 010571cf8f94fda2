use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::str::FromStr;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 1, tags = ["2025", "simulation"])]
pub struct Solver;

const DIAL_SIZE: i32 = 100;
const START_POS: i32 = 50;

#[derive(Debug)]
pub struct SharedData {
    rotations: Vec<i32>,
    summary: Option<SpinSummary>,
}

#[derive(Debug)]
struct SpinSummary {
    zero_stops: u32,
    zero_passes: u32,
}

/// Outcome of one rotation: the new dial position and how many times the
/// dial pointed at zero along the way (landing on zero included).
#[derive(Debug, PartialEq, Eq)]
struct Spin {
    zero_hits: i32,
    pos: i32,
}

fn rotate(pos: i32, delta: i32) -> Spin {
    debug_assert!((0..DIAL_SIZE).contains(&pos));
    let raw = pos + delta;
    if raw <= 0 {
        Spin {
            zero_hits: -raw / DIAL_SIZE + i32::from(pos != 0),
            pos: (DIAL_SIZE - (-raw % DIAL_SIZE)) % DIAL_SIZE,
        }
    } else {
        Spin {
            zero_hits: raw / DIAL_SIZE,
            pos: raw % DIAL_SIZE,
        }
    }
}

fn spin_summary(rotations: &[i32], start: i32) -> SpinSummary {
    let mut pos = start;
    let mut zero_stops = u32::from(pos == 0);
    let mut zero_passes = u32::from(pos == 0);
    for &delta in rotations {
        let spin = rotate(pos, delta);
        pos = spin.pos;
        zero_stops += u32::from(pos == 0);
        zero_passes += spin.zero_hits as u32;
    }
    SpinSummary {
        zero_stops,
        zero_passes,
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                let negative = match line.as_bytes().first() {
                    Some(b'L') => true,
                    Some(b'R') => false,
                    _ => {
                        return Err(anyhow!(
                            "(line {}) first character must be 'L' or 'R'",
                            line_idx + 1
                        ));
                    }
                };
                let val = i32::from_str(&line[1..])
                    .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))?;
                if val < 0 {
                    return Err(anyhow!("(line {}) rotation must be non-negative", line_idx + 1));
                }
                Ok(if negative { -val } else { val })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|rotations| SharedData {
                rotations,
                summary: None,
            })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn solve_once_for_both(shared: &mut SharedData) -> &SpinSummary {
    shared
        .summary
        .get_or_insert_with(|| spin_summary(&shared.rotations, START_POS))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared).zero_stops.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared).zero_passes.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_wraps_downwards() {
        assert_eq!(rotate(49, -49), Spin { zero_hits: 1, pos: 0 });
        assert_eq!(rotate(0, -200), Spin { zero_hits: 2, pos: 0 });
        assert_eq!(rotate(0, 50), Spin { zero_hits: 0, pos: 50 });
        assert_eq!(rotate(50, -150), Spin { zero_hits: 2, pos: 0 });
    }

    #[test]
    fn example_counts_zero_stops() {
        let rotations = [-68, -30, 48, -5, 60, -55, -1, -99, 14, -82];
        assert_eq!(spin_summary(&rotations, START_POS).zero_stops, 3);
    }

    #[test]
    fn example_counts_zero_passes() {
        let rotations = [-68, -30, 48, -5, 60, -55, -1, -99, 14, -82];
        assert_eq!(spin_summary(&rotations, START_POS).zero_passes, 6);
    }

    #[test]
    fn starting_on_zero_counts_once() {
        let rotations = [-49, -200, 50, -150];
        let summary = spin_summary(&rotations, 49);
        assert_eq!(summary.zero_stops, 3);
    }

    #[test]
    fn parse_rejects_bad_direction() {
        assert!(Solver::parse("L10\nX5").is_err());
    }

    #[test]
    fn parts_agree_with_summary() {
        let mut shared = Solver::parse("L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82").unwrap();
        assert_eq!(
            <Solver as PartSolver<1>>::solve(&mut shared).unwrap(),
            "3"
        );
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut shared).unwrap(),
            "6"
        );
    }
}

use crate::utils::numeric::{count_digits, pow10};
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 2, tags = ["2025", "math"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    start: i64,
    end: i64,
}

/// True when the decimal digits of `value` split into `chunks` equal blocks.
fn is_repeated(value: i64, chunks: u32) -> bool {
    let len = count_digits(value);
    if len % chunks != 0 {
        return false;
    }

    let chunk_mask = pow10(len / chunks);
    let first_chunk = value % chunk_mask;
    let mut rest = value / chunk_mask;
    while rest != 0 {
        if rest % chunk_mask != first_chunk {
            return false;
        }
        rest /= chunk_mask;
    }
    true
}

fn is_repeated_any(value: i64) -> bool {
    (2..=count_digits(value)).any(|chunks| is_repeated(value, chunks))
}

fn sum_invalid_ids(ranges: &[IdRange], invalid: impl Fn(i64) -> bool) -> i64 {
    ranges
        .iter()
        .map(|range| (range.start..=range.end).filter(|&id| invalid(id)).sum::<i64>())
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<IdRange>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .split(',')
            .map(|piece| -> Result<IdRange, anyhow::Error> {
                let (start, end) = piece
                    .split_once('-')
                    .ok_or_else(|| anyhow!("range '{piece}' is missing '-'"))?;
                let range = IdRange {
                    start: start.parse().with_context(|| format!("range '{piece}'"))?,
                    end: end.parse().with_context(|| format!("range '{piece}'"))?,
                };
                if range.start > range.end {
                    return Err(anyhow!("range '{piece}' is reversed"));
                }
                Ok(range)
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_invalid_ids(shared, |id| is_repeated(id, 2)).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_invalid_ids(shared, is_repeated_any).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,\
                           1698522-1698528,446443-446449,38593856-38593862,565653-565659,\
                           824824821-824824827,2121212118-2121212124";

    #[test]
    fn detects_doubled_patterns() {
        assert!(is_repeated(1212, 2));
        assert!(is_repeated(123123, 2));
        assert!(is_repeated(123123123, 3));
        assert!(is_repeated(1111, 4));
        assert!(!is_repeated(1234, 2));
        assert!(!is_repeated(1234, 4));
    }

    #[test]
    fn example_sum_of_doubled_ids() {
        let ranges = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(sum_invalid_ids(&ranges, |id| is_repeated(id, 2)), 1227775554);
    }

    #[test]
    fn example_sum_of_any_repetition() {
        let ranges = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(sum_invalid_ids(&ranges, is_repeated_any), 4174379265);
    }

    #[test]
    fn parse_rejects_reversed_range() {
        assert!(Solver::parse("22-11").is_err());
    }
}

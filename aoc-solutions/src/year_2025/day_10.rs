use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 10, tags = ["2025", "math"])]
pub struct Solver;

/// One factory machine: an indicator light mask, the buttons wired to it,
/// and the joltage each counter position must reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    /// Target indicator lights, bit i set when position i must end up lit
    lights: u32,
    /// Per-button toggle masks over the indicator lights
    button_masks: Vec<u32>,
    /// Per-button sets of counter positions incremented by one press
    buttons: Vec<Vec<usize>>,
    /// Required final value per counter position
    joltages: Vec<i64>,
}

// ---------------------------------------------------------------------------
// Part 1: fewest distinct buttons whose combined toggle matches the lights
// ---------------------------------------------------------------------------

fn combined_toggle(machine: &Machine, chosen: u32) -> u32 {
    machine
        .button_masks
        .iter()
        .enumerate()
        .filter(|(i, _)| chosen & (1 << i) != 0)
        .fold(0, |acc, (_, &mask)| acc ^ mask)
}

/// Fewest buttons (each pressed at most once; order irrelevant) that light
/// exactly the target pattern, or None when no subset matches.
fn min_toggle_presses(machine: &Machine) -> Option<u32> {
    let subsets = 1u32 << machine.button_masks.len();
    (0..subsets)
        .filter(|&chosen| combined_toggle(machine, chosen) == machine.lights)
        .map(u32::count_ones)
        .min()
}

// ---------------------------------------------------------------------------
// Part 2: fewest total presses to hit every joltage counter exactly
//
// Each machine is an exact integer linear system: one equation per counter
// position, one variable per button (how often it is pressed). The system is
// reduced by fraction-free Gaussian elimination; variables left without a
// pivot are enumerated within derived bounds and the rest solved by
// back-substitution.
// ---------------------------------------------------------------------------

/// Raised when elimination cannot find a pivot: the remaining equations have
/// no usable coefficient, so the machine's wiring is outside the shape this
/// solver handles (or the requirements are contradictory).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("machine system has no usable pivot")]
pub struct DegenerateSystem;

/// Augmented press-count system. Row layout: one coefficient per button plus
/// the trailing joltage target. `bounds[i]` is the inclusive search bound for
/// the variable currently held in column i; it is permuted together with
/// every column swap so the association never goes stale.
#[derive(Debug)]
struct PressSystem {
    rows: Vec<Vec<i64>>,
    width: usize,
    bounds: Vec<i64>,
}

fn build_system(machine: &Machine) -> PressSystem {
    let buttons = machine.buttons.len();
    let width = buttons + 1;

    let rows: Vec<Vec<i64>> = machine
        .joltages
        .iter()
        .enumerate()
        .map(|(position, &target)| {
            let mut row = vec![0i64; width];
            for (button, positions) in machine.buttons.iter().enumerate() {
                if positions.contains(&position) {
                    row[button] = 1;
                }
            }
            row[buttons] = target;
            row
        })
        .collect();

    // A button never needs more presses than the smallest requirement it
    // feeds, which caps the search on every variable that ends up free.
    let bounds = (0..buttons)
        .map(|col| {
            rows.iter()
                .filter(|row| row[col] != 0)
                .map(|row| row[buttons])
                .min()
                .unwrap_or(0)
        })
        .collect();

    PressSystem {
        rows,
        width,
        bounds,
    }
}

const fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.abs()
}

/// Reduce to row echelon form over exact integers; returns the pivot count.
///
/// Every pivot step scans the live sub-rectangle row-major for the first
/// non-zero entry, swaps it into place (row first, column second, bounds in
/// lock-step), then cancels the column below with gcd-scaled row
/// combinations so no entry ever leaves the integers. Rows that cancel to
/// all zeroes are swapped to the end and dropped from the live count.
fn eliminate(sys: &mut PressSystem) -> Result<usize, DegenerateSystem> {
    let cols = sys.width - 1;
    let mut live = sys.rows.len();
    let mut pivot = 0;

    while pivot < live {
        let (row, col) = (pivot..live)
            .find_map(|r| {
                (pivot..cols)
                    .find(|&c| sys.rows[r][c] != 0)
                    .map(|c| (r, c))
            })
            .ok_or(DegenerateSystem)?;

        sys.rows.swap(pivot, row);
        if col != pivot {
            for row in &mut sys.rows[..live] {
                row.swap(pivot, col);
            }
            sys.bounds.swap(pivot, col);
        }

        let pivot_row = sys.rows[pivot].clone();
        for r in pivot + 1..live {
            let coefficient = sys.rows[r][pivot];
            if coefficient == 0 {
                continue;
            }
            let divisor = gcd(pivot_row[pivot], coefficient);
            let pivot_scale = pivot_row[pivot] / divisor;
            let row_scale = coefficient / divisor;
            for c in pivot..sys.width {
                sys.rows[r][c] = sys.rows[r][c] * pivot_scale - pivot_row[c] * row_scale;
            }
        }

        // Fully cancelled equations carry no information; swap-to-end so the
        // loop bound shrinks instead of erasing mid-iteration.
        let mut r = pivot + 1;
        while r < live {
            if sys.rows[r].iter().all(|&v| v == 0) {
                live -= 1;
                sys.rows.swap(r, live);
            } else {
                r += 1;
            }
        }

        pivot += 1;
    }

    sys.rows.truncate(live);
    Ok(live)
}

/// Solve the pivot variables for one fixed assignment of the free columns.
///
/// Works upward from the last pivot row; a candidate dies the moment a pivot
/// value comes out fractional or negative. Returns the total press count.
fn back_substitute(sys: &PressSystem, pivots: usize, assignment: &mut [i64]) -> Option<i64> {
    let cols = sys.width - 1;
    for i in (0..pivots).rev() {
        let row = &sys.rows[i];
        let solved: i64 = (i + 1..cols).map(|j| row[j] * assignment[j]).sum();
        let remainder = row[cols] - solved;
        if remainder % row[i] != 0 {
            return None;
        }
        let presses = remainder / row[i];
        if presses < 0 {
            return None;
        }
        assignment[i] = presses;
    }
    Some(assignment.iter().sum())
}

/// Depth-first enumeration of the free columns `col..`, each within its
/// bound; every complete assignment is settled by back-substitution and the
/// smallest feasible total survives in `best`.
fn search_free(
    sys: &PressSystem,
    pivots: usize,
    assignment: &mut Vec<i64>,
    col: usize,
    best: &mut Option<i64>,
) {
    if col == sys.width - 1 {
        if let Some(total) = back_substitute(sys, pivots, assignment)
            && best.is_none_or(|b| total < b)
        {
            *best = Some(total);
        }
        return;
    }
    for presses in 0..=sys.bounds[col] {
        assignment[col] = presses;
        search_free(sys, pivots, assignment, col + 1, best);
    }
}

/// Minimum total presses to satisfy every joltage counter exactly.
///
/// `Ok(None)` means the search space held no feasible assignment; that case
/// stays distinct from any numeric answer.
fn min_total_presses(machine: &Machine) -> Result<Option<i64>, DegenerateSystem> {
    let mut sys = build_system(machine);
    let pivots = eliminate(&mut sys)?;

    let mut assignment = vec![0i64; sys.width - 1];
    let mut best = None;
    search_free(&sys, pivots, &mut assignment, pivots, &mut best);
    Ok(best)
}

// ---------------------------------------------------------------------------
// Parsing and aggregation
// ---------------------------------------------------------------------------

static RECORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([.#]+)\] ((?:\([0-9,]+\) ?)+) \{([0-9,]+)\}$").expect("record pattern")
});

fn parse_machine(line: &str) -> Result<Machine, anyhow::Error> {
    let captures = RECORD
        .captures(line)
        .ok_or_else(|| anyhow!("'{line}' does not match the machine record shape"))?;

    if captures[1].len() > 32 {
        return Err(anyhow!("more than 32 indicator lights"));
    }
    let lights = captures[1]
        .bytes()
        .enumerate()
        .filter(|&(_, b)| b == b'#')
        .fold(0u32, |acc, (i, _)| acc | 1 << i);

    let mut buttons = Vec::new();
    for group in captures[2].split_whitespace() {
        let indices = group
            .strip_prefix('(')
            .and_then(|g| g.strip_suffix(')'))
            .ok_or_else(|| anyhow!("button group '{group}' is not parenthesized"))?
            .split(',')
            .map(|n| n.parse::<usize>().with_context(|| format!("button '{group}'")))
            .collect::<Result<Vec<_>, _>>()?;
        buttons.push(indices);
    }

    let joltages = captures[3]
        .split(',')
        .map(|n| n.parse::<i64>().with_context(|| format!("joltage '{n}'")))
        .collect::<Result<Vec<_>, _>>()?;

    if buttons.len() > 31 {
        return Err(anyhow!("machine has {} buttons, limit is 31", buttons.len()));
    }
    for (i, button) in buttons.iter().enumerate() {
        if let Some(&bad) = button
            .iter()
            .find(|&&p| p >= joltages.len() || p >= 32)
        {
            return Err(anyhow!(
                "button {i} touches counter {bad}, but only {} counters exist",
                joltages.len()
            ));
        }
    }

    let button_masks = buttons
        .iter()
        .map(|indices| indices.iter().fold(0u32, |acc, &i| acc | 1 << i))
        .collect();

    Ok(Machine {
        lights,
        button_masks,
        buttons,
        joltages,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Machine>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(i, line)| {
                parse_machine(line.trim()).map_err(|e| anyhow!("(line {}) {}", i + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .enumerate()
            .map(|(i, machine)| {
                min_toggle_presses(machine)
                    .ok_or_else(|| anyhow!("machine {i}: no button subset lights the pattern"))
            })
            .try_fold(0u64, |acc, presses| presses.map(|p| acc + u64::from(p)))
            .map(|total| total.to_string())
            .map_err(|e| SolveError::SolveFailed(e.into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .enumerate()
            .map(|(i, machine)| {
                min_total_presses(machine)
                    .map_err(|e| anyhow!("machine {i}: {e}"))?
                    .ok_or_else(|| anyhow!("machine {i}: no feasible press combination"))
            })
            .try_fold(0i64, |acc, presses| presses.map(|p| acc + p))
            .map(|total| total.to_string())
            .map_err(|e| SolveError::SolveFailed(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    const EXAMPLE: &str = "\
[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
[...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}
[.###.#] (0,1,2,3,4) (0,3,4) (0,1,2,4,5) (1,2) {10,11,11,5,10,5}";

    fn example_machines() -> Vec<Machine> {
        Solver::parse(EXAMPLE).unwrap()
    }

    fn machine(buttons: Vec<Vec<usize>>, joltages: Vec<i64>) -> Machine {
        let button_masks = buttons
            .iter()
            .map(|indices| indices.iter().fold(0u32, |acc, &i| acc | 1 << i))
            .collect();
        Machine {
            lights: 0,
            button_masks,
            buttons,
            joltages,
        }
    }

    #[test]
    fn parse_reads_lights_buttons_and_joltages() {
        let machines = example_machines();
        assert_eq!(machines.len(), 3);
        assert_eq!(machines[0].lights, 0b0110);
        assert_eq!(machines[0].button_masks[1], 0b1010);
        assert_eq!(machines[0].buttons[1], vec![1, 3]);
        assert_eq!(machines[1].joltages, vec![7, 5, 12, 7, 2]);
    }

    #[test]
    fn example_toggle_totals() {
        let machines = example_machines();
        let total: u32 = machines
            .iter()
            .map(|m| min_toggle_presses(m).unwrap())
            .sum();
        assert_eq!(total, 7);
    }

    #[test]
    fn example_joltage_minimums() {
        let machines = example_machines();
        let minimums: Vec<i64> = machines
            .iter()
            .map(|m| min_total_presses(m).unwrap().unwrap())
            .collect();
        assert_eq!(minimums, vec![10, 12, 11]);
    }

    #[test]
    fn parts_aggregate_over_machines() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "7");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "33");

        // The total is a sum of independent per-machine minimums, so machine
        // order cannot matter.
        let mut reversed: Vec<Machine> = example_machines().into_iter().rev().collect();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut reversed).unwrap(), "33");
    }

    #[test]
    fn solving_twice_gives_the_same_answer() {
        let machines = example_machines();
        assert_eq!(
            min_total_presses(&machines[0]).unwrap(),
            min_total_presses(&machines[0]).unwrap()
        );
    }

    #[test]
    fn forced_single_button_solution() {
        // One button feeding both counters: the press count is forced.
        let m = machine(vec![vec![0, 1]], vec![4, 4]);
        assert_eq!(min_total_presses(&m).unwrap(), Some(4));
    }

    #[test]
    fn infeasible_requirements_yield_none() {
        // Full rank, but the unique solution needs a negative press count.
        let m = machine(vec![vec![0, 1], vec![1]], vec![2, 1]);
        assert_eq!(min_total_presses(&m).unwrap(), None);
    }

    #[test]
    fn degenerate_wiring_is_a_typed_error() {
        // A button that touches nothing gives an all-zero coefficient
        // rectangle with a non-zero requirement.
        let m = machine(vec![vec![]], vec![1]);
        assert_eq!(min_total_presses(&m), Err(DegenerateSystem));
    }

    #[test]
    fn contradictory_requirements_are_degenerate() {
        // One button, two counters with different targets: elimination
        // leaves an equation with no coefficients but a non-zero target.
        let m = machine(vec![vec![0, 1]], vec![1, 2]);
        assert_eq!(min_total_presses(&m), Err(DegenerateSystem));
    }

    #[test]
    fn gcd_scaling_keeps_entries_integral() {
        // Pairwise overlapping buttons drive elimination through a pivot of
        // magnitude 2; the unique solution is still exact.
        let m = machine(vec![vec![0, 1], vec![0, 2], vec![1, 2]], vec![2, 3, 3]);
        assert_eq!(min_total_presses(&m).unwrap(), Some(4));
    }

    #[test]
    fn fractional_solutions_are_rejected() {
        // Same wiring, but the targets put the unique solution off the
        // integer lattice.
        let m = machine(vec![vec![0, 1], vec![0, 2], vec![1, 2]], vec![2, 3, 4]);
        assert_eq!(min_total_presses(&m).unwrap(), None);
    }

    #[test]
    fn free_variables_are_searched_within_bounds() {
        // Two interchangeable buttons leave one free column; the search must
        // still find the forced split with the smaller total.
        let m = machine(
            vec![vec![0, 1], vec![0, 1], vec![0], vec![1]],
            vec![6, 8],
        );
        // Press the paired buttons 6 times in any mix, then the counter-1
        // button twice.
        assert_eq!(min_total_presses(&m).unwrap(), Some(8));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        /// Machines built from an actual press assignment are always
        /// feasible, and the solved minimum never exceeds the total used to
        /// build them.
        #[test]
        fn prop_constructed_machines_are_solvable(
            presses in vec(0i64..=3, 1..5),
            buttons in vec(vec(0usize..4, 1..4), 1..5),
        ) {
            let presses = &presses[..presses.len().min(buttons.len())];
            let buttons: Vec<Vec<usize>> = buttons[..presses.len()]
                .iter()
                .map(|b| {
                    let mut b = b.clone();
                    b.sort_unstable();
                    b.dedup();
                    b
                })
                .collect();

            let mut joltages = vec![0i64; 4];
            for (count, button) in presses.iter().zip(&buttons) {
                for &position in button {
                    joltages[position] += count;
                }
            }

            let m = machine(buttons, joltages);
            let total = min_total_presses(&m).unwrap();
            prop_assert!(total.is_some());
            let total = total.unwrap();
            prop_assert!(total >= 0);
            prop_assert!(total <= presses.iter().sum::<i64>());
        }

        /// Solving is a pure function of the machine.
        #[test]
        fn prop_idempotent(seed in 0u8..32) {
            let machines = example_machines();
            let m = &machines[(seed % 3) as usize];
            prop_assert_eq!(min_total_presses(m).unwrap(), min_total_presses(m).unwrap());
        }
    }
}

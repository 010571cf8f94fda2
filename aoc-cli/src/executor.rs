//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::input::InputStore;
use aoc_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Result from a single solver execution
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, aoc_solver::SolverError>,
    /// Parse timing, reported once per parsed instance
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

struct SyncExecutorConfig {
    registry: SolverRegistry,
    store: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_config: SyncExecutorConfig {
                registry,
                store: InputStore::new(config.input_dir.clone()),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Input store shared with the missing-input pre-check
    pub fn store(&self) -> &InputStore {
        &self.sync_config.store
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_config;
        cfg.registry
            .storage()
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on config.part_filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.sync_config.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();

        match self.sync_config.parallelize_by {
            ParallelizeBy::Sequential => {
                // No parallelization, execute all in order
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_solver(&work, &tx, &self.sync_config) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                // Group by year, parallelize years using the configured pool
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Day and Part both parallelize across all work items (Part
            // additionally fans out inside run_solver)
            ParallelizeBy::Day | ParallelizeBy::Part => self.execute_parallel(work_items, &tx),
        }
    }

    /// Execute work items in parallel, collecting errors
    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_config = &self.sync_config;

        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .map(|work| run_solver(&work, tx, sync_config).err())
                .reduce_with(|err1, err2| {
                    err1.map(|err1| ArcExecutorError::combine_opt(err2, err1))
                })
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }

    /// Execute grouped work items in parallel (for year-level parallelism)
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_config = &self.sync_config;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = run_solver(&work, tx, sync_config) {
                            err = Some(ArcExecutorError::combine_opt(err, e))
                        }
                    }
                    err
                })
                .reduce_with(|err1, err2| {
                    err1.map(|err1| ArcExecutorError::combine_opt(err2, err1))
                })
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }
}

/// Create an error result for a part that could not run
fn make_error_result(year: u16, day: u8, part: u8, error: &str) -> SolverResult {
    SolverResult {
        year,
        day,
        part,
        answer: Err(aoc_solver::SolverError::ParseError(
            aoc_solver::ParseError::InvalidFormat(error.to_string()),
        )),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

/// Run one work item: load its input, then solve its parts
fn run_solver(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    sync_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let input = match sync_config.store.get(year, day) {
        Ok(Some(input)) => input,
        Ok(None) => {
            let message = format!(
                "input file not found: {}",
                sync_config.store.input_path(year, day).display()
            );
            return send_error_results(work, tx, &message);
        }
        Err(e) => {
            let message = ExecutorError::InputRead {
                year,
                day,
                source: Box::new(e),
            }
            .to_string();
            return send_error_results(work, tx, &message);
        }
    };

    if matches!(sync_config.parallelize_by, ParallelizeBy::Part) {
        run_solver_parts_parallel(work, &input, tx, sync_config)
    } else {
        run_solver_sequential(work, &input, tx, sync_config)
    }
}

/// Send an error result for every part of the work item
fn send_error_results(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    message: &str,
) -> Result<(), ArcExecutorError> {
    for part in work.parts.clone() {
        tx.send(make_error_result(work.year, work.day, part, message))
            .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
    }
    Ok(())
}

/// Solve each part in parallel with its own solver instance (re-parses per
/// part; the aggregator restores output order)
fn run_solver_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    sync_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let registry = &sync_config.registry;

    work.parts
        .clone()
        .into_par_iter()
        .map(|part| {
            let result = match registry.create_solver(year, day, input) {
                Ok(mut solver) => solve_part_timed(year, day, part, &mut *solver, true),
                Err(e) => make_error_result(year, day, part, &e.to_string()),
            };
            tx.send(result)
                .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))
                .err()
        })
        .reduce_with(|err1, err2| err1.map(|err1| ArcExecutorError::combine_opt(err2, err1)))
        .unwrap_or_default()
        .map_or(Ok(()), Err)
}

/// Solve all parts on one solver instance, reusing shared parsed data
fn run_solver_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    sync_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let mut solver = match sync_config.registry.create_solver(year, day, input) {
        Ok(solver) => solver,
        Err(e) => return send_error_results(work, tx, &e.to_string()),
    };

    let mut first = true;
    for part in work.parts.clone() {
        let result = solve_part_timed(year, day, part, &mut *solver, first);
        first = false;
        tx.send(result)
            .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
    }
    Ok(())
}

/// Solve a single part with timing
fn solve_part_timed(
    year: u16,
    day: u8,
    part: u8,
    solver: &mut dyn DynSolver,
    report_parse: bool,
) -> SolverResult {
    let parse_duration = report_parse.then(|| solver.parse_duration());
    match solver.solve(part) {
        Ok(solved) => SolverResult {
            year,
            day,
            part,
            solve_duration: solved.duration(),
            answer: Ok(solved.answer),
            parse_duration,
        },
        Err(e) => SolverResult {
            year,
            day,
            part,
            answer: Err(e.into()),
            parse_duration,
            solve_duration: TimeDelta::zero(),
        },
    }
}

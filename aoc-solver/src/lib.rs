//! Advent of Code Solver Library
//!
//! A flexible and type-safe framework for solving Advent of Code problems across multiple years and days.
//! Each problem is implemented as a solver with custom input parsing and can produce results
//! for multiple parts.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining solvers
//! - Type-safe parsing and result handling with shared data between parts
//! - A registry system for managing multiple solvers
//! - Derive macros for part dispatch and automatic plugin registration
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, ParseError, PartSolver, SolveError, Solver, SolverExt};
//! use aoc_solver::AocSolver;
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! pub struct MyDay1;
//!
//! impl AocParser for MyDay1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input.lines()
//!             .map(|line| line.parse().map_err(|_|
//!                 ParseError::InvalidFormat("Expected integer".to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for MyDay1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for MyDay1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i32>().to_string())
//!     }
//! }
//!
//! let mut shared = MyDay1::parse("1\n2\n3").unwrap();
//! assert_eq!(MyDay1::solve_part_checked_range(&mut shared, 1).unwrap(), "6");
//! assert_eq!(MyDay1::solve_part_checked_range(&mut shared, 2).unwrap(), "6");
//! ```
//!
//! # Key Concepts
//!
//! ## Solver Traits
//!
//! [`AocParser`] defines the shared data type and parsing; [`PartSolver<N>`]
//! solves part `N` over mutable shared data (so work computed for one part
//! can be memoized for the next); [`Solver`] is the runtime dispatch over
//! parts, normally generated by `#[derive(AocSolver)]`.
//!
//! ## DynSolver Trait
//!
//! The [`DynSolver`] trait provides type erasure for working with different
//! solver types uniformly, with parse/solve timing recorded per instance.
//!
//! ## Plugin System and Derive Macros
//!
//! Use `#[derive(AutoRegisterSolver)]` to automatically register solvers:
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2025, day = 1, tags = ["easy"])]
//! struct Day1Solver;
//! ```
//!
//! Registered plugins are collected through `inventory` and turned into a
//! [`SolverRegistry`] via [`SolverRegistryBuilder::register_all_plugins`].

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverPlugin, SolverRegistry,
    SolverRegistryBuilder, SolverStorage,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

//! Advent of Code 2025 puzzle solutions with automatic registration
//!
//! This crate contains the actual puzzle solutions, one module per day.
//! Each solution uses the `AocSolver`/`AutoRegisterSolver` derive macros for
//! part dispatch and automatic plugin registration with the solver framework.
//! Parsing happens once per day into a `SharedData` value; the solve functions
//! are pure computations over that parsed representation.

pub mod utils;
pub mod year_2025;

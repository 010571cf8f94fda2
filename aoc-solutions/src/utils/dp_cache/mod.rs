//! Dynamic Programming Cache with Lazy Evaluation
//!
//! This module provides a memoization cache for dynamic programming problems
//! where values depend on other values in a directed acyclic graph (DAG).
//!
//! # Backend Types
//!
//! - [`VecBackend`]: Efficient for dense, sequential `usize` indices (auto-growing)
//! - [`HashMapBackend`]: Supports arbitrary hashable index types
//!
//! # Warning: Cycle Behavior
//!
//! **The cache does NOT support cycle detection.** If the dependency graph
//! contains cycles, `DpCache` will overflow the stack or loop forever.
//! **Users MUST ensure that dependencies form a DAG.**
//!
//! # Example: Trait-based API
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
//!
//! struct Fibonacci;
//!
//! impl DpProblem<usize, u64> for Fibonacci {
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         if *n <= 1 { vec![] }
//!         else { vec![n - 1, n - 2] }
//!     }
//!     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
//!         if *n <= 1 { *n as u64 }
//!         else { deps[0] + deps[1] }
//!     }
//! }
//!
//! let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);
//! assert_eq!(cache.get(&10), 55);
//! ```
//!
//! # Example: Closure-based API with ClosureProblem
//!
//! For quick prototyping, you can use `ClosureProblem` instead of defining a
//! struct:
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{ClosureProblem, DpCache, HashMapBackend};
//!
//! let collatz_steps = ClosureProblem::new(
//!     |n: &u64| if *n <= 1 { vec![] } else if n % 2 == 0 { vec![n / 2] } else { vec![3 * n + 1] },
//!     |_n: &u64, deps: Vec<u64>| if deps.is_empty() { 0 } else { 1 + deps[0] },
//! );
//!
//! let cache = DpCache::with_problem(HashMapBackend::new(), collatz_steps);
//! assert_eq!(cache.get(&27), 111);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::DpCache;
pub use problem::{ClosureProblem, DpProblem};

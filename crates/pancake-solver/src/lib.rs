//! Solver library for the burnt pancake problem.
//!
//! A stack of `N` pancakes, each with a size in `1..=N` and a burnt or white
//! side up, is sorted into `1w2w..Nw` using only prefix flips. Flipping the
//! top `k` pancakes costs `k`. This crate provides breadth-first search
//! (fewest flips) and best-first A* search (cheapest flips, guided by the
//! largest-pancake-out-of-place heuristic), plus the path rendering used by
//! the `pancake-solver` binary.

pub mod error;
pub mod flip;
pub mod frontier;
pub mod heuristic;
pub mod problem;
pub mod solver;
pub mod stack;
pub mod trace;
pub mod tree;

// Re-export main types
pub use error::{Error, ParseError, Result, SearchError};
pub use flip::{successors, Flip};
pub use heuristic::largest_out_of_place;
pub use problem::Problem;
pub use solver::{
    search_best_first, search_breadth_first, solve, SearchStats, Solution, SolverConfig, Strategy,
};
pub use stack::{Orientation, Pancake, Stack, TieBreakKey};
pub use trace::{Trace, TraceStep};
pub use tree::{NodeId, SearchNode, SearchTree};

//! Heuristic-versus-exact comparison.
//!
//! Runs a fast heuristic and an exact solver on the same instance, one after
//! the other, timing each. The report carries both tours, costs and timings;
//! judging them is left to the caller.

mod runner;

pub use runner::{solve_tsp, Comparator, ComparisonReport};

//! Nearest-neighbor tour construction.
//!
//! Starting from the given city, always travel to the cheapest unvisited
//! city, then return to the start. Runs in O(n²) and gives no optimality
//! guarantee; on adversarial (especially asymmetric) matrices the greedy
//! choice can lead into an expensive closing edge.
//!
//! # Reference
//!
//! Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several Heuristics
//! for the Traveling Salesman Problem", *SIAM J. Computing* 6(3), 563-581.

mod runner;

pub use runner::NearestNeighborSolver;

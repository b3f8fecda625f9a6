//! Exact tour search by exhaustive enumeration.
//!
//! Fixes the start city and evaluates every ordering of the remaining
//! n - 1 cities, keeping the cheapest closed cycle. The result is globally
//! optimal for the given matrix, symmetric or not.
//!
//! # Complexity
//!
//! O(n · (n-1)!) time. Orderings are produced lazily, so memory stays O(n).
//! Practical only up to roughly 10-11 cities.

mod permutations;
mod runner;

pub use permutations::{permutation_count, Permutations};
pub use runner::ExactSolver;

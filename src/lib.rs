//! Traveling salesman tours over an explicit cost matrix.
//!
//! Provides two tour-construction algorithms and a harness that compares
//! them:
//!
//! - **Nearest neighbor**: greedy O(n²) construction, always moving to the
//!   cheapest unvisited city.
//! - **Exact search**: exhaustive enumeration of all (n-1)! orderings of the
//!   non-start cities, guaranteed optimal. Practical only for small n.
//! - **Comparison**: runs both on the same instance, timing each, and
//!   reports tours, costs and elapsed milliseconds.
//! - **Generation**: seeded random matrices for demos and benchmarks.
//!
//! Matrices may be asymmetric; `cost(i, j)` is the cost of travelling from
//! `i` to `j`.
//!
//! # Examples
//!
//! ```
//! use u_tsp::solve_tsp;
//!
//! let report = solve_tsp(
//!     vec![
//!         vec![0.0, 1.0, 10.0, 10.0],
//!         vec![1.0, 0.0, 1.0, 10.0],
//!         vec![100.0, 10.0, 0.0, 1.0],
//!         vec![100.0, 1.0, 10.0, 0.0],
//!     ],
//!     0,
//! )?;
//!
//! assert_eq!(report.heuristic.result.total_cost, 103.0);
//! assert_eq!(report.exact.result.total_cost, 13.0);
//! println!("exact tour: {}", report.exact.result.tour);
//! # Ok::<(), u_tsp::TspError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Serialize/Deserialize for matrices and results
//! - `wasm`: `wasm-bindgen` exports for browser hosts

pub mod compare;
pub mod error;
pub mod exact;
pub mod generate;
pub mod matrix;
pub mod nearest;
pub mod solver;
pub mod timing;
pub mod tour;

#[cfg(feature = "wasm")]
pub mod wasm;

/// Index of a city: a row/column position in the cost matrix.
pub type CityIndex = usize;

pub use compare::{solve_tsp, Comparator, ComparisonReport};
pub use error::{Result, TspError};
pub use matrix::CostMatrix;
pub use solver::TourSolver;
pub use tour::{SolveResult, Tour};

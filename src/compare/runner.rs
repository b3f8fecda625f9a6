//! Comparison orchestration.

use crate::error::{Result, TspError};
use crate::exact::ExactSolver;
use crate::matrix::CostMatrix;
use crate::nearest::NearestNeighborSolver;
use crate::solver::TourSolver;
use crate::timing::{measure, Timed};
use crate::tour::SolveResult;
use crate::CityIndex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Timed results of both solvers on one instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComparisonReport {
    /// Heuristic tour, cost and time.
    pub heuristic: Timed<SolveResult>,

    /// Exact tour, cost and time.
    pub exact: Timed<SolveResult>,
}

/// Runs a heuristic and an exact solver back to back.
///
/// Defaults to [`NearestNeighborSolver`] and [`ExactSolver`].
///
/// # Examples
///
/// ```
/// use u_tsp::compare::Comparator;
/// use u_tsp::matrix::CostMatrix;
///
/// let m = CostMatrix::from_rows(vec![
///     vec![0.0, 5.0],
///     vec![5.0, 0.0],
/// ]).unwrap();
///
/// let report = Comparator::new().compare(&m, 0).unwrap();
/// assert_eq!(report.heuristic.result.total_cost, 10.0);
/// assert_eq!(report.exact.result.total_cost, 10.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Comparator<H = NearestNeighborSolver, E = ExactSolver> {
    heuristic: H,
    exact: E,
}

impl Comparator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: TourSolver, E: TourSolver> Comparator<H, E> {
    /// Uses custom solvers for either side.
    pub fn with_solvers(heuristic: H, exact: E) -> Self {
        Self { heuristic, exact }
    }

    /// Solves `matrix` from `start` with both solvers, heuristic first.
    ///
    /// Fails with [`TspError::IndexOutOfRange`] before running anything if
    /// `start` is not a city of `matrix`.
    pub fn compare(&self, matrix: &CostMatrix, start: CityIndex) -> Result<ComparisonReport> {
        if !matrix.contains(start) {
            return Err(TspError::IndexOutOfRange {
                index: start,
                size: matrix.size(),
            });
        }

        log::debug!(
            "comparing {} and {} on {} cities from {start}",
            self.heuristic.name(),
            self.exact.name(),
            matrix.size()
        );

        let heuristic = measure(|| self.heuristic.solve(matrix, start));
        log::debug!(
            "{}: cost {} in {:.3} ms",
            self.heuristic.name(),
            heuristic.result.total_cost,
            heuristic.elapsed_ms
        );

        let exact = measure(|| self.exact.solve(matrix, start));
        log::debug!(
            "{}: cost {} in {:.3} ms",
            self.exact.name(),
            exact.result.total_cost,
            exact.elapsed_ms
        );

        Ok(ComparisonReport { heuristic, exact })
    }
}

/// Validates a raw grid and compares nearest-neighbor against exact search.
///
/// # Examples
///
/// ```
/// use u_tsp::solve_tsp;
///
/// let report = solve_tsp(
///     vec![
///         vec![0.0, 1.0, 4.0],
///         vec![1.0, 0.0, 2.0],
///         vec![4.0, 2.0, 0.0],
///     ],
///     0,
/// ).unwrap();
/// assert_eq!(report.heuristic.result.tour.as_slice(), &[0, 1, 2, 0]);
/// assert_eq!(report.exact.result.total_cost, 7.0);
/// ```
pub fn solve_tsp(rows: Vec<Vec<f64>>, start: CityIndex) -> Result<ComparisonReport> {
    let matrix = CostMatrix::from_rows(rows)?;
    Comparator::new().compare(&matrix, start)
}

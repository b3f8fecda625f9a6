//! Common interface for tour-construction algorithms.

use crate::matrix::CostMatrix;
use crate::tour::SolveResult;
use crate::CityIndex;

/// Builds a closed tour over a cost matrix.
///
/// Implementations are pure: the same matrix and start always produce the
/// same tour and cost. The start index is the caller's responsibility;
/// solvers may panic when it is out of range.
///
/// # Examples
///
/// ```
/// use u_tsp::matrix::CostMatrix;
/// use u_tsp::tour::{SolveResult, Tour};
/// use u_tsp::{CityIndex, TourSolver};
///
/// /// Visits cities in index order.
/// struct Sequential;
///
/// impl TourSolver for Sequential {
///     fn name(&self) -> &str { "sequential" }
///
///     fn solve(&self, matrix: &CostMatrix, start: CityIndex) -> SolveResult {
///         let order: Vec<CityIndex> = (0..matrix.size()).filter(|&c| c != start).collect();
///         let tour = Tour::closed(start, &order);
///         let cost = matrix.tour_cost(tour.as_slice());
///         SolveResult::new(tour, cost)
///     }
/// }
/// ```
pub trait TourSolver {
    /// Short label used in logs.
    fn name(&self) -> &str;

    /// Builds a tour starting and ending at `start`.
    fn solve(&self, matrix: &CostMatrix, start: CityIndex) -> SolveResult;
}

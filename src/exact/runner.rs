//! Brute-force evaluation loop.

use super::permutations::Permutations;
use crate::matrix::CostMatrix;
use crate::solver::TourSolver;
use crate::tour::{SolveResult, Tour};
use crate::CityIndex;

/// Exhaustive exact solver.
///
/// The non-start cities are enumerated in ascending-index lexicographic
/// order and a candidate replaces the incumbent only when strictly cheaper,
/// so among equally cheap tours the first enumerated one is returned.
///
/// # Examples
///
/// ```
/// use u_tsp::exact::ExactSolver;
/// use u_tsp::matrix::CostMatrix;
/// use u_tsp::TourSolver;
///
/// let m = CostMatrix::from_rows(vec![
///     vec![0.0, 1.0, 10.0, 10.0],
///     vec![1.0, 0.0, 1.0, 10.0],
///     vec![100.0, 10.0, 0.0, 1.0],
///     vec![100.0, 1.0, 10.0, 0.0],
/// ]).unwrap();
///
/// let result = ExactSolver.solve(&m, 0);
/// assert_eq!(result.tour.as_slice(), &[0, 2, 3, 1, 0]);
/// assert_eq!(result.total_cost, 13.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactSolver;

impl TourSolver for ExactSolver {
    fn name(&self) -> &str {
        "exact"
    }

    fn solve(&self, matrix: &CostMatrix, start: CityIndex) -> SolveResult {
        let others: Vec<CityIndex> = (0..matrix.size()).filter(|&c| c != start).collect();
        let mut candidates = Permutations::new(others);

        // There is always at least one ordering, even when `others` is empty.
        let mut best_order = candidates.next().unwrap_or_default();
        let mut best_cost = cycle_cost(matrix, start, &best_order);
        let mut evaluated = 1usize;

        for order in candidates {
            evaluated += 1;
            let cost = cycle_cost(matrix, start, &order);
            if cost < best_cost {
                log::trace!("exact: candidate {evaluated} improves {best_cost} -> {cost}");
                best_cost = cost;
                best_order = order;
            }
        }

        log::debug!("exact from {start}: evaluated {evaluated} cycles, best cost {best_cost}");
        SolveResult::new(Tour::closed(start, &best_order), best_cost)
    }
}

/// Cost of `start → order[0] → … → order[k-1] → start`.
fn cycle_cost(matrix: &CostMatrix, start: CityIndex, order: &[CityIndex]) -> f64 {
    let mut cost = 0.0;
    let mut prev = start;
    for &city in order {
        cost += matrix.get(prev, city);
        prev = city;
    }
    cost + matrix.get(prev, start)
}

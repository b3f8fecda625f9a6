//! Greedy construction loop.

use crate::matrix::CostMatrix;
use crate::solver::TourSolver;
use crate::tour::{SolveResult, Tour};
use crate::CityIndex;

/// Nearest-neighbor heuristic.
///
/// Ties are broken by scan order: among unvisited cities with equal minimal
/// cost, the lowest index wins.
///
/// # Examples
///
/// ```
/// use u_tsp::matrix::CostMatrix;
/// use u_tsp::nearest::NearestNeighborSolver;
/// use u_tsp::TourSolver;
///
/// let m = CostMatrix::from_rows(vec![
///     vec![0.0, 1.0, 4.0],
///     vec![1.0, 0.0, 2.0],
///     vec![4.0, 2.0, 0.0],
/// ]).unwrap();
///
/// let result = NearestNeighborSolver.solve(&m, 0);
/// assert_eq!(result.tour.as_slice(), &[0, 1, 2, 0]);
/// assert_eq!(result.total_cost, 7.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighborSolver;

impl TourSolver for NearestNeighborSolver {
    fn name(&self) -> &str {
        "nearest-neighbor"
    }

    fn solve(&self, matrix: &CostMatrix, start: CityIndex) -> SolveResult {
        let n = matrix.size();
        let mut visited = vec![false; n];
        visited[start] = true;

        let mut path = Vec::with_capacity(n + 1);
        path.push(start);
        let mut current = start;
        let mut total_cost = 0.0;

        for _ in 1..n {
            // Strict `<`: the first minimum in index order is kept.
            let mut best: Option<(CityIndex, f64)> = None;
            for (city, &cost) in matrix.row(current).iter().enumerate() {
                if visited[city] {
                    continue;
                }
                if best.is_none_or(|(_, best_cost)| cost < best_cost) {
                    best = Some((city, cost));
                }
            }

            let Some((next, cost)) = best else {
                break;
            };
            visited[next] = true;
            path.push(next);
            total_cost += cost;
            current = next;
        }

        total_cost += matrix.get(current, start);
        path.push(start);

        log::debug!("nearest-neighbor from {start}: cost {total_cost}");
        SolveResult::new(Tour::from_path(path), total_cost)
    }
}

//! Property tests for both solvers over random small instances.

use proptest::prelude::*;
use u_tsp::exact::ExactSolver;
use u_tsp::nearest::NearestNeighborSolver;
use u_tsp::{CityIndex, Comparator, CostMatrix, TourSolver};

/// Random n×n matrix with whole-number costs and a start city, n in 2..=6.
fn instance() -> impl Strategy<Value = (CostMatrix, CityIndex)> {
    (2usize..=6)
        .prop_flat_map(|n| (Just(n), prop::collection::vec(0u32..100, n * n), 0..n))
        .prop_map(|(n, data, start)| {
            let data = data.into_iter().map(f64::from).collect();
            (CostMatrix::new(n, data).unwrap(), start)
        })
}

/// Every closed tour from `start`, built by independent recursion.
fn all_tours(n: usize, start: CityIndex) -> Vec<Vec<CityIndex>> {
    fn extend(
        path: &mut Vec<CityIndex>,
        used: &mut [bool],
        start: CityIndex,
        out: &mut Vec<Vec<CityIndex>>,
    ) {
        if path.len() == used.len() {
            let mut tour = path.clone();
            tour.push(start);
            out.push(tour);
            return;
        }
        for city in 0..used.len() {
            if !used[city] {
                used[city] = true;
                path.push(city);
                extend(path, used, start, out);
                path.pop();
                used[city] = false;
            }
        }
    }

    let mut used = vec![false; n];
    used[start] = true;
    let mut out = Vec::new();
    extend(&mut vec![start], &mut used, start, &mut out);
    out
}

proptest! {
    #[test]
    fn prop_nn_is_hamiltonian_cycle((matrix, start) in instance()) {
        let result = NearestNeighborSolver.solve(&matrix, start);
        prop_assert!(result.tour.is_hamiltonian_cycle(matrix.size()));
        prop_assert_eq!(result.tour.start(), Some(start));
        prop_assert_eq!(result.total_cost, matrix.tour_cost(result.tour.as_slice()));
    }

    #[test]
    fn prop_exact_is_hamiltonian_cycle((matrix, start) in instance()) {
        let result = ExactSolver.solve(&matrix, start);
        prop_assert!(result.tour.is_hamiltonian_cycle(matrix.size()));
        prop_assert_eq!(result.tour.start(), Some(start));
        prop_assert_eq!(result.total_cost, matrix.tour_cost(result.tour.as_slice()));
    }

    #[test]
    fn prop_exact_is_globally_optimal((matrix, start) in instance()) {
        let result = ExactSolver.solve(&matrix, start);
        let tours = all_tours(matrix.size(), start);
        let mut cheapest = f64::INFINITY;
        for tour in &tours {
            let cost = matrix.tour_cost(tour);
            prop_assert!(result.total_cost <= cost, "{:?} costs {} < {}", tour, cost, result.total_cost);
            cheapest = cheapest.min(cost);
        }
        prop_assert_eq!(result.total_cost, cheapest);
    }

    #[test]
    fn prop_exact_dominates_heuristic((matrix, start) in instance()) {
        let report = Comparator::new().compare(&matrix, start).unwrap();
        prop_assert!(report.exact.result.total_cost <= report.heuristic.result.total_cost);
    }

    #[test]
    fn prop_solvers_are_deterministic((matrix, start) in instance()) {
        prop_assert_eq!(
            NearestNeighborSolver.solve(&matrix, start),
            NearestNeighborSolver.solve(&matrix, start)
        );
        prop_assert_eq!(ExactSolver.solve(&matrix, start), ExactSolver.solve(&matrix, start));
    }
}

#[test]
fn test_all_tours_helper_counts() {
    assert_eq!(all_tours(2, 0).len(), 1);
    assert_eq!(all_tours(4, 1).len(), 6);
    assert_eq!(all_tours(5, 0).len(), 24);
}

//! Cross-solver properties checked on small random instances.
//!
//! Sizes stay at or below 7 so each exhaustive run enumerates at most
//! 6! = 720 permutations and the whole suite finishes quickly.

use proptest::prelude::*;

use tsp_bench::compare::compare;
use tsp_bench::distance::DistanceMatrix;
use tsp_bench::instances::southern_chile;
use tsp_bench::models::Point;
use tsp_bench::solvers::{exhaustive_search, nearest_neighbor};

fn arb_points(max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((0.0..100.0f64, 0.0..100.0f64), 2..=max).prop_map(|coords| {
        coords
            .into_iter()
            .enumerate()
            .map(|(i, (x, y))| Point::new(format!("p{i}"), x, y))
            .collect()
    })
}

proptest! {
    #[test]
    fn test_exact_never_worse_than_greedy(points in arb_points(7)) {
        let dm = DistanceMatrix::from_points(&points).expect("valid");
        let exact = exhaustive_search(&dm).expect("solvable");
        let greedy = nearest_neighbor(&dm).expect("solvable");
        prop_assert!(exact.cost() <= greedy.cost() + 1e-9);
    }

    #[test]
    fn test_both_tours_are_valid_cycles(points in arb_points(7)) {
        let dm = DistanceMatrix::from_points(&points).expect("valid");
        let exact = exhaustive_search(&dm).expect("solvable");
        let greedy = nearest_neighbor(&dm).expect("solvable");
        prop_assert!(exact.is_valid_cycle(points.len()));
        prop_assert!(greedy.is_valid_cycle(points.len()));
    }

    #[test]
    fn test_reported_cost_matches_matrix(points in arb_points(7)) {
        let dm = DistanceMatrix::from_points(&points).expect("valid");
        let exact = exhaustive_search(&dm).expect("solvable");
        let greedy = nearest_neighbor(&dm).expect("solvable");
        prop_assert!((dm.tour_cost(exact.stops()) - exact.cost()).abs() < 1e-9);
        prop_assert!((dm.tour_cost(greedy.stops()) - greedy.cost()).abs() < 1e-9);
    }

    #[test]
    fn test_reversing_a_tour_preserves_cost(points in arb_points(7)) {
        let dm = DistanceMatrix::from_points(&points).expect("valid");
        let tour = exhaustive_search(&dm).expect("solvable");
        let reversed = tour.reversed();
        prop_assert!(reversed.is_valid_cycle(points.len()));
        prop_assert!((dm.tour_cost(reversed.stops()) - tour.cost()).abs() < 1e-9);
    }
}

#[test]
fn test_bundled_instance_end_to_end() {
    let points = southern_chile();
    let report = compare(&points).expect("valid instance");

    assert!(report.exact().tour().is_valid_cycle(points.len()));
    assert!(report.greedy().tour().is_valid_cycle(points.len()));
    assert!(report.exact().cost() <= report.greedy().cost() + 1e-9);

    // Real coordinates, so the optimum is strictly positive and the gap
    // is defined and non-negative.
    let gap = report.gap_percent().expect("positive optimal cost");
    assert!(gap >= -1e-9);
}

//! Exhaustive exact solver.
//!
//! # Algorithm
//!
//! Fixes the starting point at index 0 and enumerates every permutation of
//! the remaining indices, keeping the cheapest complete cycle. Fixing the
//! start eliminates the n rotations of each cycle; each tour is still
//! visited twice (once per direction), which is harmless for correctness.
//! Permutations are generated lazily, so memory stays O(n) even though
//! (n-1)! orderings are examined.
//!
//! # Complexity
//!
//! O(n · (n-1)!) — practical only for small n. Around a dozen points a
//! single run already takes seconds; beyond that, minutes to hours.

use itertools::Itertools;

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::Tour;

/// Finds a provably optimal tour by trying every permutation.
///
/// The returned tour starts and ends at index 0. Among equally cheap
/// tours, the first one in lexicographic permutation order wins, so the
/// result is deterministic for a given matrix.
///
/// # Arguments
///
/// * `distances` — Pairwise distance matrix for the instance
///
/// # Examples
///
/// ```
/// use tsp_bench::distance::DistanceMatrix;
/// use tsp_bench::models::Point;
/// use tsp_bench::solvers::exhaustive_search;
///
/// let points = vec![
///     Point::new("a", 0.0, 0.0),
///     Point::new("b", 1.0, 0.0),
///     Point::new("c", 1.0, 1.0),
///     Point::new("d", 0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points).expect("valid instance");
/// let tour = exhaustive_search(&dm).expect("solvable");
/// assert!((tour.cost() - 4.0).abs() < 1e-10);
/// ```
pub fn exhaustive_search(distances: &DistanceMatrix) -> Result<Tour> {
    let n = distances.size();
    if n < 2 {
        return Err(Error::invalid_input(format!(
            "need at least two points to form a tour, got {n}"
        )));
    }

    let mut best_cost = f64::INFINITY;
    let mut best_interior: Vec<usize> = Vec::new();

    for perm in (1..n).permutations(n - 1) {
        let mut cost = distances.get(0, perm[0]);
        cost += perm.windows(2).map(|w| distances.get(w[0], w[1])).sum::<f64>();
        cost += distances.get(perm[n - 2], 0);

        if cost < best_cost {
            best_cost = cost;
            best_interior = perm;
        }
    }

    log::debug!("exhaustive search over {n} points: best cost {best_cost:.4}");

    let mut stops = Vec::with_capacity(n + 1);
    stops.push(0);
    stops.extend(best_interior);
    stops.push(0);
    Ok(Tour::new(stops, best_cost))
}

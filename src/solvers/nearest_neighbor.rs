//! Nearest-neighbor heuristic solver.
//!
//! Builds a tour greedily: starting from index 0, always move to the
//! closest unvisited point, then return to the start. Fast, but the early
//! commitments can force an expensive closing leg.
//!
//! # Complexity
//!
//! O(n²) where n = number of points.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for the TSP. Solution
//! quality is typically 10-25% above optimal on random instances, with
//! no guarantee in the worst case.

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::Tour;

/// A single greedy decision: the leg taken from one point to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct GreedyStep {
    /// Index the leg departs from.
    pub from: usize,
    /// Index the leg arrives at.
    pub to: usize,
    /// Length of the leg.
    pub leg: f64,
}

/// Constructs a tour using the nearest-neighbor heuristic.
///
/// Starts at index 0 and repeatedly visits the closest unvisited point;
/// ties go to the smallest index, so the result is deterministic for a
/// given matrix. The final leg returns to the start.
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
/// use tsp_bench::solvers::nearest_neighbor;
///
/// let points = vec![
///     Point::new("a", 0.0, 0.0),
///     Point::new("b", 1.0, 0.0),
///     Point::new("c", 2.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points).expect("valid instance");
/// let tour = nearest_neighbor(&dm).expect("solvable");
/// assert_eq!(tour.stops(), &[0, 1, 2, 0]);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix) -> Result<Tour> {
    let (tour, _) = nearest_neighbor_steps(distances)?;
    Ok(tour)
}

/// Like [`nearest_neighbor`], but also records each greedy decision.
///
/// The step list has exactly n entries: one per visited point plus the
/// closing leg back to the start. The leg lengths sum to the tour cost.
pub fn nearest_neighbor_steps(distances: &DistanceMatrix) -> Result<(Tour, Vec<GreedyStep>)> {
    let n = distances.size();
    if n < 2 {
        return Err(Error::invalid_input(format!(
            "need at least two points to form a tour, got {n}"
        )));
    }

    let mut visited = vec![false; n];
    visited[0] = true;

    let mut stops = Vec::with_capacity(n + 1);
    stops.push(0);
    let mut steps = Vec::with_capacity(n);
    let mut current = 0;
    let mut cost = 0.0;
    let mut remaining = n - 1;

    while remaining > 0 {
        // Find the closest unvisited point; strict < keeps the first
        // (smallest-index) candidate on ties.
        let mut best: Option<(usize, f64)> = None;
        for cand in 1..n {
            if visited[cand] {
                continue;
            }
            let d = distances.get(current, cand);
            if best.is_none() || d < best.expect("checked is_none").1 {
                best = Some((cand, d));
            }
        }

        match best {
            Some((next, leg)) => {
                log::trace!("greedy leg {current} -> {next} ({leg:.4})");
                visited[next] = true;
                stops.push(next);
                steps.push(GreedyStep {
                    from: current,
                    to: next,
                    leg,
                });
                cost += leg;
                current = next;
                remaining -= 1;
            }
            None => break,
        }
    }

    let closing = distances.get(current, 0);
    stops.push(0);
    steps.push(GreedyStep {
        from: current,
        to: 0,
        leg: closing,
    });
    cost += closing;

    log::debug!("nearest neighbor over {n} points: cost {cost:.4}");
    Ok((Tour::new(stops, cost), steps))
}

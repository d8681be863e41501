//! Closed tour type.

use serde::Serialize;

/// A closed tour through every point of an instance, paired with its total
/// cost.
///
/// The stop sequence has length n + 1 for an n-point instance: it starts
/// and ends at index 0 and visits every other index exactly once in
/// between. Tours are produced by a solver and never mutated.
///
/// # Examples
///
/// ```
/// use tsp_bench::models::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1, 0], 10.0);
/// assert_eq!(tour.stops(), &[0, 2, 1, 0]);
/// assert_eq!(tour.num_points(), 3);
/// assert!(tour.is_valid_cycle(3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    stops: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Creates a tour from a closed stop sequence and its total cost.
    pub fn new(stops: Vec<usize>, cost: f64) -> Self {
        Self { stops, cost }
    }

    /// The stop sequence, including the closing return to index 0.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Total cost: the sum of all consecutive edge weights.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of distinct points visited (the closing stop is not counted).
    pub fn num_points(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// Checks the cycle invariant for an n-point instance: the sequence has
    /// length n + 1, starts and ends at index 0, and visits each index in
    /// `1..n` exactly once. An instance needs at least two points, so
    /// `n < 2` is never valid.
    pub fn is_valid_cycle(&self, n: usize) -> bool {
        if n < 2 || self.stops.len() != n + 1 {
            return false;
        }
        if self.stops[0] != 0 || self.stops[n] != 0 {
            return false;
        }
        let mut seen = vec![false; n];
        for &stop in &self.stops[1..n] {
            if stop == 0 || stop >= n || seen[stop] {
                return false;
            }
            seen[stop] = true;
        }
        true
    }

    /// Returns this tour traversed in the opposite direction.
    ///
    /// On a symmetric cost matrix the reversed tour has the same total
    /// cost, so the stored cost is carried over unchanged.
    pub fn reversed(&self) -> Tour {
        let mut stops = self.stops.clone();
        stops.reverse();
        Tour {
            stops,
            cost: self.cost,
        }
    }
}

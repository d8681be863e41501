//! Dense distance matrix.

use crate::error::{Error, Result};
use crate::models::Point;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built exactly once per instance from the point coordinates and shared
/// read-only by both solvers, so no pairwise distance is ever recomputed
/// inside a solver loop. Euclidean construction yields a symmetric matrix
/// with a zero diagonal.
///
/// # Examples
///
/// ```
/// use tsp_bench::distance::DistanceMatrix;
/// use tsp_bench::models::Point;
///
/// let points = vec![
///     Point::new("a", 0.0, 0.0),
///     Point::new("b", 3.0, 4.0),
///     Point::new("c", 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points).expect("valid instance");
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix from point coordinates.
    ///
    /// Fails with [`Error::InvalidInput`] if fewer than two points are
    /// given (no tour exists) or if any coordinate is NaN or infinite.
    pub fn from_points(points: &[Point]) -> Result<Self> {
        if points.len() < 2 {
            return Err(Error::invalid_input(format!(
                "need at least two points to form a tour, got {}",
                points.len()
            )));
        }
        if let Some(p) = points.iter().find(|p| !p.is_finite()) {
            return Err(Error::invalid_input(format!(
                "point '{}' has a non-finite coordinate",
                p.name()
            )));
        }

        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        log::debug!("distance matrix built for {n} points");
        Ok(dm)
    }

    /// Returns the distance from index `from` to index `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from index `from` to index `to`. Only
    /// construction writes; built matrices are read-only.
    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of points in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total cost of a route given as a sequence of point indices.
    ///
    /// Sums the edge weights of every consecutive pair; a sequence with
    /// fewer than two entries costs zero.
    pub fn tour_cost(&self, stops: &[usize]) -> f64 {
        stops.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Point> {
        vec![
            Point::new("a", 0.0, 0.0),
            Point::new("b", 3.0, 4.0),
            Point::new("c", 0.0, 8.0),
        ]
    }

    #[test]
    fn test_from_points() {
        let dm = DistanceMatrix::from_points(&sample_points()).expect("valid");
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
    }

    #[test]
    fn test_from_points_symmetric_zero_diagonal() {
        let dm = DistanceMatrix::from_points(&sample_points()).expect("valid");
        assert!(dm.is_symmetric(1e-10));
        for i in 0..dm.size() {
            assert_eq!(dm.get(i, i), 0.0);
        }
    }

    #[test]
    fn test_from_points_too_few() {
        let one = vec![Point::new("only", 1.0, 1.0)];
        assert!(matches!(
            DistanceMatrix::from_points(&one),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            DistanceMatrix::from_points(&[]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_from_points_non_finite() {
        let points = vec![
            Point::new("ok", 0.0, 0.0),
            Point::new("bad", f64::NAN, 1.0),
        ];
        let err = DistanceMatrix::from_points(&points).expect_err("must fail");
        assert!(err.to_string().contains("bad"));

        let points = vec![
            Point::new("ok", 0.0, 0.0),
            Point::new("far", f64::INFINITY, 1.0),
        ];
        assert!(DistanceMatrix::from_points(&points).is_err());
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_tour_cost() {
        let dm = DistanceMatrix::from_points(&sample_points()).expect("valid");
        // 0→1 (5) + 1→2 (5) + 2→0 (8)
        assert!((dm.tour_cost(&[0, 1, 2, 0]) - 18.0).abs() < 1e-10);
        assert_eq!(dm.tour_cost(&[0]), 0.0);
        assert_eq!(dm.tour_cost(&[]), 0.0);
    }

    #[test]
    fn test_tour_cost_reversal_matches() {
        let dm = DistanceMatrix::from_points(&sample_points()).expect("valid");
        let forward = dm.tour_cost(&[0, 2, 1, 0]);
        let backward = dm.tour_cost(&[0, 1, 2, 0]);
        assert!((forward - backward).abs() < 1e-10);
    }
}

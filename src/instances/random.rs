//! Random instance generation.

use rand::Rng;

use crate::error::{Error, Result};
use crate::models::Point;

/// Generates `n` points uniformly in the square `[0, extent) × [0, extent)`.
///
/// Points are named `p0`, `p1`, … in generation order. Pass a seeded rng
/// for reproducible instances. Fails with [`Error::InvalidInput`] if
/// `extent` is not a positive finite number.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tsp_bench::instances::random_points;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let points = random_points(5, 100.0, &mut rng).expect("valid extent");
/// assert_eq!(points.len(), 5);
/// assert_eq!(points[3].name(), "p3");
/// ```
pub fn random_points<R: Rng>(n: usize, extent: f64, rng: &mut R) -> Result<Vec<Point>> {
    if !extent.is_finite() || extent <= 0.0 {
        return Err(Error::invalid_input(format!(
            "extent must be a positive finite number, got {extent}"
        )));
    }
    Ok((0..n)
        .map(|i| {
            Point::new(
                format!("p{i}"),
                rng.random_range(0.0..extent),
                rng.random_range(0.0..extent),
            )
        })
        .collect())
}

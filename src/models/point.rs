//! Named point type.

use serde::{Deserialize, Serialize};

/// A named, immutable point in the plane.
///
/// Points are identified by their position in the instance sequence; the
/// name exists only for presentation. Index 0 is the tour's fixed start.
///
/// # Examples
///
/// ```
/// use tsp_bench::models::Point;
///
/// let a = Point::new("a", 0.0, 0.0);
/// let b = Point::new("b", 3.0, 4.0);
/// assert_eq!(a.name(), "a");
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    name: String,
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a named point at the given coordinates.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Display name of this point.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` if both coordinates are finite (neither NaN nor
    /// infinite).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

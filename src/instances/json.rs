//! JSON instance files.
//!
//! An instance file is a JSON array of points:
//!
//! ```json
//! [
//!   { "name": "a", "x": 0.0, "y": 0.0 },
//!   { "name": "b", "x": 3.0, "y": 4.0 }
//! ]
//! ```

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::Point;

/// Reads an instance from a JSON file.
///
/// Fails with [`Error::Io`](crate::Error::Io) if the file can't be read
/// and [`Error::Parse`](crate::Error::Parse) if it isn't a valid point
/// array. Coordinate validity (finiteness, point count) is checked later,
/// when a distance matrix is built.
pub fn read_points(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let contents = fs::read_to_string(path)?;
    let points = serde_json::from_str(&contents)?;
    Ok(points)
}

/// Writes an instance to a JSON file, pretty-printed.
pub fn write_points(path: impl AsRef<Path>, points: &[Point]) -> Result<()> {
    let json = serde_json::to_string_pretty(points)?;
    fs::write(path, json)?;
    Ok(())
}

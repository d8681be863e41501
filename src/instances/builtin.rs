//! Bundled demo instance.

use crate::models::Point;

/// Eight cities in the Chilean south, with latitude/longitude coordinates.
///
/// Small enough for the exhaustive solver to finish in well under a second
/// (7! = 5040 permutations), yet large enough that the greedy tour is
/// usually not optimal. Useful as a default demo and in tests.
///
/// # Examples
///
/// ```
/// use tsp_bench::instances::southern_chile;
///
/// let points = southern_chile();
/// assert_eq!(points.len(), 8);
/// assert_eq!(points[0].name(), "Temuco");
/// ```
pub fn southern_chile() -> Vec<Point> {
    vec![
        Point::new("Temuco", -38.73738453399292, -72.59448229578543),
        Point::new("Valdivia", -39.81605763783872, -73.23991062486559),
        Point::new("Puerto Montt", -41.46940994292862, -72.93960764483167),
        Point::new("Villarrica", -39.28287779349695, -72.22836532447117),
        Point::new("Pucón", -39.278366182989664, -71.96905107526196),
        Point::new("Angol", -37.802326934844054, -72.70005960112702),
        Point::new("Victoria", -38.232155732537336, -72.35245377471217),
        Point::new("Traiguén", -38.25002474259598, -72.66635271990164),
    ]
}

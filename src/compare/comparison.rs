//! Timed head-to-head runs of both solvers.

use std::time::Instant;

use serde::Serialize;

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::{Point, SolverRun, Tour};
use crate::solvers::{exhaustive_search, nearest_neighbor};

/// Outcome of running both solvers on the same instance.
///
/// Holds each solver's tour and wall-clock time plus two derived
/// quality/speed figures. Both figures are optional because they are
/// undefined on degenerate instances:
///
/// - `gap_percent` is `None` when the optimal cost is zero (all points
///   coincide), since relative excess over zero has no meaning.
/// - `speedup` is `None` when the heuristic finished too fast for the
///   clock to register any elapsed time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    exact: SolverRun,
    greedy: SolverRun,
    gap_percent: Option<f64>,
    speedup: Option<f64>,
}

impl ComparisonReport {
    /// Derives the comparison figures from two completed runs.
    pub fn from_runs(exact: SolverRun, greedy: SolverRun) -> Self {
        let gap_percent = if exact.cost() > 0.0 {
            Some((greedy.cost() - exact.cost()) / exact.cost() * 100.0)
        } else {
            None
        };
        let greedy_secs = greedy.elapsed().as_secs_f64();
        let speedup = if greedy_secs > 0.0 {
            Some(exact.elapsed().as_secs_f64() / greedy_secs)
        } else {
            None
        };
        Self {
            exact,
            greedy,
            gap_percent,
            speedup,
        }
    }

    /// The exact solver's run.
    pub fn exact(&self) -> &SolverRun {
        &self.exact
    }

    /// The heuristic solver's run.
    pub fn greedy(&self) -> &SolverRun {
        &self.greedy
    }

    /// How far the heuristic landed above optimal, as a percentage.
    pub fn gap_percent(&self) -> Option<f64> {
        self.gap_percent
    }

    /// How many times faster the heuristic ran.
    pub fn speedup(&self) -> Option<f64> {
        self.speedup
    }
}

fn timed(solve: impl FnOnce() -> Result<Tour>) -> Result<SolverRun> {
    let start = Instant::now();
    let tour = solve()?;
    Ok(SolverRun::new(tour, start.elapsed()))
}

/// Runs the exhaustive solver on its own, with timing.
///
/// Builds the distance matrix first; matrix construction is not counted
/// in the reported time.
pub fn solve_exact(points: &[Point]) -> Result<SolverRun> {
    let dm = DistanceMatrix::from_points(points)?;
    timed(|| exhaustive_search(&dm))
}

/// Runs the nearest-neighbor solver on its own, with timing.
pub fn solve_greedy(points: &[Point]) -> Result<SolverRun> {
    let dm = DistanceMatrix::from_points(points)?;
    timed(|| nearest_neighbor(&dm))
}

/// Runs both solvers back to back on the same distance matrix.
///
/// The matrix is built once and shared, so the timings measure pure
/// solver work on identical inputs.
///
/// # Examples
///
/// ```
/// use tsp_bench::compare::compare;
/// use tsp_bench::models::Point;
///
/// let points = vec![
///     Point::new("a", 0.0, 0.0),
///     Point::new("b", 1.0, 0.0),
///     Point::new("c", 1.0, 1.0),
///     Point::new("d", 0.0, 1.0),
/// ];
/// let report = compare(&points).expect("valid instance");
/// assert!(report.exact().cost() <= report.greedy().cost() + 1e-9);
/// ```
pub fn compare(points: &[Point]) -> Result<ComparisonReport> {
    let dm = DistanceMatrix::from_points(points)?;
    let exact = timed(|| exhaustive_search(&dm))?;
    let greedy = timed(|| nearest_neighbor(&dm))?;
    let report = ComparisonReport::from_runs(exact, greedy);
    log::info!(
        "compared solvers on {} points: exact {:.4} in {:?}, greedy {:.4} in {:?}",
        points.len(),
        report.exact().cost(),
        report.exact().elapsed(),
        report.greedy().cost(),
        report.greedy().elapsed()
    );
    Ok(report)
}

//! Timed solver outcome.

use std::time::Duration;

use serde::Serialize;

use super::Tour;

/// The outcome of one timed solver invocation: the tour it produced and
/// the wall-clock time the call took (measured with a monotonic clock).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tsp_bench::models::{SolverRun, Tour};
///
/// let run = SolverRun::new(Tour::new(vec![0, 1, 0], 10.0), Duration::from_micros(3));
/// assert_eq!(run.cost(), 10.0);
/// assert_eq!(run.elapsed(), Duration::from_micros(3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolverRun {
    tour: Tour,
    elapsed: Duration,
}

impl SolverRun {
    /// Pairs a tour with the time its construction took.
    pub fn new(tour: Tour, elapsed: Duration) -> Self {
        Self { tour, elapsed }
    }

    /// The tour the solver produced.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Total cost of the produced tour.
    pub fn cost(&self) -> f64 {
        self.tour.cost()
    }

    /// Wall-clock duration of the solver call.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_accessors() {
        let tour = Tour::new(vec![0, 1, 0], 4.0);
        let run = SolverRun::new(tour.clone(), Duration::from_millis(2));
        assert_eq!(run.tour(), &tour);
        assert_eq!(run.cost(), 4.0);
        assert_eq!(run.elapsed(), Duration::from_millis(2));
    }
}

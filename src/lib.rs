//! # tsp-bench
//!
//! Small-instance TSP library that pits an exhaustive exact solver against
//! the nearest-neighbor heuristic and measures the cost/speed trade-off.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Tour, SolverRun)
//! - [`distance`] — Dense Euclidean distance matrix
//! - [`solvers`] — Exhaustive search and nearest-neighbor construction
//! - [`compare`] — Timed head-to-head runs and the comparison report
//! - [`instances`] — Bundled, random, and JSON-file instances
//! - [`report`] — Plain-text result rendering

pub mod compare;
pub mod distance;
mod error;
pub mod instances;
pub mod models;
pub mod report;
pub mod solvers;

pub use error::{Error, Result};

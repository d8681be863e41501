//! Domain model types for the tour comparison.
//!
//! Provides the core abstractions: named points, closed tours paired with
//! their total cost, and timed solver outcomes. All state is passed
//! explicitly through solver calls; nothing here is global or mutable
//! after construction.

mod point;
mod run;
mod tour;

pub use point::Point;
pub use run::SolverRun;
pub use tour::Tour;

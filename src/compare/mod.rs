//! Solver comparison.
//!
//! Runs the exact and heuristic solvers on the same instance and reports
//! cost gap and relative speed.

mod comparison;

pub use comparison::{compare, solve_exact, solve_greedy, ComparisonReport};

//! Tour construction algorithms.
//!
//! Two solvers with opposite trade-offs:
//!
//! - [`exhaustive_search`] — provably optimal, factorial time
//! - [`nearest_neighbor`] — greedy approximation, quadratic time
//!
//! Both operate on a shared [`DistanceMatrix`](crate::distance::DistanceMatrix)
//! and return a [`Tour`](crate::models::Tour) that starts and ends at index 0.

mod exhaustive;
mod nearest_neighbor;

pub use exhaustive::exhaustive_search;
pub use nearest_neighbor::{nearest_neighbor, nearest_neighbor_steps, GreedyStep};

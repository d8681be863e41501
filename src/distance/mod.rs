//! Pairwise distance matrix.
//!
//! Provides the dense Euclidean distance matrix both solvers share.

mod matrix;

pub use matrix::DistanceMatrix;

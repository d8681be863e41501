//! Problem instances.
//!
//! - [`southern_chile`] — bundled 8-city demo instance
//! - [`random_points`] — seeded uniform random generation
//! - [`read_points`] / [`write_points`] — JSON instance files

mod builtin;
mod json;
mod random;

pub use builtin::southern_chile;
pub use json::{read_points, write_points};
pub use random::random_points;

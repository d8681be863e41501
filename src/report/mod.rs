//! Human-readable result rendering.

mod text;

pub use text::{render_comparison, render_steps, NamedReport};

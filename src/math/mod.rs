//! Mathematical utilities: 4x4 inversion and summary statistics.

pub mod matrix;
pub mod stats;

pub use matrix::*;
pub use stats::*;

//! Formatted output for fitted models and residual rankings.
//!
//! Formatting lives in its own module so the fitting code stays free of
//! presentation concerns and output changes stay localized.

pub mod format;

pub use format::*;

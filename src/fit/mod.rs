//! Model fitting and residual analysis.
//!
//! Responsibilities:
//!
//! - fit the fixed-shape OLS model over a dataset (`fitter`)
//! - compute and rank per-horse residuals (`residuals`)

pub mod fitter;
pub mod residuals;

pub use fitter::*;
pub use residuals::*;

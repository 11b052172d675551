//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - loaded from JSON by whatever data source the consumer has
//! - handed to reports or exports without conversion

use serde::{Deserialize, Serialize};

/// One observed horse: its 2yo stride profile plus the 3yo outcome.
///
/// Records are immutable once loaded. The engine reads them but never
/// mutates them, and dataset order is preserved through residual output so
/// every row stays traceable to its source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorseRecord {
    pub name: String,
    /// Average strides per second over the 2yo season (Hz).
    pub sps_avg: f64,
    /// Average stride length over the 2yo season (metres).
    pub stride_len: f64,
    /// Typical 2yo race distance (furlongs).
    pub juvenile_distance: f64,
    /// Observed optimal 3yo race distance (furlongs); the fit target.
    pub optimal_distance: f64,
}

impl HorseRecord {
    /// The predictor triple for this record.
    pub fn profile(&self) -> StrideProfile {
        StrideProfile {
            sps_avg: self.sps_avg,
            stride_len: self.stride_len,
            juvenile_distance: self.juvenile_distance,
        }
    }
}

/// A 2yo stride profile used as prediction input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrideProfile {
    pub sps_avg: f64,
    pub stride_len: f64,
    pub juvenile_distance: f64,
}

/// Pairwise Pearson correlations of each predictor against the 3yo distance.
///
/// A zero-variance predictor yields NaN here. NaN is reported as-is, never
/// coerced to 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Correlations {
    pub sps_avg: f64,
    pub stride_len: f64,
    pub juvenile_distance: f64,
}

/// A fitted 2yo -> 3yo distance model.
///
/// The model is a pure function of the dataset snapshot it was fitted on and
/// has no identity of its own: refit from scratch whenever the dataset
/// changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastModel {
    /// `[intercept, sps_avg, stride_len, juvenile_distance]`.
    pub coefficients: [f64; 4],
    /// Share of target variance explained, `1 - SSres / SStot`.
    pub r_squared: f64,
    /// Number of records the model was fitted on.
    pub sample_size: usize,
    pub correlations: Correlations,
}

/// A per-horse fitted result (used for worst-fit ranking and reports).
#[derive(Debug, Clone)]
pub struct HorseResidual {
    pub record: HorseRecord,
    /// Model output for the record's own predictors (furlongs).
    pub predicted: f64,
    /// Observed minus predicted 3yo distance (furlongs).
    pub residual: f64,
    pub abs_residual: f64,
}

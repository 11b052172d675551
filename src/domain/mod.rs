//! Domain types used throughout the engine.
//!
//! This module defines:
//!
//! - observed horse records and their predictor triple (`HorseRecord`,
//!   `StrideProfile`)
//! - fit outputs (`ForecastModel`, `Correlations`, `HorseResidual`)

pub mod types;

pub use types::*;

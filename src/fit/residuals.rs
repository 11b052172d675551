//! Per-horse fitted values and worst-fit ranking.

use std::cmp::Ordering;

use crate::domain::{ForecastModel, HorseRecord, HorseResidual};
use crate::fit::fitter::predict;

/// Compute fitted value and residual for each record, in dataset order.
///
/// Predictions reuse the model's own `predict` path, so a consumer
/// recomputing `predict(model, record.profile())` gets the exact same
/// number back.
pub fn compute_residuals(model: &ForecastModel, dataset: &[HorseRecord]) -> Vec<HorseResidual> {
    let mut out = Vec::with_capacity(dataset.len());
    for record in dataset {
        let predicted = predict(model, &record.profile());
        let residual = record.optimal_distance - predicted;
        out.push(HorseResidual {
            record: record.clone(),
            predicted,
            residual,
            abs_residual: residual.abs(),
        });
    }
    out
}

/// Rank horses by how badly the model fits them, worst first.
///
/// The sort is stable and descending on `abs_residual`: exact ties keep
/// their dataset order. The ordering itself is part of the engine's output
/// contract (worst-fit horses surface first in reports).
pub fn rank_by_abs_residual(model: &ForecastModel, dataset: &[HorseRecord]) -> Vec<HorseResidual> {
    let mut ranked = compute_residuals(model, dataset);
    ranked.sort_by(|a, b| {
        b.abs_residual
            .partial_cmp(&a.abs_residual)
            .unwrap_or(Ordering::Equal)
    });
    ranked
}

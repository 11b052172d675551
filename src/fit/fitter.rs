//! OLS fitting of the 2yo -> 3yo distance model.
//!
//! Given a dataset of horse records we:
//!
//! - compute pairwise Pearson correlations (each predictor vs the target)
//! - accumulate the normal equations `XᵗX β = Xᵗy` over design rows
//!   `[1, sps_avg, stride_len, juvenile_distance]`
//! - solve for `β` by inverting the 4x4 `XᵗX`
//! - derive in-sample predictions, `SSres`/`SStot` and `R²`
//!
//! The whole computation is a deterministic pure function of the dataset:
//! refitting the same records produces bit-identical output.

use nalgebra::{Matrix4, Vector4};

use crate::domain::{Correlations, ForecastModel, HorseRecord, StrideProfile};
use crate::error::ForecastError;
use crate::math::{invert4x4, mean, pearson};

/// Minimum number of records before a fit is attempted.
///
/// Below this the engine refuses to fit and reports the normal empty state
/// rather than producing a garbage model.
pub const MIN_SAMPLE_SIZE: usize = 10;

/// Design row for one record: constant term first, then the predictors.
fn design_row(record: &HorseRecord) -> Vector4<f64> {
    Vector4::new(
        1.0,
        record.sps_avg,
        record.stride_len,
        record.juvenile_distance,
    )
}

/// The linear combination shared by fitting and prediction.
///
/// In-sample predictions during the fit and later `predict` calls go through
/// this one function, so recomputing a prediction externally matches the
/// fitted value exactly.
fn linear_combination(coefficients: &[f64; 4], profile: &StrideProfile) -> f64 {
    coefficients[0]
        + coefficients[1] * profile.sps_avg
        + coefficients[2] * profile.stride_len
        + coefficients[3] * profile.juvenile_distance
}

/// Predict the optimal 3yo distance (furlongs) for a stride profile.
///
/// Pure and total; there is no bounds checking, so extrapolating beyond the
/// training ranges is the caller's responsibility.
pub fn predict(model: &ForecastModel, profile: &StrideProfile) -> f64 {
    linear_combination(&model.coefficients, profile)
}

/// Fit the distance model over a dataset.
///
/// Returns `Ok(None)` when the dataset holds fewer than
/// [`MIN_SAMPLE_SIZE`] records; consumers treat that as the empty state.
/// Returns [`ForecastError::DegenerateModel`] when the solved coefficients
/// or `R²` come out non-finite (singular `XᵗX` from a constant or collinear
/// predictor, or zero target variance).
pub fn fit(dataset: &[HorseRecord]) -> Result<Option<ForecastModel>, ForecastError> {
    let n = dataset.len();
    if n < MIN_SAMPLE_SIZE {
        return Ok(None);
    }

    let targets: Vec<f64> = dataset.iter().map(|r| r.optimal_distance).collect();
    let sps: Vec<f64> = dataset.iter().map(|r| r.sps_avg).collect();
    let strides: Vec<f64> = dataset.iter().map(|r| r.stride_len).collect();
    let juvenile: Vec<f64> = dataset.iter().map(|r| r.juvenile_distance).collect();

    let correlations = Correlations {
        sps_avg: pearson(&sps, &targets),
        stride_len: pearson(&strides, &targets),
        juvenile_distance: pearson(&juvenile, &targets),
    };

    // Accumulate XᵗX and Xᵗy row by row. The constant column makes the first
    // row/column of XᵗX the plain column sums, with n in the corner.
    let mut xtx = Matrix4::<f64>::zeros();
    let mut xty = Vector4::<f64>::zeros();
    for record in dataset {
        let row = design_row(record);
        xtx += row * row.transpose();
        xty += row * record.optimal_distance;
    }

    let beta = invert4x4(&xtx) * xty;
    let coefficients = [beta[0], beta[1], beta[2], beta[3]];

    let mean_y = mean(&targets);
    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for record in dataset {
        let predicted = linear_combination(&coefficients, &record.profile());
        let res = record.optimal_distance - predicted;
        ss_res += res * res;
        let dev = record.optimal_distance - mean_y;
        ss_tot += dev * dev;
    }
    let r_squared = 1.0 - ss_res / ss_tot;

    if coefficients.iter().any(|c| !c.is_finite()) {
        return Err(ForecastError::degenerate(
            "Singular normal-equations matrix produced non-finite coefficients.",
        ));
    }
    if !r_squared.is_finite() {
        return Err(ForecastError::degenerate(
            "Zero target variance produced a non-finite R².",
        ));
    }

    Ok(Some(ForecastModel {
        coefficients,
        r_squared,
        sample_size: n,
        correlations,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, f1: f64, f2: f64, f3: f64, y: f64) -> HorseRecord {
        HorseRecord {
            name: name.to_string(),
            sps_avg: f1,
            stride_len: f2,
            juvenile_distance: f3,
            optimal_distance: y,
        }
    }

    /// Noise-free dataset on `y = 2 + 3 f1 - f2 + 0.5 f3`.
    fn synthetic_dataset(n: usize) -> Vec<HorseRecord> {
        (0..n)
            .map(|i| {
                let f1 = 1.0 + (i % 5) as f64 * 0.5;
                let f2 = 2.0 + (i % 3) as f64;
                let f3 = 4.0 + (i % 7) as f64 * 0.25;
                let y = 2.0 + 3.0 * f1 - f2 + 0.5 * f3;
                record(&format!("H{i:02}"), f1, f2, f3, y)
            })
            .collect()
    }

    #[test]
    fn fit_returns_none_below_min_sample() {
        let dataset = synthetic_dataset(MIN_SAMPLE_SIZE - 1);
        assert!(fit(&dataset).unwrap().is_none());

        assert!(fit(&[]).unwrap().is_none());
    }

    #[test]
    fn fit_recovers_known_coefficients_on_noise_free_data() {
        let dataset = synthetic_dataset(12);
        let model = fit(&dataset).unwrap().unwrap();

        let expected = [2.0, 3.0, -1.0, 0.5];
        for (got, want) in model.coefficients.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-8, "coefficient {got} vs {want}");
        }
        assert!((model.r_squared - 1.0).abs() < 1e-9);
        assert_eq!(model.sample_size, 12);
    }

    #[test]
    fn fit_is_bitwise_deterministic() {
        let dataset = synthetic_dataset(15);
        let a = fit(&dataset).unwrap().unwrap();
        let b = fit(&dataset).unwrap().unwrap();

        for (ca, cb) in a.coefficients.iter().zip(b.coefficients.iter()) {
            assert_eq!(ca.to_bits(), cb.to_bits());
        }
        assert_eq!(a.r_squared.to_bits(), b.r_squared.to_bits());
    }

    #[test]
    fn predict_matches_the_linear_formula() {
        let dataset = synthetic_dataset(12);
        let model = fit(&dataset).unwrap().unwrap();

        let profile = StrideProfile {
            sps_avg: 2.3,
            stride_len: 7.5,
            juvenile_distance: 7.0,
        };
        let expected = model.coefficients[0]
            + model.coefficients[1] * profile.sps_avg
            + model.coefficients[2] * profile.stride_len
            + model.coefficients[3] * profile.juvenile_distance;
        assert_eq!(predict(&model, &profile).to_bits(), expected.to_bits());
    }

    #[test]
    fn constant_predictor_is_reported_as_degenerate() {
        // `sps_avg` identical across all 10 horses makes XᵗX singular. All
        // values are small integers, so elimination hits an exact zero pivot
        // instead of rounding noise.
        let dataset: Vec<HorseRecord> = (0..MIN_SAMPLE_SIZE)
            .map(|i| {
                record(
                    &format!("H{i:02}"),
                    2.0,
                    (i % 4) as f64,
                    (i % 3) as f64,
                    (i % 5) as f64,
                )
            })
            .collect();

        match fit(&dataset) {
            Err(ForecastError::DegenerateModel(_)) => {}
            other => panic!("expected DegenerateModel, got {other:?}"),
        }
    }

    #[test]
    fn constant_target_is_reported_as_degenerate() {
        // Zero target variance makes SStot exactly zero.
        let dataset: Vec<HorseRecord> = (0..MIN_SAMPLE_SIZE)
            .map(|i| {
                record(
                    &format!("H{i:02}"),
                    (i % 4) as f64,
                    (i % 3) as f64,
                    (i % 5) as f64,
                    9.0,
                )
            })
            .collect();

        assert!(matches!(
            fit(&dataset),
            Err(ForecastError::DegenerateModel(_))
        ));
    }
}

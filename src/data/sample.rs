//! Synthetic training data generation.
//!
//! Draws 2yo stride profiles from plausible ranges and derives each horse's
//! 3yo optimal distance from a fixed linear relationship plus Gaussian
//! noise, so the generated dataset behaves like real input to the fitting
//! engine. Generation is seeded and fully deterministic per config.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::HorseRecord;
use crate::error::ForecastError;

/// Linear relationship underlying the generated data:
/// `[intercept, sps_avg, stride_len, juvenile_distance]`.
///
/// Higher cadence marks a sprinter profile (negative slope); longer strides
/// and longer 2yo trips point toward stamina.
pub const SAMPLE_COEFFICIENTS: [f64; 4] = [4.0, -2.5, 1.1, 0.45];

/// Configuration for synthetic dataset generation.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    /// Number of horses to generate.
    pub count: usize,
    /// RNG seed; the same config always yields the same dataset.
    pub seed: u64,
    /// Standard deviation of the noise on the 3yo distance (furlongs).
    pub noise_sd: f64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            count: 40,
            seed: 7,
            noise_sd: 0.35,
        }
    }
}

/// Generate a synthetic dataset of horse records.
pub fn generate_sample(config: &SampleConfig) -> Result<Vec<HorseRecord>, ForecastError> {
    if config.count == 0 {
        return Err(ForecastError::invalid_sample("Sample count must be > 0."));
    }
    if !(config.noise_sd.is_finite() && config.noise_sd >= 0.0) {
        return Err(ForecastError::invalid_sample(
            "Noise std dev must be finite and >= 0.",
        ));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| ForecastError::invalid_sample(format!("Noise distribution error: {e}")))?;

    let mut records = Vec::with_capacity(config.count);
    for i in 0..config.count {
        let sps_avg = rng.gen_range(2.05..=2.55);
        let stride_len = rng.gen_range(6.9..=8.1);
        // 2yo trips come in half-furlong steps between 5f and 8f.
        let juvenile_distance = rng.gen_range(10..=16) as f64 * 0.5;

        let noise = config.noise_sd * normal.sample(&mut rng);
        let optimal_distance = SAMPLE_COEFFICIENTS[0]
            + SAMPLE_COEFFICIENTS[1] * sps_avg
            + SAMPLE_COEFFICIENTS[2] * stride_len
            + SAMPLE_COEFFICIENTS[3] * juvenile_distance
            + noise;

        records.push(HorseRecord {
            name: format!("SYN-{:03}", i + 1),
            sps_avg,
            stride_len,
            juvenile_distance,
            optimal_distance,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::fit;

    #[test]
    fn rejects_zero_count() {
        let config = SampleConfig {
            count: 0,
            ..SampleConfig::default()
        };
        assert!(matches!(
            generate_sample(&config),
            Err(ForecastError::InvalidSampleConfig(_))
        ));
    }

    #[test]
    fn rejects_negative_noise() {
        let config = SampleConfig {
            noise_sd: -1.0,
            ..SampleConfig::default()
        };
        assert!(generate_sample(&config).is_err());
    }

    #[test]
    fn same_seed_yields_identical_datasets() {
        let config = SampleConfig::default();
        let a = generate_sample(&config).unwrap();
        let b = generate_sample(&config).unwrap();

        assert_eq!(a.len(), b.len());
        for (ra, rb) in a.iter().zip(b.iter()) {
            assert_eq!(ra.name, rb.name);
            assert_eq!(ra.sps_avg.to_bits(), rb.sps_avg.to_bits());
            assert_eq!(ra.stride_len.to_bits(), rb.stride_len.to_bits());
            assert_eq!(
                ra.juvenile_distance.to_bits(),
                rb.juvenile_distance.to_bits()
            );
            assert_eq!(
                ra.optimal_distance.to_bits(),
                rb.optimal_distance.to_bits()
            );
        }
    }

    #[test]
    fn generated_values_stay_in_plausible_ranges() {
        let records = generate_sample(&SampleConfig::default()).unwrap();
        assert_eq!(records.len(), 40);
        for r in &records {
            assert!(r.sps_avg >= 2.05 && r.sps_avg <= 2.55);
            assert!(r.stride_len >= 6.9 && r.stride_len <= 8.1);
            assert!(r.juvenile_distance >= 5.0 && r.juvenile_distance <= 8.0);
            assert!(r.optimal_distance.is_finite());
        }
    }

    #[test]
    fn generated_dataset_is_fittable() {
        let records = generate_sample(&SampleConfig::default()).unwrap();
        let model = fit(&records).unwrap().expect("40 records should fit");

        assert_eq!(model.sample_size, 40);
        assert!(model.r_squared.is_finite());
        // Moderate noise on a genuinely linear relationship should leave a
        // strong fit.
        assert!(model.r_squared > 0.5, "R^2 was {}", model.r_squared);
    }
}

//! Summary statistics used by the fitting engine.

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Pearson correlation coefficient between two equally-long series:
///
/// ```text
/// r = Σ(xᵢ-x̄)(yᵢ-ȳ) / (√Σ(xᵢ-x̄)² · √Σ(yᵢ-ȳ)²)
/// ```
///
/// A zero-variance series makes the denominator zero and the result NaN.
/// Callers surface that as "undefined" rather than coercing it to 0.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());

    let mean_x = mean(xs);
    let mean_y = mean(ys);

    let mut num = 0.0;
    let mut den_x = 0.0;
    let mut den_y = 0.0;
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        num += dx * dy;
        den_x += dx * dx;
        den_y += dy * dy;
    }

    num / (den_x.sqrt() * den_y.sqrt())
}

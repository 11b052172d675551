//! Plain-string rendering of model summaries and worst-fit tables.

use crate::domain::{ForecastModel, HorseResidual};

/// Number of worst-fit horses shown by default.
pub const TOP_ERRORS: usize = 5;

/// Format the model summary (fit quality, coefficients, correlations).
pub fn format_model_summary(model: &ForecastModel) -> String {
    let mut out = String::new();

    out.push_str("=== 2yo -> 3yo distance forecast model ===\n");
    out.push_str(&format!(
        "R^2: {:.1}% | sample n={}\n",
        model.r_squared * 100.0,
        model.sample_size
    ));

    out.push_str("\nCoefficients:\n");
    out.push_str(&format!(
        "  intercept         {:>12.6}\n",
        model.coefficients[0]
    ));
    out.push_str(&format!(
        "  sps_avg           {:>12.6}\n",
        model.coefficients[1]
    ));
    out.push_str(&format!(
        "  stride_len        {:>12.6}\n",
        model.coefficients[2]
    ));
    out.push_str(&format!(
        "  juvenile_distance {:>12.6}\n",
        model.coefficients[3]
    ));

    out.push_str("\nCorrelation vs 3yo distance:\n");
    out.push_str(&format!(
        "  sps_avg           {:>8.4}\n",
        model.correlations.sps_avg
    ));
    out.push_str(&format!(
        "  stride_len        {:>8.4}\n",
        model.correlations.stride_len
    ));
    out.push_str(&format!(
        "  juvenile_distance {:>8.4}\n",
        model.correlations.juvenile_distance
    ));

    out
}

/// Format the worst-fit table, largest absolute error first.
///
/// `residuals` is expected to be ranked already (see
/// [`crate::fit::rank_by_abs_residual`]); only the first `top_n` rows are
/// rendered. Distances are in furlongs.
pub fn format_residual_table(residuals: &[HorseResidual], top_n: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<20} {:>9} {:>11} {:>11} {:>8}\n",
        "horse", "2yo dist", "actual 3yo", "predicted", "error"
    ));
    out.push_str(&format!(
        "{:-<20} {:-<9} {:-<11} {:-<11} {:-<8}\n",
        "", "", "", "", ""
    ));

    for r in residuals.iter().take(top_n) {
        out.push_str(&format!(
            "{:<20} {:>8.1}f {:>10.1}f {:>10.1}f {:>+8.2}\n",
            truncate(&r.record.name, 20),
            r.record.juvenile_distance,
            r.record.optimal_distance,
            r.predicted,
            r.residual,
        ));
    }

    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

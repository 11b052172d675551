/// Errors surfaced by the forecasting engine.
///
/// Insufficient data is deliberately not represented here: a dataset with
/// fewer than the minimum number of records makes `fit` return `Ok(None)`,
/// the normal empty state for consumers.
#[derive(Clone, PartialEq, Eq)]
pub enum ForecastError {
    /// The fit produced non-finite outputs. This happens when the
    /// normal-equations matrix is singular (a constant or collinear
    /// predictor) or the target has zero variance.
    DegenerateModel(String),
    /// Synthetic sample generation was configured with invalid parameters.
    InvalidSampleConfig(String),
}

impl ForecastError {
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateModel(message.into())
    }

    pub fn invalid_sample(message: impl Into<String>) -> Self {
        Self::InvalidSampleConfig(message.into())
    }
}

impl std::fmt::Display for ForecastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForecastError::DegenerateModel(message) => {
                write!(f, "degenerate model: {message}")
            }
            ForecastError::InvalidSampleConfig(message) => {
                write!(f, "invalid sample config: {message}")
            }
        }
    }
}

impl std::fmt::Debug for ForecastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForecastError::DegenerateModel(message) => {
                f.debug_tuple("DegenerateModel").field(message).finish()
            }
            ForecastError::InvalidSampleConfig(message) => {
                f.debug_tuple("InvalidSampleConfig").field(message).finish()
            }
        }
    }
}

impl std::error::Error for ForecastError {}

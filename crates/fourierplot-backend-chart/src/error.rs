//! Chart error types.

use fourierplot_spec::BackendError;
use thiserror::Error;

/// Result type for chart operations.
pub type ChartResult<T> = Result<T, ChartError>;

/// Errors from chart rendering.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Image size outside the supported range.
    #[error("invalid chart dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Times and amplitudes have different lengths.
    #[error("length mismatch: {times} times but {amplitudes} amplitudes")]
    LengthMismatch { times: usize, amplitudes: usize },

    /// Tick step is zero, negative or not finite.
    #[error("invalid {axis} tick step: {step}")]
    InvalidTickStep { axis: &'static str, step: f64 },

    /// The tick step is too small for the axis range.
    #[error("{axis} axis would need {count} ticks (max {max})")]
    TooManyTicks {
        axis: &'static str,
        count: usize,
        max: usize,
    },

    /// Explicit axis range is not finite or has `min >= max`.
    #[error("invalid {axis} axis range [{min}, {max}]")]
    InvalidAxisRange {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    Png(#[from] ::png::EncodingError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackendError for ChartError {
    fn code(&self) -> &'static str {
        match self {
            ChartError::InvalidDimensions { .. } => "CHART_001",
            ChartError::LengthMismatch { .. } => "CHART_002",
            ChartError::InvalidTickStep { .. } => "CHART_003",
            ChartError::TooManyTicks { .. } => "CHART_004",
            ChartError::Png(_) => "CHART_005",
            ChartError::Io(_) => "CHART_006",
            ChartError::InvalidAxisRange { .. } => "CHART_007",
        }
    }

    fn category(&self) -> &'static str {
        "chart"
    }
}

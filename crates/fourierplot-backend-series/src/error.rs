//! Error types for the series backend.

use fourierplot_spec::BackendError;
use thiserror::Error;

/// Result type for series operations.
pub type SeriesResult<T> = Result<T, SeriesError>;

/// Errors that can occur while evaluating a series.
///
/// All of these are precondition failures detected before any sample is
/// computed; the evaluator never returns partial output.
#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    /// Period is zero, negative or not finite.
    #[error("invalid period: {period} (must be a positive finite number)")]
    InvalidPeriod {
        /// The invalid period.
        period: f64,
    },

    /// Domain bounds, their span, a time sample or the time shift are not finite.
    #[error("invalid domain: {message}")]
    InvalidDomain {
        /// Error message.
        message: String,
    },

    /// A sample or harmonic count exceeds the series budget.
    #[error("{what} count {requested} exceeds budget of {max}")]
    BudgetExceeded {
        /// What was counted ("sample" or "harmonic").
        what: &'static str,
        /// Requested count.
        requested: u64,
        /// Budget limit.
        max: u64,
    },

    /// `2*pi*k*t/T` is not finite for the highest harmonic.
    #[error("phase overflow: harmonic {harmonic} at t = {time} with period {period}")]
    PhaseOverflow {
        /// Highest harmonic index.
        harmonic: u32,
        /// Time sample with the largest magnitude.
        time: f64,
        /// Waveform period.
        period: f64,
    },
}

impl SeriesError {
    /// Creates an invalid domain error.
    pub fn invalid_domain(message: impl Into<String>) -> Self {
        Self::InvalidDomain {
            message: message.into(),
        }
    }
}

impl BackendError for SeriesError {
    fn code(&self) -> &'static str {
        match self {
            SeriesError::InvalidPeriod { .. } => "SERIES_001",
            SeriesError::InvalidDomain { .. } => "SERIES_002",
            SeriesError::BudgetExceeded { .. } => "SERIES_003",
            SeriesError::PhaseOverflow { .. } => "SERIES_004",
        }
    }

    fn category(&self) -> &'static str {
        "series"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SeriesError::InvalidPeriod { period: 0.0 }.code(), "SERIES_001");
        assert_eq!(SeriesError::invalid_domain("nan").code(), "SERIES_002");
        assert_eq!(SeriesError::invalid_domain("nan").category(), "series");
        let budget = SeriesError::BudgetExceeded {
            what: "sample",
            requested: 10,
            max: 5,
        };
        assert_eq!(budget.code(), "SERIES_003");
        assert_eq!(budget.to_string(), "sample count 10 exceeds budget of 5");
        let phase = SeriesError::PhaseOverflow {
            harmonic: 5,
            time: 1e10,
            period: 1e-300,
        };
        assert_eq!(phase.code(), "SERIES_004");
    }

    #[test]
    fn test_invalid_period_message() {
        let err = SeriesError::InvalidPeriod { period: -2.0 };
        assert!(err.to_string().contains("-2"));
        assert!(err.message().contains("positive"));
    }
}

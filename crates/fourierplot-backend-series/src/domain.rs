//! Time-domain sampling.

use fourierplot_spec::SeriesBudget;

use crate::error::{SeriesError, SeriesResult};

/// Returns `count` evenly spaced samples from `start` to `end`, both inclusive.
///
/// `count == 0` gives an empty vector and `count == 1` gives `[start]`.
/// The last sample is exactly `end`. `end < start` produces a descending
/// sequence. Counts above [`SeriesBudget::DEFAULT_MAX_SAMPLES`] are rejected
/// before anything is allocated.
pub fn linspace(start: f64, end: f64, count: usize) -> SeriesResult<Vec<f64>> {
    if !start.is_finite() || !end.is_finite() {
        return Err(SeriesError::invalid_domain(format!(
            "domain bounds must be finite, got [{}, {}]",
            start, end
        )));
    }
    let span = end - start;
    if !span.is_finite() {
        return Err(SeriesError::invalid_domain(format!(
            "domain span [{}, {}] overflows",
            start, end
        )));
    }
    if count > SeriesBudget::DEFAULT_MAX_SAMPLES {
        return Err(SeriesError::BudgetExceeded {
            what: "sample",
            requested: count as u64,
            max: SeriesBudget::DEFAULT_MAX_SAMPLES as u64,
        });
    }

    match count {
        0 => Ok(Vec::new()),
        1 => Ok(vec![start]),
        _ => {
            let step = span / (count - 1) as f64;
            let mut samples: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            samples[count - 1] = end;
            Ok(samples)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_linspace_endpoints() {
        let samples = linspace(-8.0, 8.0, 1000).unwrap();
        assert_eq!(samples.len(), 1000);
        assert_eq!(samples[0], -8.0);
        assert_eq!(samples[999], 8.0);
    }

    #[test]
    fn test_linspace_small_counts() {
        assert_eq!(linspace(0.0, 1.0, 0).unwrap(), Vec::<f64>::new());
        assert_eq!(linspace(3.0, 5.0, 1).unwrap(), vec![3.0]);
        assert_eq!(linspace(0.0, 1.0, 5).unwrap(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_linspace_descending() {
        assert_eq!(linspace(1.0, -1.0, 3).unwrap(), vec![1.0, 0.0, -1.0]);
    }

    #[test]
    fn test_linspace_rejects_non_finite() {
        assert!(linspace(f64::NAN, 1.0, 10).is_err());
        assert!(linspace(0.0, f64::INFINITY, 10).is_err());
    }

    #[test]
    fn test_linspace_rejects_overflowing_span() {
        let err = linspace(-1e308, 1e308, 3).unwrap_err();
        assert!(matches!(err, SeriesError::InvalidDomain { .. }));
    }

    #[test]
    fn test_linspace_rejects_count_over_budget() {
        let err = linspace(0.0, 1.0, usize::MAX).unwrap_err();
        assert_eq!(
            err,
            SeriesError::BudgetExceeded {
                what: "sample",
                requested: usize::MAX as u64,
                max: SeriesBudget::DEFAULT_MAX_SAMPLES as u64,
            }
        );
    }
}

//! The partial-sum evaluator.

use std::f64::consts::PI;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{SeriesError, SeriesResult};
use crate::harmonics::HarmonicSet;
use crate::term::HarmonicTerm;

/// Evaluates `y[i] = sum over k of term(k, times[i], period)`.
///
/// Harmonics are folded in ascending `k` for every sample. An empty harmonic
/// set yields all zeros. The period, the time samples and the largest phase
/// `2*pi*k*|t|/T` are checked before anything is computed, so a successful
/// result never holds NaN from an overflowing sine argument.
///
/// # Arguments
/// * `times` - Time samples, in any order
/// * `period` - Waveform period; must be positive and finite
/// * `harmonics` - Harmonic indices to sum over
/// * `term` - Per-harmonic term rule
///
/// # Returns
/// One amplitude per time sample, in input order.
pub fn partial_sum<T>(
    times: &[f64],
    period: f64,
    harmonics: &HarmonicSet,
    term: &T,
) -> SeriesResult<Vec<f64>>
where
    T: HarmonicTerm + ?Sized,
{
    check_period(period)?;
    check_phase(times, period, harmonics)?;

    let ks: Vec<u32> = harmonics.indices().collect();
    let fold = |&t: &f64| fold_harmonics(t, period, &ks, term);

    #[cfg(feature = "parallel")]
    let output = times.par_iter().map(fold).collect();

    #[cfg(not(feature = "parallel"))]
    let output = times.iter().map(fold).collect();

    Ok(output)
}

/// Evaluates the partial sum at a single time.
pub fn partial_sum_at<T>(t: f64, period: f64, harmonics: &HarmonicSet, term: &T) -> SeriesResult<f64>
where
    T: HarmonicTerm + ?Sized,
{
    check_period(period)?;
    check_phase(&[t], period, harmonics)?;
    let ks: Vec<u32> = harmonics.indices().collect();
    Ok(fold_harmonics(t, period, &ks, term))
}

#[inline]
fn fold_harmonics<T>(t: f64, period: f64, ks: &[u32], term: &T) -> f64
where
    T: HarmonicTerm + ?Sized,
{
    ks.iter().fold(0.0, |acc, &k| acc + term.term(k, t, period))
}

fn check_period(period: f64) -> SeriesResult<()> {
    if period.is_finite() && period > 0.0 {
        Ok(())
    } else {
        Err(SeriesError::InvalidPeriod { period })
    }
}

fn check_phase(times: &[f64], period: f64, harmonics: &HarmonicSet) -> SeriesResult<()> {
    let mut reach: f64 = 0.0;
    for &t in times {
        if !t.is_finite() {
            return Err(SeriesError::invalid_domain(format!(
                "time sample must be finite, got {}",
                t
            )));
        }
        reach = reach.max(t.abs());
    }

    // Same operation order as the term rules, so the bound is exact.
    if let Some(k) = harmonics.highest() {
        let phase = 2.0 * PI * k as f64 * reach / period;
        if !phase.is_finite() {
            return Err(SeriesError::PhaseOverflow {
                harmonic: k,
                time: reach,
                period,
            });
        }
    }
    Ok(())
}

/// A truncated Fourier series with a fixed period, harmonic set and time shift.
///
/// Evaluation adds `time_shift` to every sample before the term rule sees it,
/// so `evaluate(t)` equals the raw partial sum at `t + time_shift`.
#[derive(Debug, Clone, PartialEq)]
pub struct FourierSeries {
    /// Waveform period.
    pub period: f64,
    /// Harmonic indices summed.
    pub harmonics: HarmonicSet,
    /// Shift added to each time sample.
    pub time_shift: f64,
}

impl FourierSeries {
    /// Creates an unshifted series.
    pub fn new(period: f64, harmonics: HarmonicSet) -> Self {
        Self {
            period,
            harmonics,
            time_shift: 0.0,
        }
    }

    /// Sets the time shift.
    pub fn with_time_shift(mut self, time_shift: f64) -> Self {
        self.time_shift = time_shift;
        self
    }

    /// Evaluates the series at every time sample.
    pub fn evaluate<T>(&self, times: &[f64], term: &T) -> SeriesResult<Vec<f64>>
    where
        T: HarmonicTerm + ?Sized,
    {
        self.check_shift()?;
        let shifted: Vec<f64> = times.iter().map(|t| t + self.time_shift).collect();
        partial_sum(&shifted, self.period, &self.harmonics, term)
    }

    /// Evaluates the series at a single time.
    pub fn evaluate_at<T>(&self, t: f64, term: &T) -> SeriesResult<f64>
    where
        T: HarmonicTerm + ?Sized,
    {
        self.check_shift()?;
        partial_sum_at(t + self.time_shift, self.period, &self.harmonics, term)
    }

    fn check_shift(&self) -> SeriesResult<()> {
        if self.time_shift.is_finite() {
            Ok(())
        } else {
            Err(SeriesError::invalid_domain(format!(
                "time shift must be finite, got {}",
                self.time_shift
            )))
        }
    }
}

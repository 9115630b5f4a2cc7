//! Spec-driven sampling entry point.
//!
//! Maps a [`SeriesParams`] variant to its harmonic set, term rule and time
//! shift, samples the domain and evaluates the partial sum.

use fourierplot_spec::{SampleDomain, SeriesBudget, SeriesParams, WaveformKind};

use crate::domain::linspace;
use crate::error::{SeriesError, SeriesResult};
use crate::evaluate::FourierSeries;
use crate::harmonics::HarmonicSet;
use crate::term::{HarmonicTerm, SawtoothTerm, SquareTerm};

/// A sampled waveform ready for charting.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledWaveform {
    /// Unshifted domain points (the chart x axis).
    pub times: Vec<f64>,
    /// Partial-sum value at each time.
    pub amplitudes: Vec<f64>,
    /// Smallest amplitude (0 when empty).
    pub min: f64,
    /// Largest amplitude (0 when empty).
    pub max: f64,
    /// Largest absolute amplitude.
    pub peak_abs: f64,
}

impl SampledWaveform {
    fn new(times: Vec<f64>, amplitudes: Vec<f64>) -> Self {
        let (min, max) = if amplitudes.is_empty() {
            (0.0, 0.0)
        } else {
            amplitudes
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &y| {
                    (lo.min(y), hi.max(y))
                })
        };
        Self {
            times,
            amplitudes,
            min,
            max,
            peak_abs: min.abs().max(max.abs()),
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns true when no samples were taken.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Builds the series and term rule for a waveform variant.
pub fn series_for(params: &SeriesParams) -> (FourierSeries, &'static dyn HarmonicTerm) {
    let count = HarmonicSet::count_from_signed(params.harmonics);
    let (harmonics, term): (HarmonicSet, &'static dyn HarmonicTerm) = match params.waveform {
        WaveformKind::Square => (HarmonicSet::odd(count), &SquareTerm),
        WaveformKind::Sawtooth => (HarmonicSet::all(count), &SawtoothTerm),
    };
    let series =
        FourierSeries::new(params.period, harmonics).with_time_shift(params.effective_time_shift());
    (series, term)
}

/// Samples `domain` and evaluates the series described by `params` within
/// the default [`SeriesBudget`].
pub fn sample_waveform(params: &SeriesParams, domain: &SampleDomain) -> SeriesResult<SampledWaveform> {
    sample_waveform_with_budget(params, domain, &SeriesBudget::default())
}

/// Like [`sample_waveform`], rejecting sample or harmonic counts over `budget`
/// before anything is allocated.
pub fn sample_waveform_with_budget(
    params: &SeriesParams,
    domain: &SampleDomain,
    budget: &SeriesBudget,
) -> SeriesResult<SampledWaveform> {
    if !budget.allows_samples(domain.samples) {
        return Err(SeriesError::BudgetExceeded {
            what: "sample",
            requested: domain.samples as u64,
            max: budget.max_samples as u64,
        });
    }
    if !budget.allows_harmonics(params.harmonics) {
        return Err(SeriesError::BudgetExceeded {
            what: "harmonic",
            requested: params.harmonics.max(0) as u64,
            max: budget.max_harmonics as u64,
        });
    }

    let times = linspace(domain.start, domain.end, domain.samples)?;
    let (series, term) = series_for(params);
    let amplitudes = series.evaluate(&times, term)?;
    Ok(SampledWaveform::new(times, amplitudes))
}

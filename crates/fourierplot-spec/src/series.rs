//! Series and sampling parameters.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Waveform variant approximated by the partial sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveformKind {
    /// Odd harmonics `1, 3, ..., 2N-1` with coefficient `4/(k*pi)`.
    Square,
    /// All harmonics `1..=N` with coefficient `(-1)^(k+1) * 2/(k*pi)`.
    Sawtooth,
}

impl WaveformKind {
    /// Returns the waveform kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            WaveformKind::Square => "square",
            WaveformKind::Sawtooth => "sawtooth",
        }
    }

    /// Time shift applied before evaluation when the spec leaves it unset.
    ///
    /// The square wave is moved one unit left so a flat top is centered on
    /// the origin for `T = 4`; the sawtooth is moved by `-pi` so its minimum
    /// sits at 0 and its maximum at `2*pi`.
    pub fn default_time_shift(&self) -> f64 {
        match self {
            WaveformKind::Square => 1.0,
            WaveformKind::Sawtooth => -PI,
        }
    }

    /// Returns all waveform kinds.
    pub fn all() -> &'static [WaveformKind] {
        &[WaveformKind::Square, WaveformKind::Sawtooth]
    }
}

impl std::fmt::Display for WaveformKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WaveformKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "square" => Ok(WaveformKind::Square),
            "sawtooth" => Ok(WaveformKind::Sawtooth),
            _ => Err(format!("unknown waveform kind: {}", s)),
        }
    }
}

/// Parameters of one truncated Fourier series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesParams {
    /// Waveform variant.
    pub waveform: WaveformKind,

    /// Period of the waveform, in the same unit as the domain.
    pub period: f64,

    /// Harmonic count `N`. Values below 1 give an empty (all-zero) sum.
    pub harmonics: i64,

    /// Shift added to every time sample before evaluation.
    /// Defaults to [`WaveformKind::default_time_shift`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_shift: Option<f64>,
}

impl SeriesParams {
    /// Creates series parameters with the variant's default time shift.
    pub fn new(waveform: WaveformKind, period: f64, harmonics: i64) -> Self {
        Self {
            waveform,
            period,
            harmonics,
            time_shift: None,
        }
    }

    /// Sets an explicit time shift.
    pub fn with_time_shift(mut self, shift: f64) -> Self {
        self.time_shift = Some(shift);
        self
    }

    /// Shift actually applied before evaluation.
    pub fn effective_time_shift(&self) -> f64 {
        self.time_shift
            .unwrap_or_else(|| self.waveform.default_time_shift())
    }

    /// Harmonic count with negative values clamped to zero.
    pub fn harmonic_count(&self) -> u32 {
        self.harmonics.clamp(0, u32::MAX as i64) as u32
    }

    /// Highest harmonic index summed, or 0 for an empty sum.
    pub fn highest_harmonic(&self) -> u64 {
        let n = self.harmonic_count() as u64;
        match (self.waveform, n) {
            (_, 0) => 0,
            (WaveformKind::Square, n) => 2 * n - 1,
            (WaveformKind::Sawtooth, n) => n,
        }
    }
}

/// Evenly spaced time samples, endpoint inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SampleDomain {
    /// First sample.
    pub start: f64,
    /// Last sample.
    pub end: f64,
    /// Number of samples.
    pub samples: usize,
}

impl SampleDomain {
    /// Creates a new sample domain.
    pub fn new(start: f64, end: f64, samples: usize) -> Self {
        Self {
            start,
            end,
            samples,
        }
    }

    /// Distance between neighbouring samples, or `None` with fewer than two samples.
    pub fn spacing(&self) -> Option<f64> {
        if self.samples < 2 {
            None
        } else {
            Some((self.end - self.start).abs() / (self.samples - 1) as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waveform_kind_serde() {
        let json = serde_json::to_string(&WaveformKind::Sawtooth).unwrap();
        assert_eq!(json, "\"sawtooth\"");
        let kind: WaveformKind = serde_json::from_str("\"square\"").unwrap();
        assert_eq!(kind, WaveformKind::Square);
    }

    #[test]
    fn test_waveform_kind_from_str() {
        assert_eq!("square".parse::<WaveformKind>(), Ok(WaveformKind::Square));
        assert!("triangle".parse::<WaveformKind>().is_err());
    }

    #[test]
    fn test_default_time_shifts() {
        let square = SeriesParams::new(WaveformKind::Square, 4.0, 60);
        assert_eq!(square.effective_time_shift(), 1.0);

        let saw = SeriesParams::new(WaveformKind::Sawtooth, 2.0 * PI, 60);
        assert_eq!(saw.effective_time_shift(), -PI);

        let shifted = saw.with_time_shift(0.0);
        assert_eq!(shifted.effective_time_shift(), 0.0);
    }

    #[test]
    fn test_harmonic_count_clamps_negative() {
        let params = SeriesParams::new(WaveformKind::Square, 4.0, -3);
        assert_eq!(params.harmonic_count(), 0);
        assert_eq!(params.highest_harmonic(), 0);
    }

    #[test]
    fn test_highest_harmonic() {
        assert_eq!(
            SeriesParams::new(WaveformKind::Square, 4.0, 60).highest_harmonic(),
            119
        );
        assert_eq!(
            SeriesParams::new(WaveformKind::Sawtooth, 4.0, 60).highest_harmonic(),
            60
        );
    }

    #[test]
    fn test_time_shift_omitted_when_unset() {
        let params = SeriesParams::new(WaveformKind::Square, 4.0, 60);
        let json = serde_json::to_string(&params).unwrap();
        assert!(!json.contains("time_shift"));
    }

    #[test]
    fn test_domain_spacing() {
        assert_eq!(SampleDomain::new(0.0, 1.0, 1).spacing(), None);
        assert_eq!(SampleDomain::new(0.0, 1.0, 11).spacing(), Some(0.1));
        assert_eq!(SampleDomain::new(1.0, 0.0, 3).spacing(), Some(0.5));
    }
}

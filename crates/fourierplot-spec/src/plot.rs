//! Main plot spec types.

use serde::{Deserialize, Serialize};

use crate::chart::ChartParams;
use crate::series::{SampleDomain, SeriesParams, WaveformKind};

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

/// A fourierplot plot spec.
///
/// Describes one truncated Fourier series, the time domain it is sampled
/// over, and how the result is charted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlotSpec {
    /// Schema version; must be 1.
    pub spec_version: u32,

    /// Stable identifier, also the default output file stem.
    /// Format: `[a-z][a-z0-9_-]{2,63}`
    pub plot_id: String,

    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Series to evaluate.
    pub series: SeriesParams,

    /// Time samples to evaluate at.
    pub domain: SampleDomain,

    /// Chart presentation.
    #[serde(default)]
    pub chart: ChartParams,
}

impl PlotSpec {
    /// Creates a new plot spec builder.
    pub fn builder(plot_id: impl Into<String>, waveform: WaveformKind) -> PlotSpecBuilder {
        PlotSpecBuilder::new(plot_id, waveform)
    }

    /// Parses a spec from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the spec to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the spec to pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the spec to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Legend text with placeholders expanded.
    pub fn legend_text(&self) -> Option<String> {
        self.chart.legend_text(self.series.harmonics)
    }

    /// Default output file name for the rendered chart.
    pub fn default_output_name(&self) -> String {
        format!("{}.png", self.plot_id)
    }
}

/// Builder for constructing PlotSpec instances.
#[derive(Debug, Clone)]
pub struct PlotSpecBuilder {
    plot_id: String,
    description: Option<String>,
    series: SeriesParams,
    domain: SampleDomain,
    chart: ChartParams,
}

impl PlotSpecBuilder {
    /// Creates a new builder with a one-period domain of 1000 samples.
    pub fn new(plot_id: impl Into<String>, waveform: WaveformKind) -> Self {
        Self {
            plot_id: plot_id.into(),
            description: None,
            series: SeriesParams::new(waveform, 1.0, 1),
            domain: SampleDomain::new(0.0, 1.0, 1000),
            chart: ChartParams::default(),
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the period.
    pub fn period(mut self, period: f64) -> Self {
        self.series.period = period;
        self
    }

    /// Sets the harmonic count.
    pub fn harmonics(mut self, harmonics: i64) -> Self {
        self.series.harmonics = harmonics;
        self
    }

    /// Sets an explicit time shift.
    pub fn time_shift(mut self, shift: f64) -> Self {
        self.series.time_shift = Some(shift);
        self
    }

    /// Sets the sample domain.
    pub fn domain(mut self, start: f64, end: f64, samples: usize) -> Self {
        self.domain = SampleDomain::new(start, end, samples);
        self
    }

    /// Sets the chart parameters.
    pub fn chart(mut self, chart: ChartParams) -> Self {
        self.chart = chart;
        self
    }

    /// Builds the spec.
    pub fn build(self) -> PlotSpec {
        PlotSpec {
            spec_version: SPEC_VERSION,
            plot_id: self.plot_id,
            description: self.description,
            series: self.series,
            domain: self.domain,
            chart: self.chart,
        }
    }
}

//! Sample-and-render pipeline shared by the render commands.

use fourierplot_backend_chart::{render_chart, ChartError, ChartImage};
use fourierplot_backend_series::{sample_waveform, SampledWaveform, SeriesError};
use fourierplot_spec::{BackendError, PlotSpec};
use std::fmt;
use std::fs;
use std::path::Path;

/// Errors from the generation pipeline.
#[derive(Debug)]
pub enum DispatchError {
    /// Series evaluation failed.
    Series(SeriesError),
    /// Chart rendering failed.
    Chart(ChartError),
    /// The output location could not be prepared.
    Output(String),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Series(e) => write!(f, "series error: {}", e),
            DispatchError::Chart(e) => write!(f, "chart error: {}", e),
            DispatchError::Output(msg) => write!(f, "output error: {}", msg),
        }
    }
}

impl std::error::Error for DispatchError {}

impl BackendError for DispatchError {
    fn code(&self) -> &'static str {
        match self {
            DispatchError::Series(e) => e.code(),
            DispatchError::Chart(e) => e.code(),
            DispatchError::Output(_) => "DISPATCH_001",
        }
    }

    fn category(&self) -> &'static str {
        match self {
            DispatchError::Series(e) => e.category(),
            DispatchError::Chart(e) => e.category(),
            DispatchError::Output(_) => "dispatch",
        }
    }
}

impl From<SeriesError> for DispatchError {
    fn from(e: SeriesError) -> Self {
        DispatchError::Series(e)
    }
}

impl From<ChartError> for DispatchError {
    fn from(e: ChartError) -> Self {
        DispatchError::Chart(e)
    }
}

/// A rendered plot.
#[derive(Debug)]
pub struct PlotOutcome {
    pub waveform: SampledWaveform,
    pub image: ChartImage,
}

/// Samples the spec's series and renders its chart in memory.
pub fn generate_plot(spec: &PlotSpec) -> Result<PlotOutcome, DispatchError> {
    let waveform = sample_waveform(&spec.series, &spec.domain)?;
    let legend = spec.legend_text();
    let image = render_chart(
        &spec.chart,
        &waveform.times,
        &waveform.amplitudes,
        legend.as_deref(),
    )?;
    Ok(PlotOutcome { waveform, image })
}

/// Generates the plot and writes the PNG to `out_path`, creating parent
/// directories as needed.
pub fn generate_plot_to_file(spec: &PlotSpec, out_path: &Path) -> Result<PlotOutcome, DispatchError> {
    let outcome = generate_plot(spec)?;

    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            DispatchError::Output(format!(
                "failed to create output directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }
    outcome.image.write_to(out_path)?;

    Ok(outcome)
}

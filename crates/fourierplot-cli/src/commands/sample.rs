//! Sample command implementation
//!
//! Evaluates a plot spec's series and dumps `(t, amplitude)` pairs as CSV or
//! JSON, to stdout or a file. Status lines go to stderr so stdout stays
//! machine-readable.

use anyhow::{Context, Result};
use colored::Colorize;
use fourierplot_backend_series::{sample_waveform, SampledWaveform};
use fourierplot_spec::{validate_plot_spec, BackendError, PlotSpec};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::process::ExitCode;

use super::render::{EXIT_GENERATION_ERROR, EXIT_SPEC_ERROR};
use super::reporting;
use crate::input::load_spec_or_preset;

/// Output format for sample dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    Csv,
    Json,
}

impl std::str::FromStr for SampleFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(SampleFormat::Csv),
            "json" => Ok(SampleFormat::Json),
            _ => Err(format!("unknown sample format: {} (expected csv or json)", s)),
        }
    }
}

#[derive(Serialize)]
struct SampleDump<'a> {
    plot_id: &'a str,
    waveform: &'a str,
    period: f64,
    harmonics: i64,
    time_shift: f64,
    times: &'a [f64],
    amplitudes: &'a [f64],
}

/// Run the sample command
///
/// # Arguments
/// * `spec_path` - Path to a JSON plot spec
/// * `preset` - Name of a built-in preset (alternative to `spec_path`)
/// * `format` - Output format
/// * `output` - Output file (default: stdout)
///
/// # Returns
/// Exit code: 0 success, 1 spec error, 2 generation error
pub fn run(
    spec_path: Option<&str>,
    preset: Option<&str>,
    format: SampleFormat,
    output: Option<&str>,
) -> Result<ExitCode> {
    let loaded = match load_spec_or_preset(spec_path, preset) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{}: {}", "error".red(), e);
            return Ok(ExitCode::from(EXIT_SPEC_ERROR));
        }
    };
    let spec = loaded.spec;

    let validation = validate_plot_spec(&spec);
    reporting::print_validation_results(&validation);
    if !validation.is_ok() {
        return Ok(ExitCode::from(EXIT_SPEC_ERROR));
    }

    let waveform = match sample_waveform(&spec.series, &spec.domain) {
        Ok(waveform) => waveform,
        Err(e) => {
            eprintln!("{} [{}] {}", "FAILED".red().bold(), e.code().red(), e);
            return Ok(ExitCode::from(EXIT_GENERATION_ERROR));
        }
    };

    let text = match format {
        SampleFormat::Csv => format_csv(&waveform),
        SampleFormat::Json => format_json(&spec, &waveform)?,
    };

    match output {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("Failed to write samples to: {}", path))?;
            eprintln!(
                "{} {} samples -> {}",
                "Sampled:".cyan().bold(),
                waveform.len(),
                path
            );
        }
        None => print!("{}", text),
    }

    Ok(ExitCode::SUCCESS)
}

/// CSV with a `t,amplitude` header, one row per sample.
pub fn format_csv(waveform: &SampledWaveform) -> String {
    let mut out = String::with_capacity(waveform.len() * 40 + 12);
    out.push_str("t,amplitude\n");
    for (t, y) in waveform.times.iter().zip(&waveform.amplitudes) {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{},{}", t, y);
    }
    out
}

/// Pretty JSON object with the series parameters and both sample arrays.
pub fn format_json(spec: &PlotSpec, waveform: &SampledWaveform) -> Result<String> {
    let dump = SampleDump {
        plot_id: &spec.plot_id,
        waveform: spec.series.waveform.as_str(),
        period: spec.series.period,
        harmonics: spec.series.harmonics,
        time_shift: spec.series.effective_time_shift(),
        times: &waveform.times,
        amplitudes: &waveform.amplitudes,
    };
    let mut json = serde_json::to_string_pretty(&dump).context("Failed to serialize samples")?;
    json.push('\n');
    Ok(json)
}

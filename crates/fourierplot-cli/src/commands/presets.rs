//! Presets command implementation
//!
//! Lists the built-in plot specs and prints their JSON so they can be copied
//! and edited.

use anyhow::{Context, Result};
use colored::Colorize;
use fourierplot_spec::{PlotSpec, PRESET_NAMES};
use serde::Serialize;
use std::process::ExitCode;

use super::reporting;

#[derive(Debug, Serialize)]
struct PresetSummary {
    name: &'static str,
    waveform: String,
    period: f64,
    harmonics: i64,
    description: Option<String>,
}

/// List all presets.
pub fn list(json_output: bool) -> Result<ExitCode> {
    let mut summaries = Vec::with_capacity(PRESET_NAMES.len());
    for &name in PRESET_NAMES {
        let spec = PlotSpec::preset(name)
            .with_context(|| format!("Failed to build preset: {}", name))?;
        summaries.push(PresetSummary {
            name,
            waveform: spec.series.waveform.to_string(),
            period: spec.series.period,
            harmonics: spec.series.harmonics,
            description: spec.description,
        });
    }

    if json_output {
        reporting::print_json(&summaries)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Presets:".cyan().bold());
    for summary in &summaries {
        println!(
            "  {:<10} {} (T = {:.4}, N = {})",
            summary.name.bold(),
            summary.waveform,
            summary.period,
            summary.harmonics
        );
        if let Some(description) = &summary.description {
            println!("  {:<10} {}", "", description.dimmed());
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Print one preset as pretty JSON.
pub fn show(name: &str) -> Result<ExitCode> {
    let spec = match PlotSpec::preset(name) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("{}: {}", "error".red(), e);
            return Ok(ExitCode::from(1));
        }
    };
    let json = spec
        .to_json_pretty()
        .context("Failed to serialize preset")?;
    println!("{}", json);
    Ok(ExitCode::SUCCESS)
}

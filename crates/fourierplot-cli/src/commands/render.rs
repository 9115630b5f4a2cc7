//! Render command implementation
//!
//! Validates a plot spec, samples its series and writes the chart PNG.

use anyhow::Result;
use colored::Colorize;
use fourierplot_spec::{canonical_spec_hash, validate_plot_spec, BackendError, PlotSpec};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{
    backend_error_to_json, input_error_to_json, validation_error_to_json,
    validation_warning_to_json, CommandOutput, JsonWarning, RenderResult,
};
use super::reporting;
use crate::dispatch::generate_plot_to_file;
use crate::input::{load_spec_or_preset, LoadResult};

/// Exit code for specs that fail to load or validate.
pub const EXIT_SPEC_ERROR: u8 = 1;
/// Exit code for failures while sampling or rendering.
pub const EXIT_GENERATION_ERROR: u8 = 2;

/// Run the render command
///
/// # Arguments
/// * `spec_path` - Path to a JSON plot spec
/// * `preset` - Name of a built-in preset (alternative to `spec_path`)
/// * `out` - Output PNG path (default: `{plot_id}.png`)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 spec error, 2 generation error
pub fn run(
    spec_path: Option<&str>,
    preset: Option<&str>,
    out: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(spec_path, preset, out)
    } else {
        run_human(spec_path, preset, out)
    }
}

/// Output path for a spec: the explicit path, or `{plot_id}.png`.
pub fn resolve_output_path(spec: &PlotSpec, out: Option<&str>) -> PathBuf {
    match out {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(spec.default_output_name()),
    }
}

fn run_human(spec_path: Option<&str>, preset: Option<&str>, out: Option<&str>) -> Result<ExitCode> {
    let start = Instant::now();

    let LoadResult { spec, origin, .. } = match load_spec_or_preset(spec_path, preset) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{}: {}", "error".red(), e);
            return Ok(ExitCode::from(EXIT_SPEC_ERROR));
        }
    };

    println!("{} {}", "Rendering:".cyan().bold(), origin);
    println!(
        "{} {} (T = {}, N = {}, shift = {})",
        "Series:".dimmed(),
        spec.series.waveform,
        spec.series.period,
        spec.series.harmonics,
        spec.series.effective_time_shift()
    );

    let validation = validate_plot_spec(&spec);
    reporting::print_validation_results(&validation);
    if !validation.is_ok() {
        println!(
            "\n{} Spec has {} error(s)",
            "FAILED".red().bold(),
            validation.errors.len()
        );
        return Ok(ExitCode::from(EXIT_SPEC_ERROR));
    }

    let out_path = resolve_output_path(&spec, out);
    match generate_plot_to_file(&spec, &out_path) {
        Ok(outcome) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            println!(
                "  {} {} ({}x{}, {} samples, range [{:.4}, {:.4}])",
                "->".green(),
                out_path.display(),
                outcome.image.width,
                outcome.image.height,
                outcome.waveform.len(),
                outcome.waveform.min,
                outcome.waveform.max
            );
            println!("  {} {}", "hash:".dimmed(), &outcome.image.hash[..16]);
            println!(
                "\n{} Rendered {} ({}ms)",
                "SUCCESS".green().bold(),
                spec.plot_id,
                duration_ms
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!(
                "\n{} [{}] {}",
                "FAILED".red().bold(),
                e.code().red(),
                e
            );
            Ok(ExitCode::from(EXIT_GENERATION_ERROR))
        }
    }
}

fn run_json(spec_path: Option<&str>, preset: Option<&str>, out: Option<&str>) -> Result<ExitCode> {
    let start = Instant::now();

    let spec = match load_spec_or_preset(spec_path, preset) {
        Ok(loaded) => loaded.spec,
        Err(e) => {
            let output: CommandOutput<RenderResult> =
                CommandOutput::failure(vec![input_error_to_json(&e, spec_path)], vec![], None);
            reporting::print_json(&output)?;
            return Ok(ExitCode::from(EXIT_SPEC_ERROR));
        }
    };

    let spec_hash = canonical_spec_hash(&spec).unwrap_or_else(|_| "unknown".to_string());
    let validation = validate_plot_spec(&spec);
    let warnings: Vec<JsonWarning> = validation
        .warnings
        .iter()
        .map(validation_warning_to_json)
        .collect();

    if !validation.is_ok() {
        let errors = validation.errors.iter().map(validation_error_to_json).collect();
        let output: CommandOutput<RenderResult> =
            CommandOutput::failure(errors, warnings, Some(spec_hash));
        reporting::print_json(&output)?;
        return Ok(ExitCode::from(EXIT_SPEC_ERROR));
    }

    let out_path = resolve_output_path(&spec, out);
    let (output, code) = match generate_plot_to_file(&spec, &out_path) {
        Ok(outcome) => {
            let result = RenderResult {
                plot_id: spec.plot_id.clone(),
                waveform: spec.series.waveform.to_string(),
                harmonics: spec.series.harmonics,
                output_path: path_string(&out_path),
                png_hash: outcome.image.hash,
                width: outcome.image.width,
                height: outcome.image.height,
                samples: outcome.waveform.len(),
                min: outcome.waveform.min,
                max: outcome.waveform.max,
                duration_ms: start.elapsed().as_millis() as u64,
            };
            (
                CommandOutput::success(result, spec_hash, warnings),
                ExitCode::SUCCESS,
            )
        }
        Err(e) => (
            CommandOutput::failure(vec![backend_error_to_json(&e)], warnings, Some(spec_hash)),
            ExitCode::from(EXIT_GENERATION_ERROR),
        ),
    };

    reporting::print_json(&output)?;
    Ok(code)
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        let spec = PlotSpec::preset("sawtooth").unwrap();
        assert_eq!(resolve_output_path(&spec, None), PathBuf::from("sawtooth.png"));
        assert_eq!(
            resolve_output_path(&spec, Some("out/saw.png")),
            PathBuf::from("out/saw.png")
        );
    }
}

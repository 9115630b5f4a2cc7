//! Validate command implementation
//!
//! Loads a plot spec and reports validation errors and warnings without
//! rendering anything.

use anyhow::Result;
use colored::Colorize;
use fourierplot_spec::{canonical_spec_hash, validate_plot_spec};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{
    input_error_to_json, validation_error_to_json, validation_warning_to_json, CommandOutput,
    ValidateResult,
};
use super::reporting;
use crate::input::{load_spec, LoadResult};

/// Run the validate command
///
/// # Arguments
/// * `spec_path` - Path to the JSON plot spec
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(spec_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(spec_path)
    } else {
        run_human(spec_path)
    }
}

fn run_human(spec_path: &str) -> Result<ExitCode> {
    let start = Instant::now();
    println!("{} {}", "Validating:".cyan().bold(), spec_path);

    let LoadResult {
        spec,
        source_hash,
        ..
    } = match load_spec(Path::new(spec_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{}: {}", "error".red(), e);
            return Ok(ExitCode::from(1));
        }
    };
    println!("{} {}", "Source hash:".dimmed(), &source_hash[..16]);

    let result = validate_plot_spec(&spec);
    let duration_ms = start.elapsed().as_millis() as u64;
    reporting::print_validation_results(&result);

    if result.is_ok() {
        println!(
            "\n{} Spec is valid ({}ms)",
            "SUCCESS".green().bold(),
            duration_ms
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Spec has {} error(s) ({}ms)",
            "FAILED".red().bold(),
            result.errors.len(),
            duration_ms
        );
        Ok(ExitCode::from(1))
    }
}

fn run_json(spec_path: &str) -> Result<ExitCode> {
    let loaded = match load_spec(Path::new(spec_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            let output: CommandOutput<ValidateResult> =
                CommandOutput::failure(vec![input_error_to_json(&e, Some(spec_path))], vec![], None);
            reporting::print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
    };

    let spec = &loaded.spec;
    let spec_hash = canonical_spec_hash(spec).unwrap_or_else(|_| "unknown".to_string());
    let result = validate_plot_spec(spec);
    let warnings = result.warnings.iter().map(validation_warning_to_json).collect();

    let output = if result.is_ok() {
        let payload = ValidateResult {
            plot_id: spec.plot_id.clone(),
            waveform: spec.series.waveform.to_string(),
            source_kind: loaded.source_kind.to_string(),
        };
        CommandOutput::success(payload, spec_hash, warnings)
    } else {
        let errors = result.errors.iter().map(validation_error_to_json).collect();
        CommandOutput::failure(errors, warnings, Some(spec_hash))
    };

    reporting::print_json(&output)?;
    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

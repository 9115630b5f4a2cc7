//! Render-all command implementation
//!
//! Renders every plot spec found under a directory and writes a summary
//! report next to the outputs.

use anyhow::{Context, Result};
use colored::Colorize;
use fourierplot_spec::{canonical_spec_hash, validate_plot_spec, BackendError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use walkdir::WalkDir;

use crate::dispatch::generate_plot_to_file;
use crate::input::load_spec;

/// Default directory scanned for specs.
pub const DEFAULT_SPEC_DIR: &str = "./specs";
/// Default output root.
pub const DEFAULT_OUT_ROOT: &str = "./plots";
/// Summary file written under the output root.
pub const SUMMARY_FILE: &str = "render-summary.json";

/// Result of rendering a single spec.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecResult {
    /// Path to the spec file
    pub spec_path: String,
    /// Plot ID (absent when the file failed to load)
    pub plot_id: Option<String>,
    /// Whether rendering succeeded
    pub success: bool,
    /// Error code and message if failed
    pub error: Option<String>,
    /// BLAKE3 hash of the spec
    pub spec_hash: Option<String>,
    /// Written PNG path
    pub output_path: Option<String>,
    /// BLAKE3 hash of the PNG
    pub png_hash: Option<String>,
    /// Render time in milliseconds
    pub duration_ms: u64,
}

/// Summary report for a render-all run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSummary {
    pub total_specs: usize,
    pub successful: usize,
    pub failed: usize,
    pub runtime_seconds: f64,
    pub specs: Vec<SpecResult>,
}

/// Run the render-all command
///
/// # Arguments
/// * `spec_dir` - Directory searched recursively for `*.json` specs
/// * `out_root` - Output root; each PNG lands at the spec's relative directory
///
/// # Returns
/// Exit code: 0 if every spec rendered, 1 otherwise
pub fn run(spec_dir: Option<&str>, out_root: Option<&str>) -> Result<ExitCode> {
    let spec_dir = spec_dir.unwrap_or(DEFAULT_SPEC_DIR);
    let out_root = out_root.unwrap_or(DEFAULT_OUT_ROOT);

    println!("{} {}", "Spec directory:".blue().bold(), spec_dir);
    println!("{} {}", "Output directory:".blue().bold(), out_root);
    println!();

    let summary = render_directory(Path::new(spec_dir), Path::new(out_root))?;

    for result in &summary.specs {
        match (&result.error, &result.output_path) {
            (None, Some(output)) => println!("  {} {} -> {}", "ok".green(), result.spec_path, output),
            (Some(error), _) => println!("  {} {}: {}", "x".red(), result.spec_path, error),
            _ => {}
        }
    }

    println!();
    println!(
        "{} {} rendered, {} failed ({:.2}s)",
        "Summary:".cyan().bold(),
        summary.successful,
        summary.failed,
        summary.runtime_seconds
    );

    if summary.failed == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Renders every spec under `spec_dir` into `out_root` and writes
/// [`SUMMARY_FILE`] there.
pub fn render_directory(spec_dir: &Path, out_root: &Path) -> Result<RenderSummary> {
    let start = Instant::now();

    if !spec_dir.is_dir() {
        anyhow::bail!("Spec directory does not exist: {}", spec_dir.display());
    }
    fs::create_dir_all(out_root)
        .with_context(|| format!("Failed to create output directory: {}", out_root.display()))?;

    let mut claimed = HashSet::new();
    let specs: Vec<SpecResult> = collect_spec_files(spec_dir)
        .iter()
        .map(|path| render_one(path, spec_dir, out_root, &mut claimed))
        .collect();

    let successful = specs.iter().filter(|r| r.success).count();
    let summary = RenderSummary {
        total_specs: specs.len(),
        successful,
        failed: specs.len() - successful,
        runtime_seconds: start.elapsed().as_secs_f64(),
        specs,
    };

    let summary_path = out_root.join(SUMMARY_FILE);
    let json = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
    fs::write(&summary_path, json)
        .with_context(|| format!("Failed to write summary: {}", summary_path.display()))?;

    Ok(summary)
}

/// All `*.json` files under `dir` except earlier summaries, sorted.
fn collect_spec_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .filter(|path| !path.file_name().is_some_and(|name| name == SUMMARY_FILE))
        .collect();
    files.sort();
    files
}

/// `claimed` holds the output paths already taken by earlier specs; a spec
/// whose PNG would overwrite one of them fails instead.
fn render_one(
    path: &Path,
    spec_dir: &Path,
    out_root: &Path,
    claimed: &mut HashSet<PathBuf>,
) -> SpecResult {
    let start = Instant::now();
    let mut result = SpecResult {
        spec_path: path.display().to_string(),
        plot_id: None,
        success: false,
        error: None,
        spec_hash: None,
        output_path: None,
        png_hash: None,
        duration_ms: 0,
    };

    let spec = match load_spec(path) {
        Ok(loaded) => loaded.spec,
        Err(e) => {
            result.error = Some(e.to_string());
            return result;
        }
    };
    result.plot_id = Some(spec.plot_id.clone());
    result.spec_hash = canonical_spec_hash(&spec).ok();

    let validation = validate_plot_spec(&spec);
    if let Some(first) = validation.errors.first() {
        result.error = Some(format!(
            "{} ({} validation error(s))",
            first,
            validation.errors.len()
        ));
        return result;
    }

    // Mirror the spec's directory layout under the output root.
    let relative_dir = path
        .parent()
        .and_then(|parent| parent.strip_prefix(spec_dir).ok())
        .unwrap_or_else(|| Path::new(""));
    let out_path = out_root.join(relative_dir).join(spec.default_output_name());
    if !claimed.insert(out_path.clone()) {
        result.error = Some(format!(
            "output {} is already written by another spec with plot_id '{}'",
            out_path.display(),
            spec.plot_id
        ));
        result.duration_ms = start.elapsed().as_millis() as u64;
        return result;
    }

    match generate_plot_to_file(&spec, &out_path) {
        Ok(outcome) => {
            result.success = true;
            result.output_path = Some(out_path.display().to_string());
            result.png_hash = Some(outcome.image.hash);
        }
        Err(e) => result.error = Some(format!("[{}] {}", e.code(), e)),
    }
    result.duration_ms = start.elapsed().as_millis() as u64;
    result
}

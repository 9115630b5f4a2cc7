//! fourierplot CLI - Render truncated Fourier-series approximations
//!
//! This binary provides commands for validating plot specs, sampling the
//! partial sums they describe and rendering them as annotated PNG charts.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use fourierplot_cli::commands;

/// fourierplot - Fourier partial-sum plots for square and sawtooth waves
#[derive(Parser)]
#[command(name = "fourierplot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate, sample and render a plot spec to PNG
    Render {
        /// Path to a JSON plot spec
        #[arg(short, long, conflicts_with = "preset", required_unless_present = "preset")]
        spec: Option<String>,

        /// Built-in preset to render instead of a spec file (square, sawtooth)
        #[arg(short, long)]
        preset: Option<String>,

        /// Output PNG path (default: {plot_id}.png)
        #[arg(short, long)]
        out: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a plot spec and print its samples
    Sample {
        /// Path to a JSON plot spec
        #[arg(short, long, conflicts_with = "preset", required_unless_present = "preset")]
        spec: Option<String>,

        /// Built-in preset to sample instead of a spec file
        #[arg(short, long)]
        preset: Option<String>,

        /// Output format
        #[arg(long, default_value = "csv", value_parser = ["csv", "json"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a plot spec without rendering
    Validate {
        /// Path to the JSON plot spec
        #[arg(short, long)]
        spec: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List or show built-in presets
    Presets {
        #[command(subcommand)]
        command: PresetCommands,
    },

    /// Render every plot spec in a directory tree
    RenderAll {
        /// Directory containing spec files (default: ./specs)
        #[arg(short, long)]
        spec_dir: Option<String>,

        /// Output root directory (default: ./plots)
        #[arg(short, long)]
        out_root: Option<String>,
    },
}

#[derive(Subcommand)]
enum PresetCommands {
    /// List available presets
    List {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a preset as a JSON plot spec
    Show {
        /// Preset name
        name: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            spec,
            preset,
            out,
            json,
        } => commands::render::run(spec.as_deref(), preset.as_deref(), out.as_deref(), json),
        Commands::Sample {
            spec,
            preset,
            format,
            output,
        } => match format.parse::<commands::sample::SampleFormat>() {
            Ok(format) => {
                commands::sample::run(spec.as_deref(), preset.as_deref(), format, output.as_deref())
            }
            Err(e) => Err(anyhow::anyhow!(e)),
        },
        Commands::Validate { spec, json } => commands::validate::run(&spec, json),
        Commands::Presets { command } => match command {
            PresetCommands::List { json } => commands::presets::list(json),
            PresetCommands::Show { name } => commands::presets::show(&name),
        },
        Commands::RenderAll { spec_dir, out_root } => {
            commands::render_all::run(spec_dir.as_deref(), out_root.as_deref())
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

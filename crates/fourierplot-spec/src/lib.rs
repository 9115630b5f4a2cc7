//! fourierplot Plot Spec Library
//!
//! This crate provides types, presets, validation, and hashing for fourierplot
//! plot specs. A plot spec is a JSON document describing one truncated
//! Fourier-series approximation and the chart it should be drawn as.
//!
//! # Overview
//!
//! - **Series**: which waveform variant to sum, its period, harmonic count and time shift
//! - **Domain**: the sampled time range (`linspace` semantics)
//! - **Chart**: figure size, labels, legend, reference lines, grid and tick formatting
//!
//! # Example
//!
//! ```
//! use fourierplot_spec::{PlotSpec, WaveformKind};
//! use fourierplot_spec::validation::validate_plot_spec;
//! use fourierplot_spec::hash::canonical_spec_hash;
//!
//! let spec = PlotSpec::builder("square-wave-fine", WaveformKind::Square)
//!     .description("Square wave with 120 harmonics")
//!     .period(4.0)
//!     .harmonics(120)
//!     .domain(-8.0, 8.0, 2000)
//!     .build();
//!
//! let result = validate_plot_spec(&spec);
//! assert!(result.is_ok());
//!
//! let hash = canonical_spec_hash(&spec).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`budget`]: Resource limits on samples and harmonics
//! - [`error`]: Error and warning types for validation, plus the [`BackendError`] trait
//! - [`series`]: Waveform variant, series parameters and sample domain
//! - [`chart`]: Chart presentation parameters
//! - [`plot`]: Top-level plot spec and builder
//! - [`preset`]: Built-in specs reproducing the square and sawtooth demos
//! - [`validation`]: Spec validation functions
//! - [`hash`]: Canonical hashing

pub mod budget;
pub mod chart;
pub mod error;
pub mod hash;
pub mod plot;
pub mod preset;
pub mod series;
pub mod validation;

// Re-export commonly used types at the crate root
pub use budget::{BudgetProfile, SeriesBudget};
pub use chart::{ChartParams, TickFormat, TickParams};
pub use error::{
    BackendError, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use hash::canonical_spec_hash;
pub use plot::{PlotSpec, PlotSpecBuilder, SPEC_VERSION};
pub use preset::PRESET_NAMES;
pub use series::{SampleDomain, SeriesParams, WaveformKind};
pub use validation::{is_valid_plot_id, validate_plot_spec, validate_plot_spec_with_budget};

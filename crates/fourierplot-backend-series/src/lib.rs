//! fourierplot Series Backend
//!
//! Evaluates truncated Fourier series: given time samples `t`, a period `T`,
//! a set of harmonic indices and a per-harmonic term rule, it returns
//! `y[i] = sum over k of term(k, t[i], T)`, one output per input, in input order.
//!
//! # Overview
//!
//! - **Square wave** - odd harmonics, `4/(k*pi) * sin(2*pi*k*t/T)`
//! - **Sawtooth wave** - all harmonics, `(-1)^(k+1) * 2/(k*pi) * sin(2*pi*k*t/T)`
//! - **Custom rules** - any `Fn(u32, f64, f64) -> f64` closure shares the same evaluator
//!
//! # Determinism
//!
//! Each sample folds its harmonics in ascending index order. With the
//! `parallel` feature, samples are spread across the rayon pool; since no
//! sample depends on another, the output is bit-identical to the sequential path.
//!
//! # Example
//!
//! ```
//! use fourierplot_backend_series::{linspace, partial_sum, HarmonicSet, SquareTerm};
//!
//! let times = linspace(-8.0, 8.0, 1000).unwrap();
//! let amplitudes = partial_sum(&times, 4.0, &HarmonicSet::odd(60), &SquareTerm).unwrap();
//! assert_eq!(amplitudes.len(), times.len());
//! ```
//!
//! # Crate Structure
//!
//! - [`evaluate`] - The partial-sum evaluator and [`FourierSeries`]
//! - [`harmonics`] - Harmonic index sets
//! - [`term`] - Per-harmonic term rules
//! - [`domain`] - Time-domain sampling
//! - [`generate`] - Spec-driven sampling entry point

pub mod domain;
pub mod error;
pub mod evaluate;
pub mod generate;
pub mod harmonics;
pub mod term;

// Re-export main types at crate root
pub use domain::linspace;
pub use error::{SeriesError, SeriesResult};
pub use evaluate::{partial_sum, partial_sum_at, FourierSeries};
pub use generate::{sample_waveform, sample_waveform_with_budget, series_for, SampledWaveform};
pub use harmonics::HarmonicSet;
pub use term::{HarmonicTerm, SawtoothTerm, SquareTerm};

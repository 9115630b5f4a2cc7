//! fourierplot Chart Backend
//!
//! Renders a sampled waveform as an annotated line chart and encodes it as a
//! deterministic PNG. The same inputs always produce byte-identical files.
//!
//! # Layers
//!
//! Drawn back to front:
//!
//! 1. White background and dashed grid at every major tick
//! 2. Dashed reference levels and the dotted origin line
//! 3. The series polyline (non-finite samples break the line)
//! 4. Axes frame, tick marks and tick labels
//! 5. Title, axis labels and legend
//!
//! # Example
//!
//! ```
//! use fourierplot_backend_chart::render_chart;
//! use fourierplot_spec::ChartParams;
//!
//! let times: Vec<f64> = (0..100).map(|i| i as f64 / 10.0).collect();
//! let amplitudes: Vec<f64> = times.iter().map(|t| t.sin()).collect();
//! let chart = ChartParams::default().with_title("sine");
//!
//! let image = render_chart(&chart, &times, &amplitudes, Some("sin(t)")).unwrap();
//! assert_eq!(image.width, 1000);
//! assert_eq!(image.hash.len(), 64);
//! ```

pub mod axis;
pub mod canvas;
pub mod color;
pub mod error;
pub mod font;
pub mod png;
pub mod render;
pub mod stroke;

pub use axis::{format_tick, locate_ticks, resolve_range, Axis, Tick};
pub use canvas::{Canvas, Rect};
pub use color::Color;
pub use error::{ChartError, ChartResult};
pub use render::{render_chart, ChartImage};
pub use stroke::{LineStyle, Stroke};

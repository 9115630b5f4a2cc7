//! Chart presentation parameters.

use serde::{Deserialize, Serialize};

/// Placeholder in [`ChartParams::legend`] replaced by the harmonic count.
pub const HARMONICS_PLACEHOLDER: &str = "{harmonics}";

/// How tick values are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TickFormat {
    /// Plain decimal with as many fraction digits as the tick step needs.
    #[default]
    Decimal,
    /// Nearest integer multiple of pi: `0`, `π`, `-π`, `3π`.
    PiMultiples,
}

/// Major tick placement and formatting for one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TickParams {
    /// Distance between major ticks; ticks sit on integer multiples of it.
    pub step: f64,

    /// Label format.
    #[serde(default)]
    pub format: TickFormat,
}

impl TickParams {
    /// Decimal ticks every `step`.
    pub fn decimal(step: f64) -> Self {
        Self {
            step,
            format: TickFormat::Decimal,
        }
    }

    /// Ticks every `pi` labelled as multiples of pi.
    pub fn pi_multiples() -> Self {
        Self {
            step: std::f64::consts::PI,
            format: TickFormat::PiMultiples,
        }
    }
}

/// Parameters for the rendered chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartParams {
    /// Image width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Image height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Title drawn above the plot area.
    #[serde(default)]
    pub title: String,

    /// X axis label.
    #[serde(default = "default_x_label")]
    pub x_label: String,

    /// Y axis label.
    #[serde(default = "default_y_label")]
    pub y_label: String,

    /// Legend text for the series. `{harmonics}` expands to the harmonic count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<String>,

    /// Series line color in RGBA (0.0-1.0).
    #[serde(default = "default_line_color")]
    pub line_color: [f64; 4],

    /// Series line width in pixels.
    #[serde(default = "default_line_width")]
    pub line_width: u32,

    /// Y values marked with dashed horizontal reference lines.
    #[serde(default = "default_reference_levels")]
    pub reference_levels: Vec<f64>,

    /// Draw a dotted vertical line at x = 0.
    #[serde(default = "default_true")]
    pub origin_line: bool,

    /// Draw dashed gridlines at every major tick.
    #[serde(default = "default_true")]
    pub grid: bool,

    /// X axis ticks.
    #[serde(default = "default_x_ticks")]
    pub x_ticks: TickParams,

    /// Y axis ticks.
    #[serde(default = "default_y_ticks")]
    pub y_ticks: TickParams,

    /// Fixed x range `[min, max]`; autoscaled with 5% margins when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_range: Option<[f64; 2]>,

    /// Fixed y range `[min, max]`; autoscaled with 5% margins when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_range: Option<[f64; 2]>,
}

fn default_width() -> u32 {
    1000
}

fn default_height() -> u32 {
    500
}

fn default_x_label() -> String {
    "Time (t)".to_string()
}

fn default_y_label() -> String {
    "Amplitude x(t)".to_string()
}

fn default_line_color() -> [f64; 4] {
    [0.0, 0.0, 1.0, 1.0]
}

fn default_line_width() -> u32 {
    2
}

fn default_reference_levels() -> Vec<f64> {
    vec![1.0, -1.0]
}

fn default_true() -> bool {
    true
}

fn default_x_ticks() -> TickParams {
    TickParams::decimal(1.0)
}

fn default_y_ticks() -> TickParams {
    TickParams::decimal(0.5)
}

impl Default for ChartParams {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            title: String::new(),
            x_label: default_x_label(),
            y_label: default_y_label(),
            legend: None,
            line_color: default_line_color(),
            line_width: default_line_width(),
            reference_levels: default_reference_levels(),
            origin_line: true,
            grid: true,
            x_ticks: default_x_ticks(),
            y_ticks: default_y_ticks(),
            x_range: None,
            y_range: None,
        }
    }
}

impl ChartParams {
    /// Sets the image size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the axis labels.
    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    /// Sets the legend text.
    pub fn with_legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = Some(legend.into());
        self
    }

    /// Sets the series line color.
    pub fn with_line_color(mut self, rgba: [f64; 4]) -> Self {
        self.line_color = rgba;
        self
    }

    /// Sets the x axis ticks.
    pub fn with_x_ticks(mut self, ticks: TickParams) -> Self {
        self.x_ticks = ticks;
        self
    }

    /// Sets the y axis ticks.
    pub fn with_y_ticks(mut self, ticks: TickParams) -> Self {
        self.y_ticks = ticks;
        self
    }

    /// Legend text with the harmonic placeholder expanded.
    pub fn legend_text(&self, harmonics: i64) -> Option<String> {
        self.legend
            .as_ref()
            .map(|l| l.replace(HARMONICS_PLACEHOLDER, &harmonics.to_string()))
    }
}

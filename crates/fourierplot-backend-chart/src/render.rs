//! Chart composition.

use std::path::Path;

use fourierplot_spec::validation::{MAX_CHART_DIMENSION, MIN_CHART_DIMENSION};
use fourierplot_spec::ChartParams;

use crate::axis::Axis;
use crate::canvas::{Canvas, Rect};
use crate::color::Color;
use crate::error::{ChartError, ChartResult};
use crate::font::{self, TextStyle};
use crate::png::{encode_with_hash, write_png_file};
use crate::stroke::{draw_line, draw_polyline, Stroke};

const GRID_COLOR: Color = Color::gray(0.85);
const REFERENCE_COLOR: Color = Color::rgba(0.5, 0.5, 0.5, 0.7);
const FRAME_COLOR: Color = Color::black();
const TEXT_COLOR: Color = Color::black();
const LEGEND_FILL: Color = Color::rgba(1.0, 1.0, 1.0, 0.8);
const LEGEND_BORDER: Color = Color::gray(0.8);

/// Smallest plot area (inside the axes frame) in pixels.
const MIN_PLOT_SIZE: i64 = 16;

/// An encoded chart.
#[derive(Debug, Clone)]
pub struct ChartImage {
    /// PNG file contents.
    pub png_data: Vec<u8>,
    /// BLAKE3 hash of the PNG data.
    pub hash: String,
    pub width: u32,
    pub height: u32,
}

impl ChartImage {
    /// Writes the PNG to `path`.
    pub fn write_to(&self, path: &Path) -> ChartResult<()> {
        write_png_file(&self.png_data, path)
    }
}

/// Renders `amplitudes` against `times` and encodes the result as PNG.
///
/// # Arguments
/// * `chart` - Size, labels, ticks and styling
/// * `times` - X values, one per sample
/// * `amplitudes` - Y values, one per sample
/// * `legend` - Legend entry for the series; no legend box when `None` or empty
pub fn render_chart(
    chart: &ChartParams,
    times: &[f64],
    amplitudes: &[f64],
    legend: Option<&str>,
) -> ChartResult<ChartImage> {
    let canvas = draw_chart(chart, times, amplitudes, legend)?;
    let (png_data, hash) = encode_with_hash(&canvas)?;
    Ok(ChartImage {
        png_data,
        hash,
        width: canvas.width,
        height: canvas.height,
    })
}

/// Renders the chart into a canvas without encoding it.
pub fn draw_chart(
    chart: &ChartParams,
    times: &[f64],
    amplitudes: &[f64],
    legend: Option<&str>,
) -> ChartResult<Canvas> {
    let dims = MIN_CHART_DIMENSION..=MAX_CHART_DIMENSION;
    if !dims.contains(&chart.width) || !dims.contains(&chart.height) {
        return Err(invalid_dimensions(chart));
    }
    if times.len() != amplitudes.len() {
        return Err(ChartError::LengthMismatch {
            times: times.len(),
            amplitudes: amplitudes.len(),
        });
    }

    let x_axis = Axis::build("x", chart.x_range, times, &chart.x_ticks)?;
    let y_data: Vec<f64> = amplitudes
        .iter()
        .chain(chart.reference_levels.iter())
        .copied()
        .collect();
    let y_axis = Axis::build("y", chart.y_range, &y_data, &chart.y_ticks)?;

    let layout = Layout::compute(chart, &x_axis, &y_axis)?;
    let mut canvas = Canvas::new(chart.width, chart.height, Color::white());
    let plot = Plotter {
        x_axis: &x_axis,
        y_axis: &y_axis,
        area: layout.plot,
    };

    canvas.set_clip(layout.plot);
    if chart.grid {
        plot.draw_grid(&mut canvas);
    }
    for &level in &chart.reference_levels {
        let y = plot.py(level);
        let stroke = Stroke::dashed(REFERENCE_COLOR, 1.0);
        draw_line(&mut canvas, (plot.left(), y), (plot.right(), y), &stroke);
    }
    if chart.origin_line && x_axis.min <= 0.0 && 0.0 <= x_axis.max {
        let x = plot.px(0.0);
        let stroke = Stroke::dotted(FRAME_COLOR, 1.0);
        draw_line(&mut canvas, (x, plot.top()), (x, plot.bottom()), &stroke);
    }
    plot.draw_series(&mut canvas, chart, times, amplitudes);
    canvas.reset_clip();

    plot.draw_frame_and_ticks(&mut canvas, &layout);
    draw_annotations(&mut canvas, chart, &layout);
    if let Some(text) = legend.filter(|text| !text.is_empty()) {
        draw_legend(&mut canvas, chart, &layout, text);
    }

    Ok(canvas)
}

fn invalid_dimensions(chart: &ChartParams) -> ChartError {
    ChartError::InvalidDimensions {
        width: chart.width,
        height: chart.height,
    }
}

/// Pixel positions of every chart element.
struct Layout {
    plot: Rect,
    pad: i64,
    tick_len: i64,
    text: TextStyle,
    title: TextStyle,
}

impl Layout {
    fn compute(chart: &ChartParams, x_axis: &Axis, y_axis: &Axis) -> ChartResult<Self> {
        let scale = if chart.width >= 600 && chart.height >= 300 {
            2
        } else {
            1
        };
        let text = TextStyle::new(TEXT_COLOR, scale);
        let title = TextStyle::new(TEXT_COLOR, scale + 1).bold();
        let pad = 6 * scale;
        let tick_len = 3 * scale;

        let y_label_width = y_axis
            .ticks
            .iter()
            .map(|tick| font::text_width(&tick.label, &text))
            .max()
            .unwrap_or(0);
        let last_x_label = x_axis
            .ticks
            .last()
            .map(|tick| font::text_width(&tick.label, &text))
            .unwrap_or(0);

        let top = if chart.title.is_empty() {
            pad * 2
        } else {
            pad * 2 + title.line_height()
        };
        let y_title_width = if chart.y_label.is_empty() {
            0
        } else {
            text.line_height() + pad
        };
        let x_title_height = if chart.x_label.is_empty() {
            0
        } else {
            text.line_height() + pad
        };
        let left = pad + y_title_width + y_label_width + tick_len + pad;
        let bottom = tick_len + pad + text.line_height() + x_title_height + pad;
        let right = (pad * 2).max(last_x_label / 2 + pad);

        let plot = Rect::new(
            left,
            top,
            chart.width as i64 - right,
            chart.height as i64 - bottom,
        );
        if plot.width() < MIN_PLOT_SIZE || plot.height() < MIN_PLOT_SIZE {
            return Err(invalid_dimensions(chart));
        }

        Ok(Self {
            plot,
            pad,
            tick_len,
            text,
            title,
        })
    }
}

/// Maps data coordinates into the plot area.
struct Plotter<'a> {
    x_axis: &'a Axis,
    y_axis: &'a Axis,
    area: Rect,
}

impl Plotter<'_> {
    fn left(&self) -> f64 {
        self.area.x0 as f64
    }

    fn right(&self) -> f64 {
        self.area.x1 as f64
    }

    fn top(&self) -> f64 {
        self.area.y0 as f64
    }

    fn bottom(&self) -> f64 {
        self.area.y1 as f64
    }

    fn px(&self, x: f64) -> f64 {
        self.x_axis.to_pixel(x, self.left(), self.right())
    }

    fn py(&self, y: f64) -> f64 {
        self.y_axis.to_pixel(y, self.bottom(), self.top())
    }

    fn draw_grid(&self, canvas: &mut Canvas) {
        let stroke = Stroke::dashed(GRID_COLOR, 1.0);
        for tick in &self.x_axis.ticks {
            let x = self.px(tick.value);
            draw_line(canvas, (x, self.top()), (x, self.bottom()), &stroke);
        }
        for tick in &self.y_axis.ticks {
            let y = self.py(tick.value);
            draw_line(canvas, (self.left(), y), (self.right(), y), &stroke);
        }
    }

    /// Draws the series; a non-finite sample ends one run and starts the next.
    fn draw_series(&self, canvas: &mut Canvas, chart: &ChartParams, times: &[f64], amplitudes: &[f64]) {
        let stroke = Stroke::solid(
            Color::from_array(chart.line_color),
            chart.line_width as f64,
        );
        let mut run: Vec<(f64, f64)> = Vec::with_capacity(times.len());
        for (&t, &y) in times.iter().zip(amplitudes) {
            if t.is_finite() && y.is_finite() {
                run.push((self.px(t), self.py(y)));
            } else if !run.is_empty() {
                draw_polyline(canvas, &run, &stroke);
                run.clear();
            }
        }
        if !run.is_empty() {
            draw_polyline(canvas, &run, &stroke);
        }
    }

    fn draw_frame_and_ticks(&self, canvas: &mut Canvas, layout: &Layout) {
        let frame = Rect::new(self.area.x0 - 1, self.area.y0 - 1, self.area.x1 + 1, self.area.y1 + 1);
        canvas.stroke_rect(frame, 1, FRAME_COLOR);

        let text = &layout.text;
        for tick in &self.x_axis.ticks {
            let x = self.px(tick.value).floor() as i64;
            canvas.fill_rect(Rect::new(x, frame.y1, x + 1, frame.y1 + layout.tick_len), FRAME_COLOR);
            let label_y = frame.y1 + layout.tick_len + layout.pad / 2;
            font::draw_text_centered(canvas, x, label_y, &tick.label, text);
        }
        for tick in &self.y_axis.ticks {
            let y = self.py(tick.value).floor() as i64;
            canvas.fill_rect(Rect::new(frame.x0 - layout.tick_len, y, frame.x0, y + 1), FRAME_COLOR);
            let right = frame.x0 - layout.tick_len - layout.pad / 2;
            font::draw_text_right(canvas, right, y - text.line_height() / 2, &tick.label, text);
        }
    }
}

fn draw_annotations(canvas: &mut Canvas, chart: &ChartParams, layout: &Layout) {
    let plot = layout.plot;
    let center_x = (plot.x0 + plot.x1) / 2;

    if !chart.title.is_empty() {
        font::draw_text_centered(canvas, center_x, layout.pad, &chart.title, &layout.title);
    }
    if !chart.x_label.is_empty() {
        let y = canvas.height as i64 - layout.pad - layout.text.line_height();
        font::draw_text_centered(canvas, center_x, y, &chart.x_label, &layout.text);
    }
    if !chart.y_label.is_empty() {
        let center_y = (plot.y0 + plot.y1) / 2;
        font::draw_text_vertical(canvas, layout.pad, center_y, &chart.y_label, &layout.text);
    }
}

/// Legend box in the upper-right corner of the plot area: a line sample
/// followed by the label.
fn draw_legend(canvas: &mut Canvas, chart: &ChartParams, layout: &Layout, text: &str) {
    let style = &layout.text;
    let pad = layout.pad;
    let sample_len = 8 * style.scale;
    let box_w = pad + sample_len + pad + font::text_width(text, style) + pad;
    let box_h = pad + style.line_height() + pad;

    let x1 = layout.plot.x1 - pad;
    let y0 = layout.plot.y0 + pad;
    let legend_box = Rect::new(x1 - box_w, y0, x1, y0 + box_h);
    canvas.fill_rect(legend_box, LEGEND_FILL);
    canvas.stroke_rect(legend_box, 1, LEGEND_BORDER);

    let line_y = (legend_box.y0 + box_h / 2) as f64;
    let sample_x0 = (legend_box.x0 + pad) as f64;
    let stroke = Stroke::solid(Color::from_array(chart.line_color), chart.line_width as f64);
    draw_line(canvas, (sample_x0, line_y), (sample_x0 + sample_len as f64, line_y), &stroke);

    let text_x = legend_box.x0 + pad + sample_len + pad;
    font::draw_text(canvas, text_x, legend_box.y0 + pad, text, style);
}

//! Line rasterization with width and dash patterns.
//!
//! A stroke is first rasterized into a coverage mask and then composited in
//! one pass, so overlapping segments of a translucent line do not darken.

use crate::canvas::{Canvas, Rect};
use crate::color::Color;

/// Dash style of a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    /// 6 px on, 4 px off (scaled by stroke width).
    Dashed,
    /// 1 px on, 3 px off (scaled by stroke width).
    Dotted,
}

impl LineStyle {
    /// `(on, off)` lengths in pixels for a 1 px stroke.
    fn pattern(&self) -> Option<(f64, f64)> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some((6.0, 4.0)),
            LineStyle::Dotted => Some((1.0, 3.0)),
        }
    }
}

/// Stroke appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    /// Width in pixels (rounded, at least 1).
    pub width: f64,
    pub style: LineStyle,
}

impl Stroke {
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            style: LineStyle::Solid,
        }
    }

    pub fn dashed(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            style: LineStyle::Dashed,
        }
    }

    pub fn dotted(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            style: LineStyle::Dotted,
        }
    }

    fn pixel_width(&self) -> i64 {
        (self.width.round() as i64).max(1)
    }

    fn is_on(&self, distance: f64) -> bool {
        match self.style.pattern() {
            None => true,
            Some((on, off)) => {
                let scale = self.pixel_width() as f64;
                let (on, off) = (on * scale, off * scale);
                distance.rem_euclid(on + off) < on
            }
        }
    }
}

/// Pixels touched by one stroke, restricted to a rectangle.
///
/// Pixel `(x, y)` covers the continuous square `[x, x+1) x [y, y+1)`.
struct Coverage {
    area: Rect,
    hits: Vec<bool>,
}

impl Coverage {
    fn new(area: Rect) -> Self {
        let len = (area.width() * area.height()) as usize;
        Self {
            area,
            hits: vec![false; len],
        }
    }

    fn stamp(&mut self, cx: f64, cy: f64, width: i64) {
        let half = (width - 1) as f64 / 2.0;
        let x0 = (cx - half).floor() as i64;
        let y0 = (cy - half).floor() as i64;
        for y in y0..y0 + width {
            for x in x0..x0 + width {
                if self.area.contains(x, y) {
                    let idx = (y - self.area.y0) * self.area.width() + (x - self.area.x0);
                    self.hits[idx as usize] = true;
                }
            }
        }
    }

    fn composite(&self, canvas: &mut Canvas, color: Color) {
        let w = self.area.width();
        for (idx, _) in self.hits.iter().enumerate().filter(|(_, hit)| **hit) {
            let idx = idx as i64;
            canvas.blend(self.area.x0 + idx % w, self.area.y0 + idx / w, color);
        }
    }
}

/// Draws a straight line from `a` to `b`.
pub fn draw_line(canvas: &mut Canvas, a: (f64, f64), b: (f64, f64), stroke: &Stroke) {
    draw_polyline(canvas, &[a, b], stroke);
}

/// Draws connected segments through `points`. The dash phase carries over
/// from one segment to the next.
pub fn draw_polyline(canvas: &mut Canvas, points: &[(f64, f64)], stroke: &Stroke) {
    if points.is_empty() {
        return;
    }
    let width = stroke.pixel_width();
    let area = canvas.clip();
    if area.width() == 0 || area.height() == 0 {
        return;
    }
    let mut coverage = Coverage::new(area);

    // Segments are clipped to the area grown by the stroke width.
    let pad = width as f64;
    let bounds = (
        area.x0 as f64 - pad,
        area.y0 as f64 - pad,
        area.x1 as f64 + pad,
        area.y1 as f64 + pad,
    );

    if points.len() == 1 {
        let (x, y) = points[0];
        coverage.stamp(x, y, width);
    }

    let mut phase = 0.0;
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let length = ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt();
        if let Some((t0, t1)) = clip_segment(a, b, bounds) {
            let steps = ((length * (t1 - t0)) / 0.5).ceil().max(1.0) as usize;
            for i in 0..=steps {
                let t = t0 + (t1 - t0) * i as f64 / steps as f64;
                if stroke.is_on(phase + length * t) {
                    coverage.stamp(a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t, width);
                }
            }
        }
        phase += length;
    }

    coverage.composite(canvas, stroke.color);
}

/// Liang-Barsky clip of segment `a -> b` to `(xmin, ymin, xmax, ymax)`.
/// Returns the visible parameter range.
fn clip_segment(a: (f64, f64), b: (f64, f64), bounds: (f64, f64, f64, f64)) -> Option<(f64, f64)> {
    let (xmin, ymin, xmax, ymax) = bounds;
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    for (p, q) in [
        (-dx, a.0 - xmin),
        (dx, xmax - a.0),
        (-dy, a.1 - ymin),
        (dy, ymax - a.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
        }
    }

    (t0 <= t1).then_some((t0, t1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_black(canvas: &Canvas, x: i64, y: i64) -> bool {
        canvas.get(x, y) == Some(Color::black())
    }

    #[test]
    fn test_solid_horizontal_line() {
        let mut canvas = Canvas::new(20, 5, Color::white());
        draw_line(&mut canvas, (0.0, 2.0), (19.0, 2.0), &Stroke::solid(Color::black(), 1.0));
        assert!((0..20).all(|x| is_black(&canvas, x, 2)));
        assert!(!is_black(&canvas, 5, 1));
        assert!(!is_black(&canvas, 5, 3));
    }

    #[test]
    fn test_width_two_covers_two_rows() {
        let mut canvas = Canvas::new(10, 6, Color::white());
        draw_line(&mut canvas, (0.0, 2.5), (9.0, 2.5), &Stroke::solid(Color::black(), 2.0));
        let rows: Vec<i64> = (0..6).filter(|&y| is_black(&canvas, 4, y)).collect();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_dashed_line_has_gaps() {
        let mut canvas = Canvas::new(30, 3, Color::white());
        draw_line(&mut canvas, (0.0, 1.0), (29.0, 1.0), &Stroke::dashed(Color::black(), 1.0));
        assert!(is_black(&canvas, 0, 1));
        assert!(is_black(&canvas, 5, 1));
        assert!(!is_black(&canvas, 7, 1));
        assert!(is_black(&canvas, 10, 1));
    }

    #[test]
    fn test_dotted_line_is_sparse() {
        let mut canvas = Canvas::new(1, 40, Color::white());
        draw_line(&mut canvas, (0.0, 0.0), (0.0, 39.0), &Stroke::dotted(Color::black(), 1.0));
        let on = (0..40).filter(|&y| is_black(&canvas, 0, y)).count();
        assert_eq!(on, 10);
    }

    #[test]
    fn test_translucent_polyline_blends_once() {
        let mut canvas = Canvas::new(10, 10, Color::white());
        let stroke = Stroke::solid(Color::black().with_alpha(0.5), 3.0);
        draw_polyline(&mut canvas, &[(1.0, 5.0), (5.0, 5.0), (8.0, 5.0)], &stroke);
        assert_eq!(canvas.get(5, 5).map(|c| c.to_rgba8()), Some([128, 128, 128, 255]));
    }

    #[test]
    fn test_far_segment_is_clipped() {
        let mut canvas = Canvas::new(10, 10, Color::white());
        draw_line(&mut canvas, (-1e9, 5.0), (1e9, 5.0), &Stroke::solid(Color::black(), 1.0));
        assert!((0..10).all(|x| is_black(&canvas, x, 5)));
    }

    #[test]
    fn test_clip_segment_outside() {
        assert_eq!(clip_segment((-5.0, -5.0), (-1.0, -1.0), (0.0, 0.0, 10.0, 10.0)), None);
        let (t0, t1) = clip_segment((-10.0, 5.0), (20.0, 5.0), (0.0, 0.0, 10.0, 10.0)).unwrap();
        assert!((t0 - 1.0 / 3.0).abs() < 1e-12);
        assert!((t1 - 2.0 / 3.0).abs() < 1e-12);
    }
}

//! RGBA pixel canvas with clipping.

use crate::color::Color;

/// Axis-aligned pixel rectangle; `x1`/`y1` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl Rect {
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> i64 {
        (self.x1 - self.x0).max(0)
    }

    pub fn height(&self) -> i64 {
        (self.y1 - self.y0).max(0)
    }

    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    /// Overlap of two rectangles (possibly empty).
    pub fn intersect(&self, other: &Rect) -> Rect {
        Rect {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        }
    }
}

/// Row-major RGBA image. Drawing outside the clip rectangle is ignored.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    data: Vec<Color>,
    clip: Rect,
}

impl Canvas {
    /// Create a canvas filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        Self {
            width,
            height,
            data: vec![fill; width as usize * height as usize],
            clip: Rect::new(0, 0, width as i64, height as i64),
        }
    }

    /// The full canvas area.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i64, self.height as i64)
    }

    /// Current clip rectangle.
    pub fn clip(&self) -> Rect {
        self.clip
    }

    /// Restrict drawing to `rect` (intersected with the canvas bounds).
    pub fn set_clip(&mut self, rect: Rect) {
        self.clip = rect.intersect(&self.bounds());
    }

    /// Remove any clip restriction.
    pub fn reset_clip(&mut self) {
        self.clip = self.bounds();
    }

    /// Pixel at the given coordinates, or `None` outside the canvas.
    pub fn get(&self, x: i64, y: i64) -> Option<Color> {
        if self.bounds().contains(x, y) {
            Some(self.data[(y as usize) * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Composites `color` over the pixel at `(x, y)` when inside the clip.
    #[inline]
    pub fn blend(&mut self, x: i64, y: i64, color: Color) {
        if !self.clip.contains(x, y) {
            return;
        }
        let idx = (y as usize) * self.width as usize + x as usize;
        self.data[idx] = color.over(&self.data[idx]);
    }

    /// Composites `color` over every pixel of `rect`.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let area = rect.intersect(&self.clip);
        for y in area.y0..area.y1 {
            for x in area.x0..area.x1 {
                self.blend(x, y, color);
            }
        }
    }

    /// Draws a rectangle outline `thickness` pixels wide, inside `rect`.
    pub fn stroke_rect(&mut self, rect: Rect, thickness: i64, color: Color) {
        let t = thickness.max(1);
        self.fill_rect(Rect::new(rect.x0, rect.y0, rect.x1, rect.y0 + t), color);
        self.fill_rect(Rect::new(rect.x0, rect.y1 - t, rect.x1, rect.y1), color);
        self.fill_rect(Rect::new(rect.x0, rect.y0 + t, rect.x0 + t, rect.y1 - t), color);
        self.fill_rect(Rect::new(rect.x1 - t, rect.y0 + t, rect.x1, rect.y1 - t), color);
    }

    /// Convert to 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.data.iter().flat_map(|c| c.to_rgba8()).collect()
    }
}

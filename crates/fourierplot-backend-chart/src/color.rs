//! RGBA colors and alpha compositing.

/// RGBA color with f64 components (0.0 to 1.0 range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Create a new opaque color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a new color with alpha.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque gray.
    pub const fn gray(value: f64) -> Self {
        Self::rgb(value, value, value)
    }

    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Create from an `[r, g, b, a]` array as stored in chart params.
    pub fn from_array(rgba: [f64; 4]) -> Self {
        Self::rgba(rgba[0], rgba[1], rgba[2], rgba[3]).clamp()
    }

    /// Returns the same color with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Clamp all components to [0.0, 1.0].
    pub fn clamp(&self) -> Color {
        Color {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Composites `self` over `dst` (source-over, non-premultiplied).
    pub fn over(&self, dst: &Color) -> Color {
        let src = self.clamp();
        let out_a = src.a + dst.a * (1.0 - src.a);
        if out_a <= 0.0 {
            return Color::rgba(0.0, 0.0, 0.0, 0.0);
        }
        let mix = |s: f64, d: f64| (s * src.a + d * dst.a * (1.0 - src.a)) / out_a;
        Color {
            r: mix(src.r, dst.r),
            g: mix(src.g, dst.g),
            b: mix(src.b, dst.b),
            a: out_a,
        }
    }

    /// Convert to 8-bit RGBA.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let c = self.clamp();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
            (c.a * 255.0).round() as u8,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rgba8() {
        assert_eq!(Color::white().to_rgba8(), [255, 255, 255, 255]);
        assert_eq!(Color::rgba(0.0, 0.0, 1.0, 0.5).to_rgba8(), [0, 0, 255, 128]);
        assert_eq!(Color::rgb(2.0, -1.0, 0.5).to_rgba8(), [255, 0, 128, 255]);
    }

    #[test]
    fn test_opaque_over_replaces() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        assert_eq!(red.over(&Color::white()), red);
    }

    #[test]
    fn test_half_alpha_over_white() {
        let blended = Color::black().with_alpha(0.5).over(&Color::white());
        assert_eq!(blended.to_rgba8(), [128, 128, 128, 255]);
    }

    #[test]
    fn test_transparent_over_transparent() {
        let clear = Color::rgba(0.0, 0.0, 0.0, 0.0);
        assert_eq!(clear.over(&clear).a, 0.0);
    }
}

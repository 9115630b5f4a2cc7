//! 5x7 bitmap text.
//!
//! Covers printable ASCII from space through `_` plus `π`. Lowercase letters
//! are drawn with their uppercase glyphs and Latin-1 accented letters with
//! their base letter; anything else falls back to `?`.
//! Each glyph row is a 5-bit mask with bit 4 as the leftmost column.

use crate::canvas::Canvas;
use crate::color::Color;

/// Glyph cell width in font pixels.
pub const GLYPH_WIDTH: i64 = 5;
/// Glyph cell height in font pixels.
pub const GLYPH_HEIGHT: i64 = 7;
/// Horizontal advance per character in font pixels.
pub const ADVANCE: i64 = GLYPH_WIDTH + 1;

const FIRST_CHAR: u32 = 32;

const GLYPHS: [[u8; 7]; 64] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // space
    [0x04, 0x04, 0x04, 0x04, 0x00, 0x04, 0x00], // !
    [0x0A, 0x0A, 0x00, 0x00, 0x00, 0x00, 0x00], // "
    [0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x00, 0x00], // #
    [0x04, 0x0E, 0x14, 0x0E, 0x05, 0x0E, 0x04], // $
    [0x19, 0x1A, 0x04, 0x0B, 0x13, 0x00, 0x00], // %
    [0x0C, 0x12, 0x0C, 0x12, 0x13, 0x0D, 0x00], // &
    [0x04, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00], // '
    [0x04, 0x08, 0x08, 0x08, 0x08, 0x04, 0x00], // (
    [0x04, 0x02, 0x02, 0x02, 0x02, 0x04, 0x00], // )
    [0x00, 0x15, 0x0E, 0x15, 0x00, 0x00, 0x00], // *
    [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00], // +
    [0x00, 0x00, 0x00, 0x00, 0x04, 0x04, 0x08], // ,
    [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00], // -
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00], // .
    [0x01, 0x02, 0x04, 0x08, 0x10, 0x00, 0x00], // /
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // 0
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // 1
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // 2
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // 3
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // 4
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // 5
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // 6
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 7
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // 8
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // 9
    [0x00, 0x04, 0x00, 0x00, 0x04, 0x00, 0x00], // :
    [0x00, 0x04, 0x00, 0x00, 0x04, 0x04, 0x08], // ;
    [0x02, 0x04, 0x08, 0x10, 0x08, 0x04, 0x02], // <
    [0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00], // =
    [0x08, 0x04, 0x02, 0x01, 0x02, 0x04, 0x08], // >
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04], // ?
    [0x0E, 0x11, 0x17, 0x15, 0x17, 0x10, 0x0E], // @
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x11, 0x11, 0x11, 0x11], // M
    [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x1B, 0x11], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
    [0x0E, 0x08, 0x08, 0x08, 0x08, 0x08, 0x0E], // [
    [0x10, 0x08, 0x04, 0x02, 0x01, 0x00, 0x00], // \
    [0x0E, 0x02, 0x02, 0x02, 0x02, 0x02, 0x0E], // ]
    [0x04, 0x0A, 0x11, 0x00, 0x00, 0x00, 0x00], // ^
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F], // _
];

const PI_GLYPH: [u8; 7] = [0x00, 0x1F, 0x0A, 0x0A, 0x0A, 0x0A, 0x00];

/// Text appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    /// Integer magnification; each font pixel becomes `scale x scale`.
    pub scale: i64,
    /// Draw twice, one pixel apart, for a heavier weight.
    pub bold: bool,
}

impl TextStyle {
    pub fn new(color: Color, scale: i64) -> Self {
        Self {
            color,
            scale: scale.max(1),
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Height of a line of text in pixels.
    pub fn line_height(&self) -> i64 {
        GLYPH_HEIGHT * self.scale
    }
}

/// Returns the glyph rows for a character.
pub fn glyph(ch: char) -> &'static [u8; 7] {
    if ch == 'π' {
        return &PI_GLYPH;
    }
    let code = strip_accent(ch).to_ascii_uppercase() as u32;
    match code.checked_sub(FIRST_CHAR) {
        Some(idx) if (idx as usize) < GLYPHS.len() => &GLYPHS[idx as usize],
        _ => &GLYPHS[('?' as u32 - FIRST_CHAR) as usize],
    }
}

/// Base letter of a Latin-1 accented letter; other characters pass through.
fn strip_accent(ch: char) -> char {
    match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'ç' | 'Ç' => 'C',
        'ñ' | 'Ñ' => 'N',
        _ => ch,
    }
}

/// Width of `text` in pixels, not counting trailing spacing.
pub fn text_width(text: &str, style: &TextStyle) -> i64 {
    let chars = text.chars().count() as i64;
    if chars == 0 {
        return 0;
    }
    let bold_extra = if style.bold { 1 } else { 0 };
    (chars * ADVANCE - 1) * style.scale + bold_extra
}

/// Draws `text` with its top-left corner at `(x, y)`.
pub fn draw_text(canvas: &mut Canvas, x: i64, y: i64, text: &str, style: &TextStyle) {
    draw_glyphs(canvas, text, style, |gx, gy| (x + gx, y + gy));
    if style.bold {
        draw_glyphs(canvas, text, style, |gx, gy| (x + gx + 1, y + gy));
    }
}

/// Draws `text` horizontally centered on `cx`.
pub fn draw_text_centered(canvas: &mut Canvas, cx: i64, y: i64, text: &str, style: &TextStyle) {
    let x = cx - text_width(text, style) / 2;
    draw_text(canvas, x, y, text, style);
}

/// Draws `text` right-aligned so it ends at `right`.
pub fn draw_text_right(canvas: &mut Canvas, right: i64, y: i64, text: &str, style: &TextStyle) {
    draw_text(canvas, right - text_width(text, style), y, text, style);
}

/// Draws `text` rotated 90 degrees counter-clockwise, reading bottom to top,
/// centered vertically on `cy` with its left edge at `x`.
pub fn draw_text_vertical(canvas: &mut Canvas, x: i64, cy: i64, text: &str, style: &TextStyle) {
    let bottom = cy + text_width(text, style) / 2;
    // Horizontal (gx, gy) maps to (gy, -gx) after rotation.
    draw_glyphs(canvas, text, style, |gx, gy| (x + gy, bottom - gx));
    if style.bold {
        draw_glyphs(canvas, text, style, |gx, gy| (x + gy, bottom - gx - 1));
    }
}

fn draw_glyphs<F>(canvas: &mut Canvas, text: &str, style: &TextStyle, place: F)
where
    F: Fn(i64, i64) -> (i64, i64),
{
    let scale = style.scale;
    for (i, ch) in text.chars().enumerate() {
        let origin = i as i64 * ADVANCE * scale;
        for (row, bits) in glyph(ch).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                for sy in 0..scale {
                    for sx in 0..scale {
                        let (px, py) = place(origin + col * scale + sx, row as i64 * scale + sy);
                        canvas.blend(px, py, style.color);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dark_pixels(canvas: &Canvas) -> usize {
        let (w, h) = (canvas.width as i64, canvas.height as i64);
        (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.get(x, y) == Some(Color::black()))
            .count()
    }

    #[test]
    fn test_lowercase_folds_to_uppercase() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('t'), glyph('T'));
    }

    #[test]
    fn test_unknown_falls_back_to_question_mark() {
        assert_eq!(glyph('~'), glyph('?'));
        assert_eq!(glyph('€'), glyph('?'));
        assert_ne!(glyph('π'), glyph('?'));
    }

    #[test]
    fn test_accented_letters_use_base_glyph() {
        assert_eq!(glyph('ç'), glyph('C'));
        assert_eq!(glyph('ã'), glyph('A'));
        assert_eq!(glyph('Ô'), glyph('O'));
        assert_eq!(glyph('é'), glyph('E'));
        assert_eq!(text_width("Série", &TextStyle::new(Color::black(), 1)), 29);
    }

    #[test]
    fn test_text_width() {
        let style = TextStyle::new(Color::black(), 2);
        assert_eq!(text_width("", &style), 0);
        assert_eq!(text_width("A", &style), 10);
        assert_eq!(text_width("-8", &style), 22);
        assert_eq!(text_width("-8", &style.bold()), 23);
    }

    #[test]
    fn test_space_draws_nothing() {
        let mut canvas = Canvas::new(20, 10, Color::white());
        draw_text(&mut canvas, 0, 0, "   ", &TextStyle::new(Color::black(), 1));
        assert_eq!(dark_pixels(&canvas), 0);
    }

    #[test]
    fn test_scale_multiplies_pixels() {
        let mut small = Canvas::new(20, 20, Color::white());
        let mut large = Canvas::new(20, 20, Color::white());
        draw_text(&mut small, 0, 0, "1", &TextStyle::new(Color::black(), 1));
        draw_text(&mut large, 0, 0, "1", &TextStyle::new(Color::black(), 2));
        assert_eq!(dark_pixels(&large), dark_pixels(&small) * 4);
    }

    #[test]
    fn test_vertical_text_is_rotated() {
        let style = TextStyle::new(Color::black(), 1);
        let mut canvas = Canvas::new(10, 20, Color::white());
        // "_" is a full bottom row; rotated it becomes a full right column.
        draw_text_vertical(&mut canvas, 0, 10, "_", &style);
        let column: Vec<i64> = (0..20)
            .filter(|&y| canvas.get(6, y) == Some(Color::black()))
            .collect();
        assert_eq!(column.len(), 5);
        assert_eq!(dark_pixels(&canvas), 5);
    }
}

//! Text preview of a canvas, one glyph per pixel.

use crate::types::Palette;

use super::Canvas;

/// Render the exported area as lines of palette glyphs.
///
/// Glyphs: `r` red, `g` green, `b` blue, `y` yellow, `o` orange, `p` purple,
/// `n` brown, `k` black, `.` white.
pub fn preview(canvas: &Canvas) -> String {
    let mut out = String::with_capacity((canvas.width() as usize + 1) * canvas.height() as usize);
    for row in canvas.rows() {
        out.extend(row.iter().map(|&c| Palette::glyph(c).unwrap_or('?')));
        out.push('\n');
    }
    out
}

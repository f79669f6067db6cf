//! Bitmap-text drawing for column titles.
//!
//! Glyphs come from the `font8x8` tables, so no font files ship with the
//! crate. Text is drawn at an integer scale and clipped to a caller-supplied
//! rectangle; characters outside the basic table fall back to `?`.

use crate::layout::CellRect;
use font8x8::legacy::BASIC_LEGACY;
use image::{Rgba, RgbaImage};

/// Unscaled glyph edge length in pixels.
pub const GLYPH_SIZE: u32 = 8;

const FALLBACK: usize = b'?' as usize;

/// Pixel width of `text` at the given scale.
pub fn measure(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * GLYPH_SIZE * scale
}

/// Draws `text` with its top-left corner at `(x, y)`.
///
/// Coordinates may be negative or extend past the canvas; pixels outside
/// `clip` or the canvas are dropped.
pub fn draw(
    canvas: &mut RgbaImage,
    text: &str,
    x: i64,
    y: i64,
    scale: u32,
    color: Rgba<u8>,
    clip: &CellRect,
) {
    let mut pen_x = x;
    for ch in text.chars() {
        draw_glyph(canvas, glyph_for(ch), pen_x, y, scale, color, clip);
        pen_x += i64::from(GLYPH_SIZE * scale);
    }
}

fn glyph_for(ch: char) -> &'static [u8; 8] {
    let idx = ch as usize;
    if idx < BASIC_LEGACY.len() {
        &BASIC_LEGACY[idx]
    } else {
        &BASIC_LEGACY[FALLBACK]
    }
}

fn draw_glyph(
    canvas: &mut RgbaImage,
    glyph: &[u8; 8],
    origin_x: i64,
    origin_y: i64,
    scale: u32,
    color: Rgba<u8>,
    clip: &CellRect,
) {
    for (gy, row_bits) in glyph.iter().enumerate() {
        for gx in 0..GLYPH_SIZE {
            // LSB is the leftmost pixel of the glyph row.
            if row_bits & (1u8 << gx) == 0 {
                continue;
            }
            for sy in 0..scale {
                for sx in 0..scale {
                    let px = origin_x + i64::from(gx * scale + sx);
                    let py = origin_y + i64::from(gy as u32 * scale + sy);
                    put_clipped(canvas, px, py, color, clip);
                }
            }
        }
    }
}

fn put_clipped(canvas: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>, clip: &CellRect) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if !clip.contains(x, y) || x >= canvas.width() || y >= canvas.height() {
        return;
    }
    canvas.put_pixel(x, y, color);
}

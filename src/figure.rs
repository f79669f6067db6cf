//! The figure handle: an owned RGBA canvas plus its computed layout.
//!
//! Every render creates a fresh figure; nothing process-global is touched.
//! The caller decides what "showing" means by saving or consuming the
//! canvas.

use crate::error::MontageError;
use crate::io;
use crate::layout::{CellRect, FigureLayout};
use crate::text;
use image::{imageops, Rgba, RgbaImage};
use std::path::Path;

/// Title text color.
const TITLE_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// One composed montage figure.
#[derive(Debug)]
pub struct Figure {
    canvas: RgbaImage,
    layout: FigureLayout,
    title_scale: u32,
}

impl Figure {
    pub(crate) fn new(layout: FigureLayout, background: Rgba<u8>, title_scale: u32) -> Self {
        let canvas = RgbaImage::from_pixel(layout.canvas_width, layout.canvas_height, background);
        Self {
            canvas,
            layout,
            title_scale,
        }
    }

    pub fn layout(&self) -> &FigureLayout {
        &self.layout
    }

    pub fn image(&self) -> &RgbaImage {
        &self.canvas
    }

    pub fn into_image(self) -> RgbaImage {
        self.canvas
    }

    /// Draws `img` into cell `(row, col)`.
    ///
    /// An image that fits its cell is blitted at native resolution and
    /// centered; an oversized image is scaled down to fit, preserving
    /// aspect ratio. Cells carry no decoration of any kind.
    pub(crate) fn place_image(&mut self, row: usize, col: usize, img: &RgbaImage) {
        let cell = self.layout.cell(row, col);
        if img.width() <= cell.width && img.height() <= cell.height {
            self.blit_centered(img, &cell);
        } else {
            let (w, h) = fit_dimensions((img.width(), img.height()), (cell.width, cell.height));
            let scaled = imageops::resize(img, w, h, imageops::FilterType::Triangle);
            self.blit_centered(&scaled, &cell);
        }
    }

    /// Renders `title` centered in the band above column `col`, clipped to
    /// that column's width.
    pub(crate) fn set_column_title(&mut self, col: usize, title: &str) {
        let band = self.layout.title_anchor(col);
        if band.height == 0 {
            return;
        }
        let text_width = i64::from(text::measure(title, self.title_scale));
        let text_height = i64::from(text::GLYPH_SIZE * self.title_scale);
        let x = i64::from(band.x) + (i64::from(band.width) - text_width) / 2;
        let y = (i64::from(band.height) - text_height) / 2;
        text::draw(
            &mut self.canvas,
            title,
            x,
            y,
            self.title_scale,
            TITLE_COLOR,
            &band,
        );
    }

    /// Writes the canvas as a PNG, creating parent directories.
    pub fn save_png(&self, path: &Path) -> Result<(), MontageError> {
        io::save_png(&self.canvas, path)
    }

    fn blit_centered(&mut self, img: &RgbaImage, cell: &CellRect) {
        let x = i64::from(cell.x) + i64::from(cell.width - img.width()) / 2;
        let y = i64::from(cell.y) + i64::from(cell.height - img.height()) / 2;
        imageops::replace(&mut self.canvas, img, x, y);
    }
}

/// Largest size with `img`'s aspect ratio fitting inside `cell`.
fn fit_dimensions(img: (u32, u32), cell: (u32, u32)) -> (u32, u32) {
    let scale = f64::min(
        f64::from(cell.0) / f64::from(img.0),
        f64::from(cell.1) / f64::from(img.1),
    );
    let w = (f64::from(img.0) * scale).round() as u32;
    let h = (f64::from(img.1) * scale).round() as u32;
    (w.clamp(1, cell.0), h.clamp(1, cell.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_preserves_aspect_and_bounds() {
        assert_eq!(fit_dimensions((100, 90), (40, 30)), (33, 30));
        assert_eq!(fit_dimensions((200, 50), (40, 30)), (40, 10));
        // Extreme ratios never collapse to zero.
        assert_eq!(fit_dimensions((10_000, 1), (40, 30)), (40, 1));
        assert_eq!(fit_dimensions((1, 10_000), (40, 30)), (1, 30));
    }
}

//! Figure geometry.
//!
//! Converts figure size and axes padding (inches at a given DPI) into the
//! pixel rectangle of every grid cell. Cells are addressed directly by
//! `(row, col)` so image placement never depends on two flattened
//! traversals staying in sync.

use crate::error::MontageError;
use crate::renderer::RenderParams;
use crate::text;
use serde::Serialize;

/// Vertical margin above and below title text, in pixels.
const TITLE_MARGIN: u32 = 6;

/// Pixel-space rectangle; `x`/`y` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CellRect {
    /// Whether the pixel at `(x, y)` lies inside the rectangle.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Computed pixel geometry of one figure.
///
/// The canvas splits into an optional title band at the top and a grid of
/// `rows` x `cols` equally sized cells separated by fixed gutters, with any
/// rounding remainder pushed into outer margins.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigureLayout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub rows: usize,
    pub cols: usize,
    pub cell_width: u32,
    pub cell_height: u32,
    pub pad_x: u32,
    pub pad_y: u32,
    /// Height of the title strip above the grid; 0 when no titles are drawn.
    pub title_band: u32,
    pub margin_x: u32,
    pub margin_y: u32,
}

impl FigureLayout {
    /// Derives the pixel layout for a `rows` x `cols` grid.
    ///
    /// Degenerate geometry (non-positive sizes, negative padding, padding
    /// that leaves no room for cells) is rejected with
    /// [`MontageError::InvalidParams`].
    pub fn compute(
        rows: usize,
        cols: usize,
        titled: bool,
        params: &RenderParams,
    ) -> Result<Self, MontageError> {
        if rows == 0 || cols == 0 {
            return Err(MontageError::InvalidParams(format!(
                "grid shape must be non-empty, got {rows}x{cols}"
            )));
        }
        let (fig_w, fig_h) = params.figure_size;
        let (pad_w, pad_h) = params.axes_pad;
        if !(fig_w.is_finite() && fig_h.is_finite() && fig_w > 0.0 && fig_h > 0.0) {
            return Err(MontageError::InvalidParams(format!(
                "figure size must be positive, got ({fig_w}, {fig_h})"
            )));
        }
        if !(params.dpi.is_finite() && params.dpi > 0.0) {
            return Err(MontageError::InvalidParams(format!(
                "dpi must be positive, got {}",
                params.dpi
            )));
        }
        if !(pad_w.is_finite() && pad_h.is_finite() && pad_w >= 0.0 && pad_h >= 0.0) {
            return Err(MontageError::InvalidParams(format!(
                "axes padding must be non-negative, got ({pad_w}, {pad_h})"
            )));
        }
        if params.title_scale == 0 {
            return Err(MontageError::InvalidParams(
                "title scale must be at least 1".to_string(),
            ));
        }

        let canvas_width = to_pixels(fig_w, params.dpi);
        let canvas_height = to_pixels(fig_h, params.dpi);
        if canvas_width == 0 || canvas_height == 0 {
            return Err(MontageError::InvalidParams(format!(
                "figure ({fig_w}, {fig_h}) at {} dpi rounds to zero pixels",
                params.dpi
            )));
        }
        let pad_x = to_pixels(pad_w, params.dpi);
        let pad_y = to_pixels(pad_h, params.dpi);
        let title_band = if titled {
            text::GLYPH_SIZE * params.title_scale + 2 * TITLE_MARGIN
        } else {
            0
        };

        let cols_u = cols as u32;
        let rows_u = rows as u32;
        let gutters_x = pad_x
            .checked_mul(cols_u - 1)
            .ok_or_else(|| MontageError::InvalidParams("horizontal padding overflows".into()))?;
        let gutters_y = pad_y
            .checked_mul(rows_u - 1)
            .ok_or_else(|| MontageError::InvalidParams("vertical padding overflows".into()))?;
        let grid_width = canvas_width.checked_sub(gutters_x).unwrap_or(0);
        let grid_height = canvas_height
            .checked_sub(title_band)
            .and_then(|h| h.checked_sub(gutters_y))
            .unwrap_or(0);
        let cell_width = grid_width / cols_u;
        let cell_height = grid_height / rows_u;
        if cell_width == 0 || cell_height == 0 {
            return Err(MontageError::InvalidParams(format!(
                "{rows}x{cols} cells do not fit a {canvas_width}x{canvas_height}px figure \
                 with ({pad_x}, {pad_y})px padding"
            )));
        }

        let margin_x = (canvas_width - (cols_u * cell_width + gutters_x)) / 2;
        let margin_y = (canvas_height - title_band - (rows_u * cell_height + gutters_y)) / 2;

        Ok(Self {
            canvas_width,
            canvas_height,
            rows,
            cols,
            cell_width,
            cell_height,
            pad_x,
            pad_y,
            title_band,
            margin_x,
            margin_y,
        })
    }

    /// Pixel rectangle of cell `(row, col)`; row 0 sits just below the
    /// title band.
    pub fn cell(&self, row: usize, col: usize) -> CellRect {
        debug_assert!(row < self.rows && col < self.cols);
        CellRect {
            x: self.margin_x + col as u32 * (self.cell_width + self.pad_x),
            y: self.title_band + self.margin_y + row as u32 * (self.cell_height + self.pad_y),
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// Title strip above column `col`'s top cell. Zero-height when the
    /// layout was computed without titles.
    pub fn title_anchor(&self, col: usize) -> CellRect {
        CellRect {
            x: self.margin_x + col as u32 * (self.cell_width + self.pad_x),
            y: 0,
            width: self.cell_width,
            height: self.title_band,
        }
    }
}

fn to_pixels(inches: f32, dpi: f32) -> u32 {
    (inches * dpi).round() as u32
}

//! The montage renderer.
//!
//! [`GridRenderer`] turns a validated [`ImageGrid`] plus optional column
//! titles into a [`Figure`]. Placement is a pure function of the cell
//! address: cell `(row, col)` always shows `grid.image(row, col)`.

use crate::diagnostics::{RenderReport, TimingBreakdown};
use crate::error::MontageError;
use crate::figure::Figure;
use crate::grid::ImageGrid;
use crate::layout::FigureLayout;
use image::Rgba;
use log::debug;
use serde::Deserialize;
use std::time::Instant;

/// Rendering knobs.
///
/// Figure size and axes padding are in inches, converted at `dpi` into
/// pixels, matching the usual figure conventions.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// Figure `(width, height)` in inches.
    pub figure_size: (f32, f32),
    /// `(horizontal, vertical)` gap between cells, in inches.
    pub axes_pad: (f32, f32),
    pub dpi: f32,
    /// Canvas background, RGBA.
    pub background: [u8; 4],
    /// Integer scale applied to the 8px title glyphs.
    pub title_scale: u32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            figure_size: (20.0, 16.0),
            axes_pad: (0.1, 0.2),
            dpi: 100.0,
            background: [255, 255, 255, 255],
            title_scale: 2,
        }
    }
}

pub struct GridRenderer {
    params: RenderParams,
}

impl GridRenderer {
    pub fn new(params: RenderParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    /// Composes the grid into a fresh figure.
    ///
    /// `titles` must be empty (no titles drawn, no band reserved) or hold
    /// exactly one title per column; anything else is a
    /// [`MontageError::TitleCountMismatch`]. The grid is only read; calling
    /// twice yields two equal, independent figures.
    pub fn render(&self, grid: &ImageGrid, titles: &[&str]) -> Result<Figure, MontageError> {
        self.render_with_report(grid, titles).map(|(figure, _)| figure)
    }

    /// Same as [`render`](Self::render), also returning layout and timing
    /// diagnostics.
    pub fn render_with_report(
        &self,
        grid: &ImageGrid,
        titles: &[&str],
    ) -> Result<(Figure, RenderReport), MontageError> {
        let t0 = Instant::now();
        let (n_rows, n_cols) = grid.shape();
        let titled = !titles.is_empty();
        if titled && titles.len() != n_cols {
            return Err(MontageError::TitleCountMismatch {
                titles: titles.len(),
                columns: n_cols,
            });
        }

        let layout = FigureLayout::compute(n_rows, n_cols, titled, &self.params)?;
        debug!(
            "montage layout: {}x{}px canvas, {}x{} cells of {}x{}px",
            layout.canvas_width,
            layout.canvas_height,
            n_rows,
            n_cols,
            layout.cell_width,
            layout.cell_height
        );
        let mut timing = TimingBreakdown::default();
        timing.push("layout", elapsed_ms(t0));

        let t_compose = Instant::now();
        let mut figure = Figure::new(
            layout.clone(),
            Rgba(self.params.background),
            self.params.title_scale,
        );
        for col in 0..n_cols {
            for row in 0..n_rows {
                figure.place_image(row, col, grid.image(row, col));
            }
        }
        timing.push("compose", elapsed_ms(t_compose));

        let t_titles = Instant::now();
        for (col, title) in titles.iter().enumerate() {
            figure.set_column_title(col, title);
        }
        timing.push("titles", elapsed_ms(t_titles));
        timing.total_ms = elapsed_ms(t0);
        debug!(
            "montage composed: {} images in {:.3} ms",
            n_rows * n_cols,
            timing.total_ms
        );

        let report = RenderReport {
            canvas_width: layout.canvas_width,
            canvas_height: layout.canvas_height,
            rows: n_rows,
            cols: n_cols,
            images_placed: n_rows * n_cols,
            titled,
            layout,
            timing,
        };
        Ok((figure, report))
    }
}

impl Default for GridRenderer {
    fn default() -> Self {
        Self::new(RenderParams::default())
    }
}

fn elapsed_ms(t: Instant) -> f64 {
    t.elapsed().as_secs_f64() * 1000.0
}

#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod error;
pub mod figure;
pub mod grid;
pub mod io;
pub mod renderer;

// Lower-level pieces, public for tools and tests.
pub mod diagnostics;
pub mod layout;
pub mod text;

// --- High-level re-exports -------------------------------------------------

pub use crate::diagnostics::RenderReport;
pub use crate::error::MontageError;
pub use crate::figure::Figure;
pub use crate::grid::{GridBuilder, ImageGrid};
pub use crate::renderer::{GridRenderer, RenderParams};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use grid_montage::prelude::*;
/// use image::{Rgba, RgbaImage};
///
/// # fn main() -> Result<(), MontageError> {
/// let tile = RgbaImage::from_pixel(64, 48, Rgba([128, 128, 128, 255]));
/// let grid = ImageGrid::from_columns(vec![vec![tile.clone()], vec![tile]])?;
///
/// let renderer = GridRenderer::new(RenderParams::default());
/// let figure = renderer.render(&grid, &["left", "right"])?;
/// println!(
///     "canvas {}x{}",
///     figure.layout().canvas_width,
///     figure.layout().canvas_height
/// );
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::figure::Figure;
    pub use crate::grid::{GridBuilder, ImageGrid};
    pub use crate::{GridRenderer, MontageError, RenderParams};
}

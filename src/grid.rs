//! Validated rectangular image grid.
//!
//! A grid is an ordered sequence of columns, every column holding the same
//! number of images. Construction checks the shape once so that rendering
//! can address cells by `(row, col)` without re-deriving traversal order.

use crate::error::MontageError;
use image::RgbaImage;

/// Rectangular arrangement of images, addressed column-first.
///
/// Row 0 is the top of each column. The grid only borrows out its images
/// for reading; it never mutates or re-encodes them.
#[derive(Clone, Debug)]
pub struct ImageGrid {
    columns: Vec<Vec<RgbaImage>>,
    n_rows: usize,
}

impl ImageGrid {
    /// Builds a grid from ordered columns, rejecting empty and ragged input.
    pub fn from_columns(columns: Vec<Vec<RgbaImage>>) -> Result<Self, MontageError> {
        if columns.is_empty() {
            return Err(MontageError::EmptyGrid);
        }
        let n_rows = columns[0].len();
        for (index, column) in columns.iter().enumerate() {
            if column.is_empty() {
                return Err(MontageError::EmptyColumn { index });
            }
            if column.len() != n_rows {
                return Err(MontageError::RaggedColumn {
                    index,
                    expected: n_rows,
                    actual: column.len(),
                });
            }
        }
        Ok(Self { columns, n_rows })
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// `(rows, cols)` of the grid.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    /// Image at `(row, col)`.
    ///
    /// # Panics
    /// Panics when the address is outside the validated shape.
    pub fn image(&self, row: usize, col: usize) -> &RgbaImage {
        &self.columns[col][row]
    }

    /// All images of column 0 top to bottom, then column 1, and so on.
    pub fn iter_column_major(&self) -> impl Iterator<Item = &RgbaImage> {
        self.columns.iter().flat_map(|column| column.iter())
    }

    /// Largest width and height over all images, in pixels.
    pub fn max_image_size(&self) -> (u32, u32) {
        let mut width = 0u32;
        let mut height = 0u32;
        for img in self.iter_column_major() {
            width = width.max(img.width());
            height = height.max(img.height());
        }
        (width, height)
    }
}

/// Incremental [`ImageGrid`] construction, one column at a time.
#[derive(Debug, Default)]
pub struct GridBuilder {
    columns: Vec<Vec<RgbaImage>>,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column; its images run top to bottom.
    pub fn push_column(mut self, images: Vec<RgbaImage>) -> Self {
        self.columns.push(images);
        self
    }

    /// Validates the accumulated columns into a grid.
    pub fn build(self) -> Result<ImageGrid, MontageError> {
        ImageGrid::from_columns(self.columns)
    }
}

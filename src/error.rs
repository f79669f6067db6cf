use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while building a grid or rendering a montage.
///
/// Shape problems (ragged columns, title/column mismatch) are diagnosed
/// up front instead of surfacing as mis-placed cells or out-of-range
/// indexing later on.
#[derive(Debug, Error)]
pub enum MontageError {
    #[error("grid has no columns")]
    EmptyGrid,

    #[error("column {index} contains no images")]
    EmptyColumn { index: usize },

    #[error("column {index} has {actual} images, expected {expected} (grid must be rectangular)")]
    RaggedColumn {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{titles} titles supplied for {columns} columns")]
    TitleCountMismatch { titles: usize, columns: usize },

    #[error("invalid render parameters: {0}")]
    InvalidParams(String),

    #[error("failed to {action} image {}: {source}", .path.display())]
    Image {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to {action} JSON {}: {source}", .path.display())]
    Json {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

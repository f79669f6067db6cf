//! JSON configuration for the montage demo binary.

use crate::error::MontageError;
use crate::renderer::RenderParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One column of the montage: an optional title and the image files shown
/// top to bottom.
#[derive(Debug, Deserialize)]
pub struct ColumnConfig {
    #[serde(default)]
    pub title: Option<String>,
    pub images: Vec<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct MontageConfig {
    /// Columns left to right.
    pub columns: Vec<ColumnConfig>,
    /// Output PNG path.
    pub output: PathBuf,
    /// Optional JSON render-report path.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
    #[serde(default)]
    pub params: RenderParams,
}

impl MontageConfig {
    /// Column titles, or `None` when no column sets one.
    ///
    /// Mixed configs label untitled columns with an empty string so the
    /// positional pairing with columns stays intact.
    pub fn titles(&self) -> Option<Vec<String>> {
        if self.columns.iter().all(|c| c.title.is_none()) {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|c| c.title.clone().unwrap_or_default())
                .collect(),
        )
    }
}

pub fn load_config(path: &Path) -> Result<MontageConfig, MontageError> {
    let contents = fs::read_to_string(path).map_err(|source| MontageError::Io {
        action: "read",
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| MontageError::Json {
        action: "parse",
        path: path.to_path_buf(),
        source,
    })
}

//! I/O helpers for montage inputs and outputs.
//!
//! - [`load_image`]: read a PNG/JPEG/etc. into an owned RGBA buffer.
//! - [`save_png`]: write an RGBA buffer to a PNG.
//! - [`write_json_file`]: pretty-print a serializable value to disk.
//!
//! The renderer itself never touches the filesystem; these exist for the
//! demo binaries and callers that want them.

use crate::error::MontageError;
use image::RgbaImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Loads an image from disk and converts it to 8-bit RGBA.
pub fn load_image(path: &Path) -> Result<RgbaImage, MontageError> {
    let img = image::open(path).map_err(|source| MontageError::Image {
        action: "open",
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.into_rgba8())
}

/// Saves an RGBA buffer as a PNG, creating parent directories.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), MontageError> {
    ensure_parent_dir(path)?;
    image.save(path).map_err(|source| MontageError::Image {
        action: "save",
        path: path.to_path_buf(),
        source,
    })
}

/// Serializes `value` as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), MontageError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| MontageError::Json {
        action: "serialize",
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| MontageError::Io {
        action: "write",
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), MontageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| MontageError::Io {
                action: "create directory",
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}

use image::{Rgba, RgbaImage};

/// Generates a solid-color RGBA tile.
pub fn solid(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    assert!(width > 0 && height > 0, "tile dimensions must be positive");
    RgbaImage::from_pixel(width, height, Rgba(color))
}

/// Generates a tile whose pixels encode their own coordinates plus a seed,
/// so that placement checks can tell every tile and pixel apart.
pub fn coordinate_tile(width: u32, height: u32, seed: u8) -> RgbaImage {
    assert!(width > 0 && height > 0, "tile dimensions must be positive");
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([x as u8, y as u8, seed, 255])
    })
}

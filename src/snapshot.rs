//! PNG snapshots of the color surface.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::render::Surface;

/// Converts an ARGB surface into an RGBA image, the way the window shows it.
///
/// Rows are flipped, since surface row 0 is presented at the bottom. Alpha is
/// forced opaque: the presenter ignores it.
pub fn to_rgba_image(surface: &Surface) -> RgbaImage {
    let width = surface.width() as usize;
    let height = surface.height();
    let pixels = surface.pixels();
    RgbaImage::from_fn(surface.width(), height, |x, y| {
        let row = (height - 1 - y) as usize;
        let argb = pixels[row * width + x as usize];
        Rgba([(argb >> 16) as u8, (argb >> 8) as u8, argb as u8, 0xFF])
    })
}

/// Writes `surface` to `path`; the format follows the file extension.
pub fn save(surface: &Surface, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
    to_rgba_image(surface).save(path)
}

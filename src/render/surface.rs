//! Owned 32-bit pixel buffers.
//!
//! The same type backs both the presented color surface and the depth
//! surface; only the meaning of the stored `u32` differs.

use std::fmt;

use crate::math::vec2::Vec2;

/// Bytes per pixel for every surface.
pub const BYTES_PER_PIXEL: usize = 4;

/// Why a surface could not be (re)allocated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The byte length of the surface does not fit in `usize`.
    TooLarge { width: u32, height: u32 },
    /// The allocator refused the pixel storage.
    AllocationFailed { width: u32, height: u32 },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::TooLarge { width, height } => {
                write!(f, "surface of {}x{} pixels is too large", width, height)
            }
            SurfaceError::AllocationFailed { width, height } => {
                write!(f, "failed to allocate a {}x{} pixel surface", width, height)
            }
        }
    }
}

impl std::error::Error for SurfaceError {}

/// Read-only view handed to whoever presents a surface.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceView<'a> {
    pub width: u32,
    pub height: u32,
    /// Bytes per row.
    pub pitch: usize,
    pub bytes: &'a [u8],
}

/// A rectangular buffer of `width * height` 32-bit pixels, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

fn allocate(width: u32, height: u32) -> Result<Vec<u32>, SurfaceError> {
    let len = (width as usize)
        .checked_mul(height as usize)
        .filter(|len| len.checked_mul(BYTES_PER_PIXEL).is_some())
        .ok_or(SurfaceError::TooLarge { width, height })?;

    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(len)
        .map_err(|_| SurfaceError::AllocationFailed { width, height })?;
    pixels.resize(len, 0);
    Ok(pixels)
}

impl Surface {
    /// Allocates a zero-filled surface.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        Ok(Self {
            pixels: allocate(width, height)?,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    pub fn pitch(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Replaces the storage with a zero-filled buffer of the new size.
    ///
    /// On error the surface keeps its previous size and contents.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        self.pixels = allocate(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn clear(&mut self, value: u32) {
        self.pixels.fill(value);
    }

    #[inline]
    pub(crate) fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Writes `value` at `(x, y)`. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, value: u32) {
        if let Some(index) = self.index_of(x, y) {
            self.pixels[index] = value;
        }
    }

    /// Writes `value` at the truncated integer address of `p`.
    #[inline]
    pub fn point(&mut self, p: Vec2, value: u32) {
        let p = p.truncate();
        self.set_pixel(p.x, p.y, value);
    }

    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index_of(x, y).map(|index| self.pixels[index])
    }

    #[inline]
    pub(crate) fn get_at(&self, index: usize) -> u32 {
        self.pixels[index]
    }

    #[inline]
    pub(crate) fn set_at(&mut self, index: usize, value: u32) {
        self.pixels[index] = value;
    }

    /// Fills a `width x height` rectangle whose top-left corner is `(x, y)`,
    /// skipping the parts that fall outside the surface.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, value: u32) {
        for dy in 0..height {
            for dx in 0..width {
                self.set_pixel(x + dx, y + dy, value);
            }
        }
    }

    /// The pixel storage as raw native-endian bytes.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and every byte pattern is a valid u8;
        // the length covers exactly the initialized pixels and the borrow
        // ties the slice's lifetime to `self`.
        unsafe {
            std::slice::from_raw_parts(
                self.pixels.as_ptr() as *const u8,
                self.pixels.len() * BYTES_PER_PIXEL,
            )
        }
    }

    pub fn view(&self) -> SurfaceView<'_> {
        SurfaceView {
            width: self.width,
            height: self.height,
            pitch: self.pitch(),
            bytes: self.as_bytes(),
        }
    }
}

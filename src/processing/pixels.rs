//! # Pixel Buffers
//!
//! A [`PixelBuffer`] is a single contiguous, row-major block of 8-bit RGB
//! samples. Row `y` occupies bytes `y * width * 3 .. (y + 1) * width * 3`,
//! and within a row pixels run left to right as `[r, g, b]` triples.
//!
//! This is also the layout the codec hands to and receives from the `image`
//! crate, so a buffer survives a trip through a lossless file unchanged.

use crate::error::{HideError, Result};

/// Number of channels per pixel (R, G, B).
pub const CHANNELS: usize = 3;

/// One RGB pixel, no alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn channels(&self) -> [u8; CHANNELS] {
        [self.r, self.g, self.b]
    }
}

/// A width x height grid of [`Pixel`]s with (0,0) at the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create an all-black buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; byte_len(width, height)],
        }
    }

    /// Wrap existing row-major RGB bytes.
    ///
    /// # Errors
    /// - `BufferSizeMismatch` if `data.len() != width * height * 3`
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height);
        if data.len() != expected {
            return Err(HideError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// Wrap bytes whose length is already known to match.
    pub(crate) fn from_parts(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), byte_len(width, height));
        Self { width, height, data }
    }

    /// Build a buffer by evaluating `f(x, y)` for every coordinate in
    /// row-major order.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Pixel,
    {
        let mut data = Vec::with_capacity(byte_len(width, height));
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y).channels());
            }
        }
        Self { width, height, data }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True if this buffer is no wider and no taller than `other`.
    pub fn fits_within(&self, other: &PixelBuffer) -> bool {
        self.width <= other.width && self.height <= other.height
    }

    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// The bytes of row `y`.
    ///
    /// # Panics
    /// If `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.stride();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// # Panics
    /// If `(x, y)` is outside the buffer.
    pub fn get_pixel(&self, x: u32, y: u32) -> Pixel {
        let i = self.offset(x, y);
        Pixel::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|c| Pixel::new(c[0], c[1], c[2]))
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} buffer",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}

fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * CHANNELS
}

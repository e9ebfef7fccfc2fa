//! # Image Processing and Steganography
//!
//! Pixel buffers and the two-bit image-in-image transcoder.
//!
//! ## Modules
//!
//! - [`pixels`]: contiguous row-major RGB buffers
//! - [`transcoder`]: hiding a payload image in a carrier and recovering it

pub mod pixels;
pub mod transcoder;

// Re-export main types and functions for convenience
pub use pixels::{Pixel, PixelBuffer};
pub use transcoder::{decode, encode};

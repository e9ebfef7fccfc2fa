//! # Two-Bit Image Steganography
//!
//! Hides one image inside another by keeping the top 6 bits of every carrier
//! channel and replacing the bottom 2 bits with the top 2 bits of the matching
//! payload channel.
//!
//! ## Algorithm
//!
//! ### Encoding
//! For every coordinate of the payload (the carrier is read at the same
//! coordinate, never offset):
//! ```text
//! stego = (carrier & 0b1111_1100) | (payload >> 6)
//! ```
//!
//! ### Decoding
//! ```text
//! recovered = (stego & 0b0000_0011) << 6
//! ```
//!
//! Only 4 levels per channel survive a round trip. Any lossy recompression of
//! the stego image destroys the hidden bits.
//!
//! Rows are independent, so both passes run over row chunks in parallel.

use log::debug;
use rayon::prelude::*;

use super::pixels::PixelBuffer;
use crate::error::{HideError, Result};

/// Carrier bits that survive encoding.
const CARRIER_MASK: u8 = 0b1111_1100;
/// Stego bits that carry the payload.
const PAYLOAD_MASK: u8 = 0b0000_0011;
/// Distance between a payload's top 2 bits and the stego's bottom 2 bits.
const SHIFT: u32 = 6;

/// Hide `payload` in the low bits of `carrier`.
///
/// The result has the payload's dimensions. Carrier pixels outside the
/// payload's extent are never read.
///
/// # Errors
/// - `InputSize` if the payload is wider or taller than the carrier
pub fn encode(payload: &PixelBuffer, carrier: &PixelBuffer) -> Result<PixelBuffer> {
    if !payload.fits_within(carrier) {
        return Err(HideError::InputSize {
            payload: payload.dimensions(),
            carrier: carrier.dimensions(),
        });
    }

    let (width, height) = payload.dimensions();
    debug!(
        "Encoding {}x{} payload into {}x{} carrier",
        width,
        height,
        carrier.width(),
        carrier.height()
    );

    let stride = payload.stride();
    let mut out = vec![0u8; payload.as_raw().len()];

    if stride > 0 {
        out.par_chunks_mut(stride).enumerate().for_each(|(y, row)| {
            let y = y as u32;
            let hide = payload.row(y);
            // The carrier row may be longer; only its leading part is used.
            let keep = &carrier.row(y)[..stride];
            for ((dst, &h), &k) in row.iter_mut().zip(hide).zip(keep) {
                *dst = embed_channel(h, k);
            }
        });
    }

    Ok(PixelBuffer::from_parts(width, height, out))
}

/// Recover the hidden image from the low bits of `stego`.
///
/// Every channel of the result is one of 0, 64, 128 or 192.
pub fn decode(stego: &PixelBuffer) -> PixelBuffer {
    let (width, height) = stego.dimensions();
    debug!("Decoding {}x{} stego image", width, height);

    let mut out = stego.as_raw().to_vec();
    let stride = stego.stride();
    if stride > 0 {
        out.par_chunks_mut(stride).for_each(|row| {
            for c in row.iter_mut() {
                *c = extract_channel(*c);
            }
        });
    }

    PixelBuffer::from_parts(width, height, out)
}

#[inline]
fn embed_channel(payload: u8, carrier: u8) -> u8 {
    (carrier & CARRIER_MASK) | (payload >> SHIFT)
}

#[inline]
fn extract_channel(stego: u8) -> u8 {
    (stego & PAYLOAD_MASK) << SHIFT
}

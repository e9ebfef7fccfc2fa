//! # imghide
//!
//! Hide one image inside another by storing the payload's two most
//! significant bits per channel in the carrier's two least significant bits,
//! and recover it again.
//!
//! ```ignore
//! use imghide::{common::codec, decode, encode};
//!
//! let payload = codec::load_image("secret.png".as_ref())?;
//! let carrier = codec::load_image("holiday.png".as_ref())?;
//! let stego = encode(&payload, &carrier)?;
//! codec::save_image(&stego, "stego.png".as_ref())?;
//!
//! let recovered = decode(&codec::load_image("stego.png".as_ref())?);
//! ```

pub mod command;
pub mod common;
pub mod error;
pub mod processing;
pub mod utils;

pub use command::Command;
pub use error::{HideError, Result};
pub use processing::{decode, encode, Pixel, PixelBuffer};

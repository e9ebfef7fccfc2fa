//! # Error Types
//!
//! Every failure the tool can report, from argument resolution through image
//! loading to transcoding. All of them end the invocation; nothing is retried
//! and no partial output is written.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used across the library.
pub type Result<T> = std::result::Result<T, HideError>;

#[derive(Debug, Error)]
pub enum HideError {
    /// Encode and decode were both requested.
    #[error("can't steg and unsteg simultaneously")]
    ModeConflict,

    /// A required argument for the selected mode is absent.
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    /// An input path does not resolve to an existing file.
    #[error("file '{}' does not exist", path.display())]
    FileNotFound { path: PathBuf },

    /// The payload is wider or taller than the carrier.
    #[error(
        "image to hide ({}x{}) must fit inside the carrier image ({}x{})",
        payload.0, payload.1, carrier.0, carrier.1
    )]
    InputSize {
        payload: (u32, u32),
        carrier: (u32, u32),
    },

    /// The image codec could not parse the file.
    #[error("failed to decode image '{}': {source}", path.display())]
    DecodeFormat {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The image codec could not write the output.
    #[error("failed to encode image '{}': {source}", path.display())]
    EncodeFormat {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The stego output would be written in a lossy format.
    #[error(
        "output '{}' uses a lossy format, hidden bits would not survive (use PNG or BMP)",
        path.display()
    )]
    LossyOutput { path: PathBuf },

    /// Raw pixel data does not match the declared dimensions.
    #[error("pixel data has {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// The configuration file could not be read.
    #[error("failed to read config '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`HideConfig`].
    ///
    /// [`HideConfig`]: crate::common::config::HideConfig
    #[error("invalid config '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The encoded output could not be written to disk.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

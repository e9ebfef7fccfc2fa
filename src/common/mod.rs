//! # Common Components
//!
//! Shared utilities used by the library and the `imghide` binary.
//!
//! ## Modules
//!
//! - [`codec`]: image file and byte conversion to and from pixel buffers
//! - [`config`]: configuration parsing utilities

pub mod codec;
pub mod config;

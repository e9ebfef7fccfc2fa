//! # Configuration
//!
//! Optional TOML configuration for the `imghide` binary. Every field has a
//! default, so a missing file section (or no file at all) is valid.
//!
//! ```toml
//! [logging]
//! level = "info"
//!
//! [output]
//! allow_lossy = false
//! ```

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{HideError, Result};

/// Load a TOML configuration file and deserialize it into the specified type.
///
/// # Arguments
/// - `path`: Path to the TOML configuration file
///
/// # Returns
/// - `Ok(T)`: Successfully loaded and parsed configuration
/// - `Err`: `ConfigRead` if the file can't be read, `Config` if it doesn't parse
///
/// # Example
/// ```ignore
/// let config: HideConfig = load_config(Path::new("config/imghide.toml"))?;
/// ```
pub fn load_config<T>(path: &Path) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let content = fs::read_to_string(path).map_err(|source| HideError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config: T = toml::from_str(&content).map_err(|source| HideError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(config)
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HideConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

impl HideConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        load_config(path)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level printed (off, error, warn, info, debug, trace)
    pub level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
        }
    }
}

/// Output file policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Allow writing a stego image in a lossy format such as JPEG.
    /// The hidden bits will almost certainly be destroyed.
    pub allow_lossy: bool,
}

//! # Encode / Decode Jobs
//!
//! Turns the command-line flags into exactly one job and runs it:
//!
//! - **Encode** (`--steg CARRIER --input-file PAYLOAD`): hide the payload in
//!   the carrier and write the stego image.
//! - **Decode** (`--unsteg STEGO`): recover the hidden image.
//!
//! Every precondition (mode exclusivity, required arguments, file existence,
//! output format, payload size) is checked before any pixel is processed, and
//! the output file is only written once a complete buffer exists.

use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::common::codec;
use crate::common::config::HideConfig;
use crate::error::{HideError, Result};
use crate::processing::transcoder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Encode {
        payload: PathBuf,
        carrier: PathBuf,
        output: PathBuf,
    },
    Decode {
        stego: PathBuf,
        output: PathBuf,
    },
}

impl Command {
    /// Pick the job from the raw flags.
    ///
    /// # Arguments
    /// - `carrier`: `--steg`, selects encode mode
    /// - `payload`: `--input-file`, required with `--steg`
    /// - `stego`: `--unsteg`, selects decode mode
    /// - `output`: `--output-file`
    ///
    /// # Errors
    /// - `ModeConflict` if both `carrier` and `stego` are given
    /// - `MissingArgument` if encode lacks a payload, or no mode is given
    pub fn resolve(
        carrier: Option<PathBuf>,
        payload: Option<PathBuf>,
        stego: Option<PathBuf>,
        output: PathBuf,
    ) -> Result<Self> {
        match (carrier, stego) {
            (Some(_), Some(_)) => Err(HideError::ModeConflict),
            (Some(carrier), None) => {
                let payload = payload.ok_or(HideError::MissingArgument("--input-file"))?;
                Ok(Command::Encode {
                    payload,
                    carrier,
                    output,
                })
            }
            (None, Some(stego)) => Ok(Command::Decode { stego, output }),
            (None, None) => Err(HideError::MissingArgument("--steg or --unsteg")),
        }
    }

    /// Run the job, writing the result to the output path.
    pub fn execute(&self, config: &HideConfig) -> Result<()> {
        match self {
            Command::Encode {
                payload,
                carrier,
                output,
            } => run_encode(payload, carrier, output, config),
            Command::Decode { stego, output } => run_decode(stego, output),
        }
    }
}

fn run_encode(payload: &Path, carrier: &Path, output: &Path, config: &HideConfig) -> Result<()> {
    codec::require_file(carrier)?;
    codec::require_file(payload)?;

    if codec::is_lossy_path(output) {
        if !config.output.allow_lossy {
            return Err(HideError::LossyOutput {
                path: output.to_path_buf(),
            });
        }
        warn!(
            "Writing stego image to lossy format ({}), hidden bits will likely be lost",
            output.display()
        );
    }

    let payload_img = codec::load_image(payload)?;
    let carrier_img = codec::load_image(carrier)?;
    info!(
        "🔒 Hiding {} ({}x{}) in {} ({}x{})",
        payload.display(),
        payload_img.width(),
        payload_img.height(),
        carrier.display(),
        carrier_img.width(),
        carrier_img.height()
    );

    let stego = transcoder::encode(&payload_img, &carrier_img)?;
    codec::save_image(&stego, output)?;

    info!("✅ Stego image written to {}", output.display());
    Ok(())
}

fn run_decode(stego: &Path, output: &Path) -> Result<()> {
    let stego_img = codec::load_image(stego)?;
    info!(
        "🔓 Recovering hidden image from {} ({}x{})",
        stego.display(),
        stego_img.width(),
        stego_img.height()
    );

    let recovered = transcoder::decode(&stego_img);
    codec::save_image(&recovered, output)?;

    info!("✅ Recovered image written to {}", output.display());
    Ok(())
}

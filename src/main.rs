//! # imghide Binary Entry Point
//!
//! ## Usage
//!
//! ```bash
//! # hide secret.png inside holiday.png
//! imghide --steg holiday.png --input-file secret.png --output-file stego.png
//!
//! # recover it
//! imghide --unsteg stego.png --output-file recovered.png
//! ```
//!
//! Stego output must be written in a lossless format (PNG, BMP, TIFF, ...).

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

use imghide::common::config::HideConfig;
use imghide::utils::init_logger;
use imghide::Command;

/// Hide an image inside another image
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Carrier image to steg
    #[arg(short = 's', long = "steg", value_name = "CARRIER")]
    steg: Option<PathBuf>,

    /// Image to hide
    #[arg(short = 'i', long = "input-file", value_name = "PAYLOAD")]
    input_file: Option<PathBuf>,

    /// Output image
    #[arg(short = 'o', long = "output-file", value_name = "OUTPUT")]
    output_file: PathBuf,

    /// Stego image to unsteg
    #[arg(short = 'u', long = "unsteg", value_name = "STEGO")]
    unsteg: Option<PathBuf>,

    /// Path to a configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => HideConfig::from_file(path)?,
        None => HideConfig::default(),
    };

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        config.logging.level
    };
    init_logger(level);

    let command = Command::resolve(args.steg, args.input_file, args.unsteg, args.output_file)?;
    command.execute(&config)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Every error message already names its cause
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use coinsort_core::io::image_io::load_frame;
use coinsort_core::pipeline::process_frame;

use super::load_config;
use crate::summary::print_coin_table;

#[derive(Args)]
pub struct DetectArgs {
    /// Input image file
    pub file: PathBuf,

    /// Pipeline config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &DetectArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let frame = load_frame(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!("Loaded {}x{} image", frame.width(), frame.height());

    let report = process_frame(&frame, &config)
        .with_context(|| format!("Failed to process {}", args.file.display()))?;

    print_coin_table(&report.coins);
    println!("\nTotal value: {:.2} PLN", report.total_value());

    Ok(())
}

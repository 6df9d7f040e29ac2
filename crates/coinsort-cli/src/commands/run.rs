use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use coinsort_core::io::image_io::collect_inputs;
use coinsort_core::pipeline::{run_batch, ProgressReporter};
use indicatif::{ProgressBar, ProgressStyle};

use super::load_config;
use crate::summary::{print_batch_results, print_run_summary};

#[derive(Args)]
pub struct RunArgs {
    /// Input image files or directories
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Pipeline config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output directory for annotated images
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write images in which no coin was found, unmodified
    #[arg(long)]
    pub write_unannotated: bool,
}

/// Drives an indicatif bar from the batch driver's callbacks.
struct BarReporter {
    bar: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin(&self, total_images: usize) {
        self.bar.set_length(total_images as u64);
        self.bar.set_message("Classifying");
    }

    fn advance(&self, images_done: usize) {
        self.bar.set_position(images_done as u64);
    }

    fn finish(&self) {
        self.bar.finish_with_message("Done");
    }
}

pub fn run(args: &RunArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(ref dir) = args.output {
        config.output_dir = dir.clone();
    }
    if args.write_unannotated {
        config.write_unannotated = true;
    }

    let inputs = collect_inputs(&args.inputs).context("Failed to collect input images")?;
    if inputs.is_empty() {
        anyhow::bail!("No input images found");
    }

    print_run_summary(&config, inputs.len());

    let bar = ProgressBar::new(inputs.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg:12} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let reporter = BarReporter { bar };

    let items = run_batch(&inputs, &config, &reporter)?;
    let failed = print_batch_results(&items);

    if failed == items.len() {
        anyhow::bail!("All {} images failed", failed);
    }
    Ok(())
}

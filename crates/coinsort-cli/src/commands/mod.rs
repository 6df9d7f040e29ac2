pub mod config;
pub mod detect;
pub mod run;

use std::path::Path;

use anyhow::{Context, Result};
use coinsort_core::pipeline::config::PipelineConfig;

/// Read a TOML pipeline config, or fall back to the defaults.
pub fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    let Some(path) = path else {
        return Ok(PipelineConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: PipelineConfig = toml::from_str(&contents).context("Invalid pipeline config")?;
    config.validate().context("Invalid pipeline config")?;
    Ok(config)
}

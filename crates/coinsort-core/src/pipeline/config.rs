use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::detection::HoughParams;
use crate::error::Result;
use crate::sampling::SamplingConfig;

/// Everything the classification pipeline can be tuned with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory annotated images are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Write the unmodified image when no circle is detected.
    #[serde(default)]
    pub write_unannotated: bool,
    #[serde(default)]
    pub detection: HoughParams,
    #[serde(default)]
    pub sampling: SamplingConfig,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("results")
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            write_unannotated: false,
            detection: HoughParams::default(),
            sampling: SamplingConfig::default(),
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<()> {
        self.detection.validate()?;
        self.sampling.validate()
    }
}

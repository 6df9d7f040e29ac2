use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CENTER_FRACTION, DEFAULT_RING_THICKNESS};
use crate::error::{CoinError, Result};
use crate::quality::BackgroundRule;

/// How the center and ring samples are cut from a detected coin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Center sample radius as a fraction of the coin radius.
    #[serde(default = "default_center_fraction")]
    pub center_fraction: f64,
    /// Thickness of the outline that selects the ring sample.
    #[serde(default = "default_ring_thickness")]
    pub ring_thickness: i32,
    /// Which pixels the texture metric ignores.
    #[serde(default)]
    pub background: BackgroundRule,
}

fn default_center_fraction() -> f64 {
    DEFAULT_CENTER_FRACTION
}
fn default_ring_thickness() -> i32 {
    DEFAULT_RING_THICKNESS
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            center_fraction: DEFAULT_CENTER_FRACTION,
            ring_thickness: DEFAULT_RING_THICKNESS,
            background: BackgroundRule::default(),
        }
    }
}

impl SamplingConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.center_fraction > 0.0 && self.center_fraction <= 1.0) {
            return Err(CoinError::InvalidConfig(format!(
                "center_fraction must be in (0, 1], got {}",
                self.center_fraction
            )));
        }
        if self.ring_thickness < 1 {
            return Err(CoinError::InvalidConfig(format!(
                "ring_thickness must be at least 1, got {}",
                self.ring_thickness
            )));
        }
        Ok(())
    }
}

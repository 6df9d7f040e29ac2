use std::fmt;
use std::path::PathBuf;

use image::RgbImage;

use crate::classify::{Decision, Denomination};
use crate::error::CoinError;
use crate::frame::Circle;

/// Processing state of one image, used in log output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Loaded,
    EdgesComputed,
    CirclesDetected,
    Sampled,
    Scored,
    Decided,
    Rendered,
    Finalized,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded => write!(f, "Loaded"),
            Self::EdgesComputed => write!(f, "Edges computed"),
            Self::CirclesDetected => write!(f, "Circles detected"),
            Self::Sampled => write!(f, "Regions sampled"),
            Self::Scored => write!(f, "Regions scored"),
            Self::Decided => write!(f, "Denominations decided"),
            Self::Rendered => write!(f, "Annotations rendered"),
            Self::Finalized => write!(f, "Finalized"),
        }
    }
}

/// Result of scoring and classifying one detected circle.
#[derive(Clone, Debug, PartialEq)]
pub struct CoinReport {
    pub circle: Circle,
    /// `None` when the center sample had no pixels.
    pub center_score: Option<f64>,
    /// `None` when the ring sample had no pixels.
    pub ring_score: Option<f64>,
    pub decision: Decision,
}

/// Everything produced for one input image.
#[derive(Clone, Debug)]
pub struct ImageReport {
    pub name: String,
    /// Per-circle results in detector order.
    pub coins: Vec<CoinReport>,
    /// Annotated image; `None` when nothing should be written.
    pub output: Option<RgbImage>,
}

impl ImageReport {
    /// Sum of the values of all non-skip coins.
    pub fn total_value(&self) -> f64 {
        total_value(&self.coins)
    }

    pub fn count(&self, denomination: Denomination) -> usize {
        self.coins
            .iter()
            .filter(|c| c.decision.denomination == denomination)
            .count()
    }
}

pub(crate) fn total_value(coins: &[CoinReport]) -> f64 {
    coins
        .iter()
        .filter(|c| !c.decision.is_skip())
        .map(|c| c.decision.value)
        .sum()
}

/// What the batch driver keeps once an image has been written.
#[derive(Clone, Debug)]
pub struct ImageOutcome {
    pub coins: Vec<CoinReport>,
    /// Path of the written file, if any.
    pub written: Option<PathBuf>,
}

impl ImageOutcome {
    pub fn total_value(&self) -> f64 {
        total_value(&self.coins)
    }
}

/// One entry of a batch run, in input order.
#[derive(Debug)]
pub struct BatchItem {
    pub input: PathBuf,
    pub outcome: std::result::Result<ImageOutcome, CoinError>,
}

/// Thread-safe progress reporting for batch runs.
///
/// All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// The batch is starting with `total_images` inputs.
    fn begin(&self, _total_images: usize) {}

    /// Another image has finished (successfully or not).
    fn advance(&self, _images_done: usize) {}

    /// The whole batch is finished.
    fn finish(&self) {}
}

/// No-op progress reporter.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}

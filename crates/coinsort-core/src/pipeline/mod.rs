pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::{process_frame, run_batch, score_circle};
pub use types::{
    BatchItem, CoinReport, ImageOutcome, ImageReport, NoOpReporter, PipelineStage,
    ProgressReporter,
};

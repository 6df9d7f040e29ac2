pub mod config;
pub mod region;

pub use config::SamplingConfig;
pub use region::{clamp_rect, sample_center, sample_disc, sample_ring, PixelRect, Region};

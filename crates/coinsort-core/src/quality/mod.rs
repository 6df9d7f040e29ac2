pub mod divergence;

pub use divergence::{channel_divergence, pixel_divergence, BackgroundRule};

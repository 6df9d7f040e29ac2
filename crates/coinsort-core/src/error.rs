use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoinError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Degenerate input: edge response is flat, cannot rescale")]
    DegenerateInput,

    #[error("Empty region: no pixels inside the sampling mask")]
    EmptyRegion,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Output {} is already claimed by an earlier input", .0.display())]
    DuplicateOutput(std::path::PathBuf),
}

pub type Result<T> = std::result::Result<T, CoinError>;

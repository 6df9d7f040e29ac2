use image::RgbImage;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};
use crate::error::{CoinError, Result};

/// A decoded color photograph and the file name it came from.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data in RGB order.
    pub image: RgbImage,
    /// Base file name, reused for the annotated output.
    pub name: String,
}

impl Frame {
    pub fn new(image: RgbImage, name: impl Into<String>) -> Result<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(CoinError::InvalidDimensions { width, height });
        }
        Ok(Self {
            image,
            name: name.into(),
        })
    }

    pub fn width(&self) -> usize {
        self.image.width() as usize
    }

    pub fn height(&self) -> usize {
        self.image.height() as usize
    }
}

/// A circular object found by the detector, in integer pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    pub center_x: i32,
    pub center_y: i32,
    pub radius: i32,
}

impl Circle {
    pub fn new(center_x: i32, center_y: i32, radius: i32) -> Self {
        Self {
            center_x,
            center_y,
            radius,
        }
    }
}

/// Convert an RGB image to an 8-bit luminance grid, shape = (height, width).
pub fn grayscale(image: &RgbImage) -> Array2<u8> {
    let (w, h) = image.dimensions();
    let mut gray = Array2::<u8>::zeros((h as usize, w as usize));
    for (col, row, pixel) in image.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        let y = LUMINANCE_R * r as f64 + LUMINANCE_G * g as f64 + LUMINANCE_B * b as f64;
        gray[[row as usize, col as usize]] = y.round().clamp(0.0, 255.0) as u8;
    }
    gray
}

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};

use crate::error::{CoinError, Result};
use crate::frame::Frame;

/// File extensions picked up when an input path is a directory.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff"];

/// Decode an image file as 8-bit RGB.
pub fn load_frame(path: &Path) -> Result<Frame> {
    let image = image::open(path)?.to_rgb8();
    Frame::new(image, file_name(path))
}

/// Encode an RGB image, choosing the format from the file extension.
/// Unknown extensions fall back to PNG.
pub fn save_color_image(image: &RgbImage, path: &Path) -> Result<()> {
    match ImageFormat::from_path(path) {
        Ok(format) => image.save_with_format(path, format)?,
        Err(_) => image.save_with_format(path, ImageFormat::Png)?,
    }
    Ok(())
}

/// `output_dir/<base file name of input>`.
pub fn result_path(output_dir: &Path, input: &Path) -> PathBuf {
    output_dir.join(file_name(input))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Expand the given paths into a sorted list of image files.
///
/// Files are taken as-is; directories contribute their image files (not
/// recursive). A path that does not exist is an error.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = std::fs::read_dir(path)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && has_image_extension(p))
                .collect();
            entries.sort();
            files.extend(entries);
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            return Err(CoinError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("input not found: {}", path.display()),
            )));
        }
    }
    Ok(files)
}

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};

/// Black image with a uniformly colored disc whose edge falls off smoothly
/// over a couple of pixels, like a photographed coin.
pub fn soft_disc_image(w: u32, h: u32, cx: f64, cy: f64, r: f64, color: [u8; 3]) -> RgbImage {
    RgbImage::from_fn(w, h, |x, y| {
        let d = ((x as f64 - cx).powi(2) + (y as f64 - cy).powi(2)).sqrt();
        let weight = 0.5 * (1.0 - ((d - r) / 1.5).tanh());
        Rgb(color.map(|c| (c as f64 * weight).round() as u8))
    })
}

/// Soft-edged two-tone coin: `inner` up to `split` pixels from the center,
/// `outer` from there to `r`, both boundaries blurred like `soft_disc_image`.
#[allow(clippy::too_many_arguments)]
pub fn soft_two_tone_coin(
    w: u32,
    h: u32,
    cx: f64,
    cy: f64,
    r: f64,
    split: f64,
    inner: [u8; 3],
    outer: [u8; 3],
) -> RgbImage {
    RgbImage::from_fn(w, h, |x, y| {
        let d = ((x as f64 - cx).powi(2) + (y as f64 - cy).powi(2)).sqrt();
        let w_outer = 0.5 * (1.0 - ((d - r) / 1.5).tanh());
        let w_inner = 0.5 * (1.0 - ((d - split) / 1.5).tanh());
        let mut px = [0u8; 3];
        for (i, p) in px.iter_mut().enumerate() {
            let (o, n) = (outer[i] as f64, inner[i] as f64);
            *p = (o * w_outer + (n - o) * w_inner).round().clamp(0.0, 255.0) as u8;
        }
        Rgb(px)
    })
}

/// Black image with a hard-edged two-tone coin: `inner` up to `split`
/// pixels from the center, `outer` from there to `r`.
pub fn two_tone_coin(
    w: u32,
    h: u32,
    center: (i32, i32),
    r: i32,
    split: i32,
    inner: [u8; 3],
    outer: [u8; 3],
) -> RgbImage {
    RgbImage::from_fn(w, h, |x, y| {
        let dx = x as i64 - center.0 as i64;
        let dy = y as i64 - center.1 as i64;
        let d_sq = dx * dx + dy * dy;
        if d_sq <= (split as i64).pow(2) {
            Rgb(inner)
        } else if d_sq <= (r as i64).pow(2) {
            Rgb(outer)
        } else {
            Rgb([0, 0, 0])
        }
    })
}

/// Encode `image` as PNG under `dir` and return its path.
pub fn write_png(dir: &Path, name: &str, image: &RgbImage) -> PathBuf {
    let path = dir.join(name);
    image.save(&path).expect("write test PNG");
    path
}
